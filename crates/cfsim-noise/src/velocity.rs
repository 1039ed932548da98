use cfsim_core::Vec2;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{check_magnitude, NoiseError};

/// Per-step Gaussian rotation of a ball's velocity direction.
///
/// Every step past `after_step` draws a fresh angle, so the heading performs a
/// random walk: after `n` steps its spread is `σ·√n`, not `σ`.
#[derive(Copy, Clone, Debug)]
pub struct VelocityNoise {
    dist: Option<Normal<f64>>,
    after_step: u32,
}

impl VelocityNoise {
    pub fn new(std_deg: f64, after_step: u32) -> Result<Self, NoiseError> {
        check_magnitude("ball_noise", std_deg)?;
        let dist = if std_deg == 0.0 {
            None
        } else {
            Some(Normal::new(0.0, std_deg).map_err(|_| NoiseError::InvalidMagnitude { field: "ball_noise", value: std_deg })?)
        };
        Ok(Self { dist, after_step })
    }

    pub fn off() -> Self { Self { dist: None, after_step: 0 } }

    #[inline] pub fn is_active(&self, step: u32) -> bool { self.dist.is_some() && step > self.after_step }

    pub fn perturb<R: Rng + ?Sized>(&self, step: u32, vel: Vec2, rng: &mut R) -> Vec2 {
        match &self.dist {
            Some(d) if step > self.after_step => rotate_deg(vel, d.sample(rng)),
            _ => vel,
        }
    }
}

#[inline]
pub fn rotate_deg(v: Vec2, deg: f64) -> Vec2 { Vec2::from_angle(deg.to_radians()).rotate(v) }

#[cfg(test)]
mod tests {
    use super::*;
    use cfsim_core::{sample_rng, vec2};
    use rand::RngCore;

    #[test] fn rotation_keeps_speed() {
        let v = rotate_deg(vec2(3.0, 4.0), 37.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        let q = rotate_deg(vec2(1.0, 0.0), 90.0);
        assert!((q - vec2(0.0, 1.0)).length() < 1e-12);
    }

    #[test] fn inactive_until_after_collision() {
        let n = VelocityNoise::new(2.0, 10).unwrap();
        let mut rng = sample_rng(1, 0);
        let mut twin = rng.clone();
        assert_eq!(n.perturb(10, vec2(1.0, 0.0), &mut rng), vec2(1.0, 0.0));
        assert_eq!(rng.next_u64(), twin.next_u64());
        assert!(n.is_active(11));
    }

    #[test] fn zero_magnitude_never_draws() {
        let n = VelocityNoise::new(0.0, 0).unwrap();
        let mut rng = sample_rng(2, 0);
        let mut twin = rng.clone();
        for s in 0..100 { assert_eq!(n.perturb(s, vec2(0.0, -1.0), &mut rng), vec2(0.0, -1.0)); }
        assert_eq!(rng.next_u64(), twin.next_u64());
        assert!(!n.is_active(50));
    }

    #[test] fn negative_magnitude_rejected() {
        assert!(matches!(VelocityNoise::new(-1.0, 0), Err(NoiseError::InvalidMagnitude { .. })));
    }

    #[test] fn drift_compounds_per_step() {
        // heading spread after n independent rotations of σ degrees is σ·√n
        let n = VelocityNoise::new(1.0, 0).unwrap();
        let steps = 400u32;
        let runs = 2000u64;
        let mut sum_sq = 0.0;
        for r in 0..runs {
            let mut rng = sample_rng(99, r);
            let mut v = vec2(1.0, 0.0);
            for s in 1..=steps { v = n.perturb(s, v, &mut rng); }
            let deg = v.y.atan2(v.x).to_degrees();
            sum_sq += deg * deg;
        }
        let spread = (sum_sq / runs as f64).sqrt();
        assert!(spread > 16.0 && spread < 24.0, "spread {spread}");
    }
}
