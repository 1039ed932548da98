use std::str::FromStr;

use cfsim_core::SimConfig;
use cfsim_judge::{
    count_passes, estimate, grid_search, predict, EmpiricalMean, EstimatorConfig, JudgeError,
};
use cfsim_noise::{Condition, NoiseParams};
use cfsim_trial::{run_ground_truth, ActuatorDesc, BallDesc, Trial};

fn ball(name: &str, position: [f64; 2], velocity: [f64; 2]) -> BallDesc {
    BallDesc { name: name.into(), position, velocity }
}

/// A pushes a resting B straight through the gate.
fn push() -> Trial {
    Trial { trial: 0, balls: vec![ball("A", [700.0, 300.0], [-1.0, 0.0]), ball("B", [500.0, 300.0], [0.0, 0.0])], bricks: vec![] }
}

/// B rolls toward the gate but A is in the way. A brick above the gate can
/// drop into the opening; it never does in the clip itself.
fn blocked() -> Trial {
    Trial {
        trial: 0,
        balls: vec![ball("A", [400.0, 300.0], [0.0, 0.0]), ball("B", [700.0, 300.0], [-1.0, 0.0])],
        bricks: vec![ActuatorDesc {
            name: "brick".into(),
            orientation: 0.0,
            position: [40.0, 520.0],
            velocity: [0.0, -1.0],
            step: 1000.0,
            sensor_pos: [40.0, 250.0],
            nominal_step: Some(30.0),
        }],
    }
}

fn est(num_samples: u32, seed: u64) -> EstimatorConfig {
    EstimatorConfig { num_samples, seed, parallel: false }
}

#[test]
fn collision_course_ground_truth() {
    let t = run_ground_truth(&push(), &SimConfig::default()).unwrap();
    assert_eq!(t.events.collisions.len(), 1);
    assert_eq!(t.outcome, 1);
}

#[test]
fn removed_pusher_means_no_pass() {
    let sim = SimConfig::default();
    for cond in Condition::ALL {
        let j = estimate(&push(), &sim, cond, &NoiseParams::zero(), &est(50, 3)).unwrap();
        assert_eq!(j.probability, 0.0, "{cond}");
        assert_eq!(j.ground_truth.outcome, 1);
    }
}

#[test]
fn idle_brick_and_no_noise_give_identical_samples() {
    let sim = SimConfig::default();
    let truth = run_ground_truth(&blocked(), &sim).unwrap();
    assert_eq!(truth.outcome, 0);
    assert!(!truth.actuator_moved);

    let j = estimate(&blocked(), &sim, Condition::Counterfactual, &NoiseParams::new(0.0, 175.0), &est(40, 11)).unwrap();
    assert_eq!(j.probability, 1.0);
}

#[test]
fn hypothetical_brick_closes_the_gate_half_the_time() {
    let sim = SimConfig::default();
    let j = estimate(&blocked(), &sim, Condition::Hypothetical, &NoiseParams::zero(), &est(400, 5)).unwrap();
    assert!((0.4..=0.6).contains(&j.probability), "p = {}", j.probability);
}

#[test]
fn same_seed_same_estimate() {
    let sim = SimConfig::default();
    let params = NoiseParams::new(3.0, 175.0);
    let a = estimate(&blocked(), &sim, Condition::Hypothetical, &params, &est(60, 42)).unwrap();
    let b = estimate(&blocked(), &sim, Condition::Hypothetical, &params, &est(60, 42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn parallel_matches_sequential() {
    let sim = SimConfig::default();
    let params = NoiseParams::new(3.0, 60.0);
    let truth = run_ground_truth(&blocked(), &sim).unwrap();
    let seq = est(80, 9);
    let par = EstimatorConfig { parallel: true, ..seq.clone() };
    for cond in Condition::ALL {
        let s = count_passes(&blocked(), &sim, cond, &params, &truth, &seq).unwrap();
        let p = count_passes(&blocked(), &sim, cond, &params, &truth, &par).unwrap();
        assert_eq!(s, p, "{cond}");
    }
}

#[test]
fn large_samples_converge() {
    let sim = SimConfig::default();
    let a = estimate(&blocked(), &sim, Condition::Hypothetical, &NoiseParams::zero(), &EstimatorConfig { num_samples: 600, seed: 1, parallel: true }).unwrap();
    let b = estimate(&blocked(), &sim, Condition::Hypothetical, &NoiseParams::zero(), &EstimatorConfig { num_samples: 600, seed: 2, parallel: true }).unwrap();
    assert!((a.probability - b.probability).abs() < 0.12, "{} vs {}", a.probability, b.probability);
}

#[test]
fn mirrored_trial_mirrors_the_run() {
    let sim = SimConfig::default();
    let trial = Trial {
        trial: 1,
        balls: vec![ball("A", [650.0, 380.0], [-1.0, -0.2]), ball("B", [450.0, 340.0], [0.0, 0.0])],
        bricks: vec![],
    };
    let mut mirrored = trial.clone();
    for b in &mut mirrored.balls {
        b.position[1] = 600.0 - b.position[1];
        b.velocity[1] = -b.velocity[1];
    }

    let run = |t: &Trial| {
        let mut w = t.build_world(&sim).unwrap();
        let log = w.simulate().unwrap().clone();
        (log, w.pose_of("B").unwrap().pos)
    };
    let (log, end) = run(&trial);
    let (log_m, end_m) = run(&mirrored);

    assert!(!log.collisions.is_empty());
    assert_eq!(log, log_m);
    assert!((end.x - end_m.x).abs() < 1e-6);
    assert!((end.y - (600.0 - end_m.y)).abs() < 1e-6);
}

#[test]
fn configuration_errors_fail_fast() {
    let sim = SimConfig::default();
    assert!(Condition::from_str("maybe").is_err());
    assert!(matches!(
        estimate(&push(), &sim, Condition::Counterfactual, &NoiseParams::zero(), &est(0, 0)),
        Err(JudgeError::NoSamples)
    ));
    assert!(matches!(
        estimate(&push(), &sim, Condition::Counterfactual, &NoiseParams::new(f64::NAN, 0.0), &est(5, 0)),
        Err(JudgeError::Noise(_))
    ));
}

#[test]
fn grid_rows_are_row_major() {
    let sim = SimConfig::default();
    let trials = [push(), blocked()];
    let human = [
        EmpiricalMean { hypothetical: 0.0, counterfactual: 0.0 },
        EmpiricalMean { hypothetical: 0.5, counterfactual: 1.0 },
    ];
    let rows = grid_search(&trials, &human, &[0.0, 1.0], &[0.0, 50.0, 100.0], &sim, &est(8, 4)).unwrap();
    let keys: Vec<(f64, f64)> = rows.iter().map(|r| (r.ball_noise, r.actuator_noise)).collect();
    assert_eq!(keys, vec![(0.0, 0.0), (0.0, 50.0), (0.0, 100.0), (1.0, 0.0), (1.0, 50.0), (1.0, 100.0)]);
    assert!(rows.iter().all(|r| r.loss >= 0.0));

    let preds = predict(&trials, &sim, &NoiseParams::zero(), &est(8, 4)).unwrap();
    assert_eq!(preds[0].counterfactual, 0.0);
    assert_eq!(preds[1].counterfactual, 1.0);
}
