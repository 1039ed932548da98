use cfsim_geom::Aabb;

/// Sweep along X, then confirm on both axes. Tombstoned (`None`) and
/// non-finite boxes never pair; `admit` drops pairs before the overlap test.
/// Returns `(i, k)` with `i < k`, sorted, independent of input order.
pub fn pairs_sap<F>(aabbs: &[Option<Aabb>], mut admit: F) -> Vec<(usize, usize)>
where
    F: FnMut(usize, usize) -> bool,
{
    // (min.x, max.x, index), skipping tombstones and NaN/inf extents
    let mut spans: Vec<(f64, f64, usize)> = aabbs
        .iter()
        .enumerate()
        .filter_map(|(i, a)| a.map(|a| (a.min.x.min(a.max.x), a.min.x.max(a.max.x), i)))
        .filter(|&(lo, hi, _)| lo.is_finite() && hi.is_finite())
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.2.cmp(&b.2)));

    let mut open: Vec<(f64, usize)> = Vec::new(); // (max.x, index)
    let mut out = Vec::new();
    for (lo, hi, idx) in spans {
        open.retain(|&(end, _)| end >= lo);
        for &(_, other) in &open {
            let (i, k) = (other.min(idx), other.max(idx));
            if !admit(i, k) { continue; }
            if let (Some(a), Some(b)) = (aabbs[i], aabbs[k]) {
                if a.overlaps(&b) { out.push((i, k)); }
            }
        }
        open.push((hi, idx));
    }
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfsim_core::vec2;

    fn bx(x: f64, y: f64, h: f64) -> Option<Aabb> {
        Some(Aabb::from_center_half_extents(vec2(x, y), vec2(h, h)))
    }

    #[test] fn finds_overlaps_in_order() {
        let boxes = vec![bx(0.0, 0.0, 1.0), bx(10.0, 0.0, 1.0), bx(1.5, 0.5, 1.0), bx(1.5, 9.0, 1.0)];
        assert_eq!(pairs_sap(&boxes, |_, _| true), vec![(0, 2)]);
    }

    #[test] fn skips_removed_and_nan() {
        let boxes = vec![bx(0.0, 0.0, 1.0), None, bx(0.5, 0.0, 1.0), bx(f64::NAN, 0.0, 1.0)];
        assert_eq!(pairs_sap(&boxes, |_, _| true), vec![(0, 2)]);
    }

    #[test] fn admit_filters_before_overlap() {
        let boxes = vec![bx(0.0, 0.0, 1.0), bx(0.5, 0.0, 1.0), bx(1.0, 0.0, 1.0)];
        assert_eq!(pairs_sap(&boxes, |_, _| true), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(pairs_sap(&boxes, |i, _| i != 0), vec![(1, 2)]);
    }
}
