use std::f64::consts::TAU;

use foundation::math::PixelVec;

use crate::config::SpiderConfig;

/// Which spiderfy layout a leaf count maps to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Circle,
    Spiral,
}

impl LayoutKind {
    /// Selection policy: small clusters go on a circle, large ones on a
    /// spiral (a single circle overcrowds past `circle_max_leaves`).
    pub fn for_leaf_count(count: usize, config: &SpiderConfig) -> Self {
        if count <= config.circle_max_leaves {
            LayoutKind::Circle
        } else {
            LayoutKind::Spiral
        }
    }
}

/// Places `count` leaves evenly on a circle around the anchor.
///
/// Ordering contract:
/// - Offset `i` sits at angle `i * 2π / count`, starting east of the anchor.
/// - Deterministic: identical input yields a bit-identical sequence.
pub fn circle_offsets(count: usize, config: &SpiderConfig) -> Vec<PixelVec> {
    if count == 0 {
        return Vec::new();
    }

    let r = config.circle_radius_px;
    let step = TAU / count as f64;

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let angle = step * i as f64;
        out.push(PixelVec::new(r * angle.cos(), r * angle.sin()));
    }
    out
}

/// Places `count` leaves along an expanding Archimedean-like spiral.
///
/// Each step advances the angle by roughly one foot separation of arc at the
/// current leg length, then grows the leg by `2π * leg_growth / angle` so the
/// gap between consecutive turns stays close to `spiral_leg_growth_px`
/// regardless of radius. The drift term keeps angles from ever repeating
/// exactly.
///
/// Ordering contract:
/// - The distance from the anchor strictly increases with the index.
/// - Deterministic: identical input yields a bit-identical sequence.
pub fn spiral_offsets(count: usize, config: &SpiderConfig) -> Vec<PixelVec> {
    let mut leg = config.spiral_leg_start_px;
    let mut angle = 0.0_f64;

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        angle += config.spiral_foot_separation_px / leg + i as f64 * config.spiral_angle_drift;
        out.push(PixelVec::new(leg * angle.cos(), leg * angle.sin()));
        leg += TAU * config.spiral_leg_growth_px / angle;
    }
    out
}

/// Computes offsets for `count` leaves using the layout the selection policy
/// picks for that count.
pub fn leaf_offsets(count: usize, config: &SpiderConfig) -> Vec<PixelVec> {
    match LayoutKind::for_leaf_count(count, config) {
        LayoutKind::Circle => circle_offsets(count, config),
        LayoutKind::Spiral => spiral_offsets(count, config),
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutKind, circle_offsets, leaf_offsets, spiral_offsets};
    use crate::config::SpiderConfig;

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_leaves_yield_empty_sequences() {
        let cfg = SpiderConfig::default();
        assert!(circle_offsets(0, &cfg).is_empty());
        assert!(spiral_offsets(0, &cfg).is_empty());
        assert!(leaf_offsets(0, &cfg).is_empty());
    }

    #[test]
    fn sequence_length_matches_leaf_count() {
        let cfg = SpiderConfig::default();
        for count in 1..=40 {
            assert_eq!(circle_offsets(count, &cfg).len(), count);
            assert_eq!(spiral_offsets(count, &cfg).len(), count);
        }
    }

    #[test]
    fn single_leaf_circle_sits_east_at_radius() {
        let cfg = SpiderConfig::default();
        let offsets = circle_offsets(1, &cfg);
        assert_eq!(offsets.len(), 1);
        assert!((offsets[0].x - cfg.circle_radius_px).abs() < EPS);
        assert!(offsets[0].y.abs() < EPS);
    }

    #[test]
    fn circle_keeps_every_leaf_at_the_fixed_radius() {
        let cfg = SpiderConfig::default();
        for count in 1..=10 {
            for offset in circle_offsets(count, &cfg) {
                assert!((offset.length() - cfg.circle_radius_px).abs() < EPS);
            }
        }
    }

    #[test]
    fn circle_has_no_coincident_leaves() {
        let cfg = SpiderConfig::default();
        for count in 2..=10 {
            let offsets = circle_offsets(count, &cfg);
            for i in 0..offsets.len() {
                for j in (i + 1)..offsets.len() {
                    assert!(
                        offsets[i].distance(offsets[j]) > EPS,
                        "leaves {i} and {j} coincide for count {count}"
                    );
                }
            }
        }
    }

    #[test]
    fn circle_spacing_is_even() {
        let cfg = SpiderConfig::default();
        let offsets = circle_offsets(8, &cfg);
        let gaps: Vec<f64> = (0..8)
            .map(|i| offsets[i].distance(offsets[(i + 1) % 8]))
            .collect();
        for gap in &gaps[1..] {
            assert!((gap - gaps[0]).abs() < EPS);
        }
    }

    #[test]
    fn spiral_radius_grows_strictly() {
        let cfg = SpiderConfig::default();
        for count in [2, 11, 50, 100] {
            let offsets = spiral_offsets(count, &cfg);
            for pair in offsets.windows(2) {
                assert!(pair[1].length() > pair[0].length());
            }
        }
    }

    #[test]
    fn spiral_first_leaf_sits_at_starting_leg_length() {
        let cfg = SpiderConfig::default();
        let offsets = spiral_offsets(3, &cfg);
        assert!((offsets[0].length() - cfg.spiral_leg_start_px).abs() < EPS);
    }

    #[test]
    fn spiral_consecutive_leaves_never_coincide() {
        let cfg = SpiderConfig::default();
        let offsets = spiral_offsets(60, &cfg);
        for pair in offsets.windows(2) {
            assert!(pair[0].distance(pair[1]) > EPS);
        }
    }

    #[test]
    fn selection_policy_threshold_is_inclusive_on_the_circle_side() {
        let cfg = SpiderConfig::default();
        assert_eq!(LayoutKind::for_leaf_count(5, &cfg), LayoutKind::Circle);
        assert_eq!(LayoutKind::for_leaf_count(10, &cfg), LayoutKind::Circle);
        assert_eq!(LayoutKind::for_leaf_count(11, &cfg), LayoutKind::Spiral);
        assert_eq!(LayoutKind::for_leaf_count(15, &cfg), LayoutKind::Spiral);
    }

    #[test]
    fn dispatch_matches_selected_layout() {
        let cfg = SpiderConfig::default();
        assert_eq!(leaf_offsets(5, &cfg), circle_offsets(5, &cfg));
        assert_eq!(leaf_offsets(15, &cfg), spiral_offsets(15, &cfg));
    }

    #[test]
    fn layouts_are_deterministic() {
        let cfg = SpiderConfig::default();
        assert_eq!(circle_offsets(7, &cfg), circle_offsets(7, &cfg));
        assert_eq!(spiral_offsets(23, &cfg), spiral_offsets(23, &cfg));
    }

    #[test]
    fn offsets_are_finite() {
        let cfg = SpiderConfig::default();
        for offset in leaf_offsets(200, &cfg) {
            assert!(offset.is_finite());
        }
    }
}
