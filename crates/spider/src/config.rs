//! Spiderfy design constants.
//!
//! Defaults are tuned for the usual web-map marker sizes; keeping all the
//! magic numbers in one struct makes them easy to tweak engine-wide.

/// Layout constants for expanding a cluster into a circle or spiral of leaves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiderConfig {
    /// Leaf counts up to and including this use the circle layout.
    pub circle_max_leaves: usize,
    /// Radius of the circle layout.
    pub circle_radius_px: f64,
    /// Leg length of the first spiral leaf.
    pub spiral_leg_start_px: f64,
    /// Target spacing between consecutive leaves along the spiral.
    pub spiral_foot_separation_px: f64,
    /// Target spacing between consecutive turns of the spiral.
    pub spiral_leg_growth_px: f64,
    /// Small per-step angle drift so leaves never repeat an exact angle.
    pub spiral_angle_drift: f64,
    /// Hard cap on leaves placed in one web.
    pub max_leaves: usize,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            circle_max_leaves: 10,
            circle_radius_px: 80.0,
            spiral_leg_start_px: 25.0,
            spiral_foot_separation_px: 28.0,
            spiral_leg_growth_px: 5.0,
            spiral_angle_drift: 0.0005,
            max_leaves: 100,
        }
    }
}
