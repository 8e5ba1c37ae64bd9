//! Spider web construction.
//!
//! A "web" is the expanded state of one cluster: every leaf placed at a
//! pixel offset around the cluster anchor, plus the leg line from the anchor
//! to each leaf. The mapping library renders the result; this module only
//! computes it.

use foundation::math::PixelVec;
use formats::QuakeLeaf;
use serde::Serialize;
use spider::{LayoutKind, SpiderConfig, leaf_offsets};

use crate::cluster::ClusterId;

/// One placed leaf of an expanded cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiderLeg {
    /// Position in the (possibly truncated) input leaf list.
    pub index: usize,
    pub leaf: QuakeLeaf,
    /// Pixel offset of the leaf icon relative to the cluster anchor.
    pub offset_px: PixelVec,
}

impl SpiderLeg {
    /// Far endpoint of the leg line, for rendering the anchor-to-leaf stroke.
    pub fn tip_px(&self, anchor_px: PixelVec) -> PixelVec {
        anchor_px + self.offset_px
    }

    /// Display properties the mapping library attaches to this leaf's
    /// feature. `icon_offset` feeds the library's icon-offset rendering.
    pub fn display_props(&self) -> LeafDisplayProps {
        LeafDisplayProps {
            icon_offset: [self.offset_px.x, self.offset_px.y],
            mag: self.leaf.magnitude,
            place: self.leaf.place.clone(),
            time: self.leaf.time_ms,
        }
    }
}

/// Per-feature display properties, serialized into the feature the mapping
/// library renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafDisplayProps {
    pub icon_offset: [f64; 2],
    pub mag: Option<f64>,
    pub place: Option<String>,
    pub time: Option<i64>,
}

/// The expanded state of exactly one cluster.
///
/// Ordering contract:
/// - `legs[i]` belongs to input leaf `i`; offsets stay index-aligned with
///   the (truncated) leaf list handed to [`build_spider`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpiderSnapshot {
    pub cluster: ClusterId,
    pub anchor_px: PixelVec,
    pub layout: LayoutKind,
    pub legs: Vec<SpiderLeg>,
}

impl SpiderSnapshot {
    pub fn leaf_count(&self) -> usize {
        self.legs.len()
    }
}

/// Expands a clicked cluster into a spider web.
///
/// Leaf lists longer than `config.max_leaves` are truncated before layout;
/// the library's leaves query is itself capped, and an unbounded spiral
/// stops being readable long before that.
pub fn build_spider(
    cluster: ClusterId,
    anchor_px: PixelVec,
    leaves: &[QuakeLeaf],
    config: &SpiderConfig,
) -> SpiderSnapshot {
    let placed = leaves.len().min(config.max_leaves);
    let offsets = leaf_offsets(placed, config);

    let legs = leaves[..placed]
        .iter()
        .zip(offsets)
        .enumerate()
        .map(|(index, (leaf, offset_px))| SpiderLeg {
            index,
            leaf: leaf.clone(),
            offset_px,
        })
        .collect();

    SpiderSnapshot {
        cluster,
        anchor_px,
        layout: LayoutKind::for_leaf_count(placed, config),
        legs,
    }
}
