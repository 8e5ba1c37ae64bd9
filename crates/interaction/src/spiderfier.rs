use foundation::math::PixelVec;
use formats::QuakeLeaf;
use spider::SpiderConfig;
use tracing::debug;

use crate::cluster::ClusterId;
use crate::web::{SpiderSnapshot, build_spider};

/// Event-driven spiderfy state: at most one cluster is expanded at a time.
///
/// The embedding map wires its callbacks straight through:
/// - a click that hit a cluster -> [`Spiderfier::on_cluster_click`]
/// - a click that hit nothing -> [`Spiderfier::on_map_click`]
/// - any zoom change -> [`Spiderfier::on_zoom_changed`] (the cluster's
///   composition is stale at the new zoom)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spiderfier {
    config: SpiderConfig,
    active: Option<SpiderSnapshot>,
}

impl Spiderfier {
    pub fn new(config: SpiderConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    /// The currently expanded cluster, if any.
    pub fn active(&self) -> Option<&SpiderSnapshot> {
        self.active.as_ref()
    }

    /// Handles a click on a cluster.
    ///
    /// Clicking the expanded cluster collapses it; clicking any other
    /// cluster replaces the active web. Returns the web that is now showing,
    /// if any.
    pub fn on_cluster_click(
        &mut self,
        cluster: ClusterId,
        anchor_px: PixelVec,
        leaves: &[QuakeLeaf],
    ) -> Option<&SpiderSnapshot> {
        if self.active.as_ref().is_some_and(|s| s.cluster == cluster) {
            self.collapse();
            return None;
        }

        let snapshot = build_spider(cluster, anchor_px, leaves, &self.config);
        debug!(
            cluster = cluster.0,
            leaves = snapshot.leaf_count(),
            layout = ?snapshot.layout,
            "spiderfy expand"
        );
        self.active = Some(snapshot);
        self.active.as_ref()
    }

    /// Handles a click that hit no cluster. Returns `true` if a web was
    /// collapsed.
    pub fn on_map_click(&mut self) -> bool {
        self.collapse()
    }

    /// Handles a zoom change. Returns `true` if a web was collapsed.
    pub fn on_zoom_changed(&mut self) -> bool {
        self.collapse()
    }

    /// Collapses the active web, if any. Returns `true` if the state changed.
    pub fn collapse(&mut self) -> bool {
        match self.active.take() {
            Some(snapshot) => {
                debug!(cluster = snapshot.cluster.0, "spiderfy collapse");
                true
            }
            None => false,
        }
    }
}
