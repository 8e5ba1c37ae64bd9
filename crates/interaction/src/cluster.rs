use serde::{Deserialize, Serialize};

/// Feature id of a cluster as assigned by the mapping library.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterId(pub u64);
