//! Cluster-leaf payload decoding.
//!
//! When the user clicks a cluster, the mapping library answers a
//! "cluster leaves" query with a GeoJSON payload: a FeatureCollection of the
//! point features folded into that cluster. This module types that payload
//! for the earthquake feed (USGS-style properties: `mag`, `place`, `time`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One earthquake point unfolded from a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuakeLeaf {
    pub id: Option<String>,
    pub lon_deg: f64,
    pub lat_deg: f64,
    /// Third coordinate of the GeoJSON point, when present.
    pub depth_km: Option<f64>,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    /// Event time in milliseconds since the Unix epoch.
    pub time_ms: Option<i64>,
}

#[derive(Debug)]
pub enum LeafDecodeError {
    NotFeatureJson,
    InvalidFeature { index: usize, reason: String },
    UnsupportedGeometry { index: usize, kind: String },
}

impl std::fmt::Display for LeafDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeafDecodeError::NotFeatureJson => {
                write!(f, "expected GeoJSON Feature or FeatureCollection")
            }
            LeafDecodeError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
            LeafDecodeError::UnsupportedGeometry { index, kind } => {
                write!(f, "feature at index {index} has non-Point geometry: {kind}")
            }
        }
    }
}

impl std::error::Error for LeafDecodeError {}

/// Decodes a cluster-leaves payload from its JSON text.
pub fn leaves_from_geojson_str(payload: &str) -> Result<Vec<QuakeLeaf>, LeafDecodeError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| LeafDecodeError::InvalidFeature {
            index: 0,
            reason: format!("JSON parse error: {e}"),
        })?;
    leaves_from_geojson_value(value)
}

/// Decodes a cluster-leaves payload.
///
/// Accepts a `FeatureCollection` or a single `Feature`. Every feature must
/// carry a `Point` geometry; `mag`, `place`, `time` and the depth coordinate
/// are optional. Output order matches payload order (the caller's leaf list
/// stays index-aligned with the offsets computed for it).
pub fn leaves_from_geojson_value(value: Value) -> Result<Vec<QuakeLeaf>, LeafDecodeError> {
    let obj = value.as_object().ok_or(LeafDecodeError::NotFeatureJson)?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(LeafDecodeError::NotFeatureJson)?;

    match ty {
        "FeatureCollection" => {
            let features = obj
                .get("features")
                .and_then(|v| v.as_array())
                .ok_or(LeafDecodeError::NotFeatureJson)?;

            let mut out = Vec::with_capacity(features.len());
            for (index, feature) in features.iter().enumerate() {
                out.push(leaf_from_feature(index, feature)?);
            }
            Ok(out)
        }
        "Feature" => Ok(vec![leaf_from_feature(0, &value)?]),
        _ => Err(LeafDecodeError::NotFeatureJson),
    }
}

fn leaf_from_feature(index: usize, value: &Value) -> Result<QuakeLeaf, LeafDecodeError> {
    let obj = value.as_object().ok_or(LeafDecodeError::InvalidFeature {
        index,
        reason: "feature must be an object".to_string(),
    })?;

    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(LeafDecodeError::InvalidFeature {
            index,
            reason: "feature missing type".to_string(),
        })?;
    if ty != "Feature" {
        return Err(LeafDecodeError::InvalidFeature {
            index,
            reason: format!("unexpected feature type: {ty}"),
        });
    }

    let id = match obj.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    let geometry = obj
        .get("geometry")
        .and_then(|v| v.as_object())
        .ok_or(LeafDecodeError::InvalidFeature {
            index,
            reason: "feature missing geometry".to_string(),
        })?;
    let geom_type = geometry
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(LeafDecodeError::InvalidFeature {
            index,
            reason: "geometry missing type".to_string(),
        })?;
    if geom_type != "Point" {
        return Err(LeafDecodeError::UnsupportedGeometry {
            index,
            kind: geom_type.to_string(),
        });
    }

    let coords = geometry
        .get("coordinates")
        .and_then(|v| v.as_array())
        .ok_or(LeafDecodeError::InvalidFeature {
            index,
            reason: "Point missing coordinates".to_string(),
        })?;
    if coords.len() < 2 {
        return Err(LeafDecodeError::InvalidFeature {
            index,
            reason: format!("Point has {} coordinates, need at least 2", coords.len()),
        });
    }
    let lon_deg = coords[0]
        .as_f64()
        .ok_or_else(|| non_numeric_coord(index, "longitude"))?;
    let lat_deg = coords[1]
        .as_f64()
        .ok_or_else(|| non_numeric_coord(index, "latitude"))?;
    let depth_km = coords.get(2).and_then(|v| v.as_f64());

    let props = obj.get("properties").and_then(|v| v.as_object());
    let magnitude = props.and_then(|p| p.get("mag")).and_then(|v| v.as_f64());
    let place = props
        .and_then(|p| p.get("place"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());
    let time_ms = props.and_then(|p| p.get("time")).and_then(|v| v.as_i64());

    Ok(QuakeLeaf {
        id,
        lon_deg,
        lat_deg,
        depth_km,
        magnitude,
        place,
        time_ms,
    })
}

fn non_numeric_coord(index: usize, which: &str) -> LeafDecodeError {
    LeafDecodeError::InvalidFeature {
        index,
        reason: format!("{which} is not a number"),
    }
}
