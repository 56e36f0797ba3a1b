//! Spatial and temporal extents of a collection.

use serde::{Deserialize, Serialize};

/// The spatial and temporal extent of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

impl Extent {
    /// Create an extent from a single bounding box and a single interval.
    pub fn new(bbox: &[f64], start: Option<String>, end: Option<String>) -> Self {
        Self {
            spatial: SpatialExtent {
                bbox: vec![bbox.to_vec()],
            },
            temporal: TemporalExtent::new(start, end),
        }
    }
}

/// Spatial extent with bounding boxes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpatialExtent {
    /// Bounding boxes as 4- or 6-element arrays. The first box covers the
    /// whole collection.
    pub bbox: Vec<Vec<f64>>,
}

/// Temporal extent with time intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemporalExtent {
    /// Time intervals as [start, end] pairs (RFC 3339).
    /// null values indicate open-ended intervals.
    pub interval: Vec<Vec<Option<String>>>,
}

impl TemporalExtent {
    /// Create a temporal extent from start and end times.
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self {
            interval: vec![vec![start, end]],
        }
    }
}
