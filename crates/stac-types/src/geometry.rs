//! GeoJSON geometry for STAC Items.

use serde::{Deserialize, Serialize};

/// GeoJSON geometry types used by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A polygon: an exterior ring followed by optional holes.
    Polygon {
        /// Rings of [longitude, latitude] positions. Each ring is closed.
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

impl Geometry {
    /// Build the rectangle covering a `[x1, y1, x2, y2]` bounding box.
    ///
    /// The corners are ordered so that the exterior ring winds
    /// counter-clockwise regardless of the axis order of the input, as
    /// required by RFC 7946. The ring is closed (five positions).
    ///
    /// Panics if `bbox` has fewer than four numbers.
    pub fn from_bbox(bbox: &[f64]) -> Self {
        let (west, east) = min_max(bbox[0], bbox[2]);
        let (south, north) = min_max(bbox[1], bbox[3]);

        Geometry::Polygon {
            coordinates: vec![vec![
                [west, south],
                [east, south],
                [east, north],
                [west, north],
                [west, south],
            ]],
        }
    }

    /// The exterior ring.
    pub fn exterior(&self) -> &[[f64; 2]] {
        match self {
            Geometry::Polygon { coordinates } => coordinates.first().map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// Whether every ring starts and ends on the same position.
    pub fn is_closed(&self) -> bool {
        match self {
            Geometry::Polygon { coordinates } => coordinates
                .iter()
                .all(|ring| ring.len() >= 4 && ring.first() == ring.last()),
        }
    }

    /// Whether the exterior ring winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        signed_area(self.exterior()) > 0.0
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Shoelace formula. Positive for counter-clockwise rings.
fn signed_area(ring: &[[f64; 2]]) -> f64 {
    ring.windows(2)
        .map(|w| w[0][0] * w[1][1] - w[1][0] * w[0][1])
        .sum::<f64>()
        / 2.0
}
