//! Geographic primitives for location selection.
//!
//! Event locations are restricted to a fixed bounding box over Egypt. The box
//! is a product decision, not configuration; both edges of each axis are part
//! of the valid region.

use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;

/// Cursor movement per keypress on the map panel, in degrees.
pub const CURSOR_STEP: f64 = 0.1;
/// Coarse cursor movement (held modifier), in degrees.
pub const CURSOR_STEP_COARSE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Axis-aligned latitude/longitude box with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Selection region: latitude 22.0..=31.7, longitude 24.7..=37.0.
pub const EGYPT_BOUNDS: BoundingBox = BoundingBox {
    south: 22.0,
    west: 24.7,
    north: 31.7,
    east: 37.0,
};

impl BoundingBox {
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.latitude >= self.south
            && point.latitude <= self.north
            && point.longitude >= self.west
            && point.longitude <= self.east
    }

    /// Reject points outside the box with the user-facing boundary error.
    pub fn check(&self, point: GeoPoint) -> Result<(), BoundaryError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(BoundaryError {
                latitude: point.latitude,
                longitude: point.longitude,
            })
        }
    }

    /// Snap a point to the nearest position inside the box.
    pub fn clamp(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint {
            latitude: point.latitude.clamp(self.south, self.north),
            longitude: point.longitude.clamp(self.west, self.east),
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: (self.south + self.north) / 2.0,
            longitude: (self.west + self.east) / 2.0,
        }
    }
}

/// A fully resolved location: address plus coordinates, always set together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedLocation {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SelectedLocation {
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Keyboard-driven crosshair over the selection region.
///
/// Movement is clamped to the box, so the cursor itself can never name an
/// out-of-bounds point; the bounds check still runs on every selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCursor {
    pub position: GeoPoint,
}

impl Default for MapCursor {
    fn default() -> Self {
        Self {
            position: EGYPT_BOUNDS.center(),
        }
    }
}

impl MapCursor {
    pub fn nudge(&mut self, dlat: f64, dlng: f64) {
        self.position = EGYPT_BOUNDS.clamp(GeoPoint {
            latitude: self.position.latitude + dlat,
            longitude: self.position.longitude + dlng,
        });
    }

    /// Center the cursor on a point, clamping into the box.
    pub fn recenter(&mut self, point: GeoPoint) {
        self.position = EGYPT_BOUNDS.clamp(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges_are_inclusive() {
        assert!(EGYPT_BOUNDS.contains(GeoPoint::new(22.0, 24.7)));
        assert!(EGYPT_BOUNDS.contains(GeoPoint::new(31.7, 37.0)));
        assert!(EGYPT_BOUNDS.contains(GeoPoint::new(22.0, 37.0)));
        assert!(EGYPT_BOUNDS.contains(GeoPoint::new(31.7, 24.7)));
    }

    #[test]
    fn test_points_outside_each_edge_rejected() {
        assert!(!EGYPT_BOUNDS.contains(GeoPoint::new(21.999, 30.0)));
        assert!(!EGYPT_BOUNDS.contains(GeoPoint::new(31.701, 30.0)));
        assert!(!EGYPT_BOUNDS.contains(GeoPoint::new(26.0, 24.699)));
        assert!(!EGYPT_BOUNDS.contains(GeoPoint::new(26.0, 37.001)));
    }

    #[test]
    fn test_check_reports_rejected_coordinates() {
        let err = EGYPT_BOUNDS
            .check(GeoPoint::new(48.8566, 2.3522))
            .unwrap_err();
        assert_eq!(err.latitude, 48.8566);
        assert_eq!(err.longitude, 2.3522);
        assert_eq!(
            err.to_string(),
            "Please select a location within Egypt's borders"
        );
    }

    #[test]
    fn test_cursor_never_leaves_box() {
        let mut cursor = MapCursor::default();
        for _ in 0..500 {
            cursor.nudge(CURSOR_STEP_COARSE, 0.0);
        }
        assert_eq!(cursor.position.latitude, EGYPT_BOUNDS.north);
        for _ in 0..500 {
            cursor.nudge(0.0, -CURSOR_STEP_COARSE);
        }
        assert_eq!(cursor.position.longitude, EGYPT_BOUNDS.west);
        assert!(EGYPT_BOUNDS.contains(cursor.position));
    }

    #[test]
    fn test_recenter_clamps() {
        let mut cursor = MapCursor::default();
        cursor.recenter(GeoPoint::new(0.0, 0.0));
        assert_eq!(cursor.position, GeoPoint::new(22.0, 24.7));
    }
}
