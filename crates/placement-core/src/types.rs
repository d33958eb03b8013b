//! Rooms, catalog entries and placements
//!
//! All extents share one linear unit (feet in the sample catalog).

use serde::{Deserialize, Serialize};

/// A rectangular room, anchored at the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub width: f64,
    pub depth: f64,
}

/// Catalog entry. `width`/`depth` are the footprint at rotation 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureKind {
    pub id: i64,
    pub name: String,
    pub width: f64,
    pub depth: f64,
}

impl FurnitureKind {
    pub fn footprint(&self, rotation: Rotation) -> Footprint {
        Footprint::new(self.width, self.depth).rotated(rotation)
    }
}

/// Axis-aligned rotation in degrees
///
/// Serialized as the plain integer (`0`, `90`, `180`, `270`); any other
/// value is rejected when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// True for the quarter turns that swap width and depth
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = String;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!(
                "Invalid rotation {}. Must be 0, 90, 180 or 270",
                other
            )),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// A furniture item positioned in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub furniture_id: i64,
    /// Client-side identifier for this instance, echoed back in results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<i64>,
    pub position_x: f64,
    pub position_y: f64,
    #[serde(default)]
    pub rotation: Rotation,
}

/// Effective (width, depth) after rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub depth: f64,
}

impl Footprint {
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    pub fn rotated(self, rotation: Rotation) -> Self {
        if rotation.is_quarter_turn() {
            Self {
                width: self.depth,
                depth: self.width,
            }
        } else {
            self
        }
    }

    pub fn at(self, x: f64, y: f64) -> Rect {
        Rect {
            x,
            y,
            width: self.width,
            depth: self.depth,
        }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the lower corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.depth
    }

    /// Positive-area overlap. Rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rotation_deserializes_from_degrees() {
        let rotation: Rotation = serde_json::from_str("270").unwrap();
        assert_eq!(rotation, Rotation::Deg270);
        assert_eq!(serde_json::to_string(&Rotation::Deg90).unwrap(), "90");
    }

    #[test]
    fn test_rotation_rejects_off_axis_angles() {
        assert!(serde_json::from_str::<Rotation>("45").is_err());
        assert!(serde_json::from_str::<Rotation>("360").is_err());
        assert!(Rotation::try_from(-90).is_err());
    }

    #[test]
    fn test_placement_rotation_defaults_to_zero() {
        let json = r#"{"furniture_id":3,"position_x":1.0,"position_y":2.5}"#;
        let placement: Placement = serde_json::from_str(json).unwrap();
        assert_eq!(placement.rotation, Rotation::Deg0);
        assert_eq!(placement.instance_id, None);
    }

    #[test]
    fn test_quarter_turns_swap_footprint() {
        let footprint = Footprint::new(6.0, 3.0);
        assert_eq!(footprint.rotated(Rotation::Deg90), Footprint::new(3.0, 6.0));
        assert_eq!(footprint.rotated(Rotation::Deg270), Footprint::new(3.0, 6.0));
        assert_eq!(footprint.rotated(Rotation::Deg180), footprint);
        assert_eq!(footprint.rotated(Rotation::Deg0), footprint);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Footprint::new(2.0, 2.0).at(0.0, 0.0);
        let b = Footprint::new(2.0, 2.0).at(2.0, 0.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap_is_symmetric() {
        let a = Footprint::new(4.0, 4.0).at(0.0, 0.0);
        let b = Footprint::new(4.0, 4.0).at(3.0, 3.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Footprint::new(10.0, 10.0).at(0.0, 0.0);
        let inner = Footprint::new(1.0, 1.0).at(4.0, 4.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
