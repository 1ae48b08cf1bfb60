use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The size of a single map tile in world coordinates.
pub const TILE_SIZE: i32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

/// A normalized rectangle on the map, corners in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRange {
    pub left_top: CoordsXY,
    pub right_bottom: CoordsXY,
}

/// An area selection as dragged by the user: two opposite corners, either of
/// which may still be missing while the drag is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSelection {
    pub start: Option<CoordsXY>,
    pub end: Option<CoordsXY>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection is incomplete")]
    Incomplete,
}

impl MapSelection {
    pub fn from_corners(start: CoordsXY, end: CoordsXY) -> MapSelection {
        MapSelection {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Normalizes the selection into a map range, whichever way it was
    /// dragged. Fails if either corner is missing.
    pub fn to_map_range(&self) -> Result<MapRange, SelectionError> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(SelectionError::Incomplete),
        };

        Ok(MapRange {
            left_top: CoordsXY {
                x: start.x.min(end.x),
                y: start.y.min(end.y),
            },
            right_bottom: CoordsXY {
                x: start.x.max(end.x),
                y: start.y.max(end.y),
            },
        })
    }
}
