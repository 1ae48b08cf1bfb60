//! Groups a tile's stacked footpath elements into logical path layers.
//!
//! A path layer is a contiguous run of non-queue footpath elements sharing
//! a base height. The base of the run is the real path; anything stacked
//! above it within the run is a proxy from an earlier overlay pass.

use crate::model::{Element, Slope};
use crate::Tile;

/// A scanner-derived view of one (potentially layered) path on a tile.
///
/// Indices are only valid against the element list the tile had when it was
/// scanned; any insert or remove below `start_index` invalidates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathLayer {
    pub start_index: usize,
    pub layer_count: usize,
    pub slope: Slope,
    pub base_height: u8,
    pub clearance_height: u8,
    pub object: u32,
    pub surface_object: u32,
    pub railings_object: u32,
    pub is_base_hidden: bool,
    pub has_addition: bool,
}

impl PathLayer {
    /// Index of the run's top element, the proxy to refresh when the path
    /// is already proxied.
    pub fn top_index(&self) -> usize {
        self.start_index + self.layer_count - 1
    }

    pub fn is_proxied(&self) -> bool {
        self.layer_count > 1
    }
}

/// Finds all path layers on the tile, in ascending index order (bottom to
/// top on the stack).
///
/// Non-footpath elements and queue paths never start or extend a run; a
/// footpath at a different height ends the run without being consumed, so
/// the outer walk re-examines it as the start of the next run. Pure
/// function of the tile's current element list.
pub fn scan_tile(tile: &Tile) -> Vec<PathLayer> {
    let elements = tile.elements();
    let mut layers = Vec::new();
    let mut index = 0;

    while index < elements.len() {
        let base = match &elements[index] {
            Element::Footpath(path) if !path.is_queue => path,
            _ => {
                index += 1;
                continue;
            }
        };

        let start = index;
        let height = base.base_height;
        let mut count = 1;

        while let Some(Element::Footpath(layer)) = elements.get(index + 1) {
            if layer.is_queue || layer.base_height != height {
                break;
            }
            count += 1;
            index += 1;
        }

        layers.push(PathLayer {
            start_index: start,
            layer_count: count,
            slope: base.slope,
            base_height: height,
            clearance_height: base.clearance_height,
            object: base.object,
            surface_object: base.surface_object,
            railings_object: base.railings_object,
            is_base_hidden: base.is_hidden,
            has_addition: base.has_addition,
        });
        index += 1;
    }

    layers
}
