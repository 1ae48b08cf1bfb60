//! The proxy overlay passes: duplicate each walkable path layer on top of
//! itself to visually replace it, or strip the duplicates again.
//!
//! Both passes walk a tile's layers from the highest start index down, so
//! every insert or remove only shifts indices that have already been dealt
//! with. No index computed for a still-pending layer is ever invalidated.

use crate::algorithms::connectivity::path_sides;
use crate::algorithms::scan::PathLayer;
use crate::algorithms::window::SelectionWindow;
use crate::model::{Element, Footpath, Slope};
use crate::TileGrid;

/// Inserts a proxy element above every unproxied flat path layer in the
/// window's interior, hiding the base; layers proxied by an earlier pass
/// only get their top proxy's connectivity refreshed. Returns the number of
/// layers touched.
pub fn apply(grid: &mut TileGrid, window: &SelectionWindow, smooth_edges: bool) -> usize {
    let mut applied = 0;

    window.for_each_interior(|x, y, window| {
        let cell = window.at(x, y);

        for layer in cell.layers.iter().rev() {
            // Sloped paths are never proxied.
            if !layer.is_proxied() && layer.slope != Slope::Flat {
                continue;
            }

            let (edges, corners) = if smooth_edges {
                let sides = path_sides(window, x, y, layer.base_height);
                (sides & 0x0F, sides >> 4)
            } else {
                (0xFF, 0xFF)
            };

            let tile = grid.tile_mut(cell.x, cell.y);

            if layer.is_proxied() {
                if let Some(proxy) = tile
                    .element_mut(layer.top_index())
                    .and_then(Element::as_footpath_mut)
                {
                    proxy.edges = edges;
                    proxy.corners = corners;
                }
            } else {
                let proxy = proxy_for(layer, edges, corners);
                tile.insert_element(layer.start_index + 1, Element::Footpath(proxy));
                if layer.has_addition {
                    // A second proxy above the first keeps the addition's
                    // stacking order intact (triple layer).
                    tile.insert_element(layer.start_index + 2, Element::Footpath(proxy));
                }
            }

            // Addition-bearing bases stay visible.
            if !layer.has_addition {
                if let Some(base) = tile
                    .element_mut(layer.start_index)
                    .and_then(Element::as_footpath_mut)
                {
                    base.is_hidden = true;
                }
            }

            applied += 1;
        }
    });

    applied
}

/// Deletes every proxy layer above each base path element in the window's
/// interior and unhides the base again. Returns the number of layers
/// restored.
pub fn remove(grid: &mut TileGrid, window: &SelectionWindow) -> usize {
    let mut restored = 0;

    window.for_each_interior(|x, y, window| {
        let cell = window.at(x, y);

        for layer in cell.layers.iter().rev() {
            if !layer.is_proxied() {
                continue;
            }

            let tile = grid.tile_mut(cell.x, cell.y);

            for index in (layer.start_index + 1..=layer.top_index()).rev() {
                tile.remove_element(index);
            }

            if let Some(base) = tile
                .element_mut(layer.start_index)
                .and_then(Element::as_footpath_mut)
            {
                base.is_hidden = false;
            }

            restored += 1;
        }
    });

    restored
}

/// The duplicate that goes on top of a base layer: same heights and
/// objects, always flat and walkable, with the given connection flags.
fn proxy_for(layer: &PathLayer, edges: u8, corners: u8) -> Footpath {
    Footpath {
        base_height: layer.base_height,
        clearance_height: layer.clearance_height,
        slope: Slope::Flat,
        is_queue: false,
        is_hidden: false,
        has_addition: false,
        object: layer.object,
        surface_object: layer.surface_object,
        railings_object: layer.railings_object,
        edges,
        corners,
    }
}
