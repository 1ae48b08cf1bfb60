//! Edge and corner connection flags for a path at a given window position.
//!
//! The eight neighbors of a tile contribute one bit each: bits 0-3 are the
//! cardinal edges, bits 4-7 the diagonal corners. A corner bit is only ever
//! set together with both of its flanking edge bits, so a connected corner
//! piece never appears visually detached.

use crate::algorithms::window::{SelectionWindow, TilePaths};
use crate::model::Slope;

pub const EDGE_NORTH_EAST: u8 = 1 << 0;
pub const EDGE_SOUTH_EAST: u8 = 1 << 1;
pub const EDGE_SOUTH_WEST: u8 = 1 << 2;
pub const EDGE_NORTH_WEST: u8 = 1 << 3;

pub const CORNER_EAST: u8 = 1 << 4;
pub const CORNER_SOUTH: u8 = 1 << 5;
pub const CORNER_WEST: u8 = 1 << 6;
pub const CORNER_NORTH: u8 = 1 << 7;

// Both edges flanking each corner, gating the corner bit.
const EDGES_EAST: u8 = EDGE_NORTH_EAST | EDGE_SOUTH_EAST;
const EDGES_SOUTH: u8 = EDGE_SOUTH_EAST | EDGE_SOUTH_WEST;
const EDGES_WEST: u8 = EDGE_SOUTH_WEST | EDGE_NORTH_WEST;
const EDGES_NORTH: u8 = EDGE_NORTH_WEST | EDGE_NORTH_EAST;

/// Height gained by a sloped path between its low and high end. Re-derive
/// from the host's coordinate system if its height unit differs.
const SLOPE_RISE: u8 = 2;

/// Connection flags for all edges and corners around the path at
/// window-local `(x, y)` with the given base height. Callers split the
/// result into `edges = mask & 0x0F` and `corners = mask >> 4`.
pub fn path_sides(window: &SelectionWindow, x: usize, y: usize, height: u8) -> u8 {
    let (x, y) = (x as isize, y as isize);
    let mut sides = 0;

    if connects(window.get(x - 1, y), height, Slope::NorthEast) {
        sides |= EDGE_NORTH_EAST;
    }
    if connects(window.get(x, y + 1), height, Slope::SouthEast) {
        sides |= EDGE_SOUTH_EAST;
    }
    if connects(window.get(x + 1, y), height, Slope::SouthWest) {
        sides |= EDGE_SOUTH_WEST;
    }
    if connects(window.get(x, y - 1), height, Slope::NorthWest) {
        sides |= EDGE_NORTH_WEST;
    }

    if sides & EDGES_NORTH == EDGES_NORTH && has_path_at_height(window.get(x - 1, y - 1), height) {
        sides |= CORNER_NORTH;
    }
    if sides & EDGES_EAST == EDGES_EAST && has_path_at_height(window.get(x - 1, y + 1), height) {
        sides |= CORNER_EAST;
    }
    if sides & EDGES_SOUTH == EDGES_SOUTH && has_path_at_height(window.get(x + 1, y + 1), height) {
        sides |= CORNER_SOUTH;
    }
    if sides & EDGES_WEST == EDGES_WEST && has_path_at_height(window.get(x + 1, y - 1), height) {
        sides |= CORNER_WEST;
    }

    sides
}

/// A neighbor connects on an edge when it has a flat layer at the same
/// height, or a sloped layer one rise below whose high end faces this tile.
/// Neighbors outside the window never connect.
fn connects(cell: Option<&TilePaths>, height: u8, edge: Slope) -> bool {
    let Some(cell) = cell else {
        return false;
    };
    cell.layers.iter().any(|layer| {
        (layer.base_height == height && layer.slope == Slope::Flat)
            || (layer.slope == edge.opposite()
                && height >= SLOPE_RISE
                && layer.base_height == height - SLOPE_RISE)
    })
}

#[inline]
fn has_path_at_height(cell: Option<&TilePaths>, height: u8) -> bool {
    cell.is_some_and(|cell| cell.layers.iter().any(|layer| layer.base_height == height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Footpath};
    use crate::selection::{CoordsXY, MapSelection, TILE_SIZE};
    use crate::TileGrid;

    fn flat_path(height: u8) -> Element {
        Element::Footpath(Footpath {
            base_height: height,
            clearance_height: height + 2,
            ..Footpath::default()
        })
    }

    fn sloped_path(height: u8, slope: Slope) -> Element {
        Element::Footpath(Footpath {
            base_height: height,
            clearance_height: height + 2,
            slope,
            ..Footpath::default()
        })
    }

    /// Window over tiles [0..=2]x[0..=2]; the probe position is the center.
    fn window_of(grid: &TileGrid) -> SelectionWindow {
        let range = MapSelection::from_corners(
            CoordsXY { x: TILE_SIZE, y: TILE_SIZE },
            CoordsXY { x: TILE_SIZE, y: TILE_SIZE },
        )
        .to_map_range()
        .unwrap();
        SelectionWindow::build(grid, range, 1)
    }

    #[test]
    fn test_isolated_path_has_no_sides() {
        let mut grid = TileGrid::new();
        grid.tile_mut(1, 1).push_element(flat_path(14));
        assert_eq!(path_sides(&window_of(&grid), 1, 1, 14), 0);
    }

    #[test]
    fn test_cardinal_neighbors_set_edge_bits() {
        let mut grid = TileGrid::new();
        grid.tile_mut(1, 1).push_element(flat_path(14));
        grid.tile_mut(0, 1).push_element(flat_path(14));
        grid.tile_mut(1, 2).push_element(flat_path(14));
        grid.tile_mut(2, 1).push_element(flat_path(14));
        grid.tile_mut(1, 0).push_element(flat_path(14));

        let sides = path_sides(&window_of(&grid), 1, 1, 14);
        assert_eq!(
            sides,
            EDGE_NORTH_EAST | EDGE_SOUTH_EAST | EDGE_SOUTH_WEST | EDGE_NORTH_WEST
        );
    }

    #[test]
    fn test_neighbor_at_other_height_does_not_connect() {
        let mut grid = TileGrid::new();
        grid.tile_mut(1, 1).push_element(flat_path(14));
        grid.tile_mut(0, 1).push_element(flat_path(16));
        assert_eq!(path_sides(&window_of(&grid), 1, 1, 14), 0);
    }

    #[test]
    fn test_corner_needs_both_edges_and_the_diagonal() {
        let mut grid = TileGrid::new();
        for (x, y) in [(1, 1), (0, 1), (1, 0), (0, 0)] {
            grid.tile_mut(x, y).push_element(flat_path(14));
        }

        let sides = path_sides(&window_of(&grid), 1, 1, 14);
        assert_eq!(sides, EDGE_NORTH_EAST | EDGE_NORTH_WEST | CORNER_NORTH);
    }

    #[test]
    fn test_diagonal_without_both_edges_sets_no_corner() {
        let mut grid = TileGrid::new();
        // North-east edge and north diagonal, but no north-west edge.
        grid.tile_mut(1, 1).push_element(flat_path(14));
        grid.tile_mut(0, 1).push_element(flat_path(14));
        grid.tile_mut(0, 0).push_element(flat_path(14));

        let sides = path_sides(&window_of(&grid), 1, 1, 14);
        assert_eq!(sides, EDGE_NORTH_EAST);
    }

    #[test]
    fn test_full_neighborhood_is_fully_connected() {
        let mut grid = TileGrid::new();
        for x in 0..3 {
            for y in 0..3 {
                grid.tile_mut(x, y).push_element(flat_path(14));
            }
        }
        assert_eq!(path_sides(&window_of(&grid), 1, 1, 14), 0xFF);
    }

    #[test]
    fn test_slope_rising_toward_tile_connects() {
        let mut grid = TileGrid::new();
        grid.tile_mut(1, 1).push_element(flat_path(14));
        // North-east neighbor, one rise below, high end facing the center.
        grid.tile_mut(0, 1)
            .push_element(sloped_path(12, Slope::SouthWest));

        let sides = path_sides(&window_of(&grid), 1, 1, 14);
        assert_eq!(sides, EDGE_NORTH_EAST);
    }

    #[test]
    fn test_slope_facing_away_does_not_connect() {
        let mut grid = TileGrid::new();
        grid.tile_mut(1, 1).push_element(flat_path(14));
        grid.tile_mut(0, 1)
            .push_element(sloped_path(12, Slope::NorthEast));
        assert_eq!(path_sides(&window_of(&grid), 1, 1, 14), 0);
    }

    #[test]
    fn test_sloped_neighbor_at_same_height_does_not_connect() {
        let mut grid = TileGrid::new();
        grid.tile_mut(1, 1).push_element(flat_path(14));
        grid.tile_mut(0, 1)
            .push_element(sloped_path(14, Slope::SouthWest));
        assert_eq!(path_sides(&window_of(&grid), 1, 1, 14), 0);
    }

    #[test]
    fn test_probe_at_window_border_stays_in_bounds() {
        let mut grid = TileGrid::new();
        grid.tile_mut(0, 0).push_element(flat_path(14));
        let range = MapSelection::from_corners(CoordsXY { x: 0, y: 0 }, CoordsXY { x: 0, y: 0 })
            .to_map_range()
            .unwrap();
        let window = SelectionWindow::build(&grid, range, 0);
        assert_eq!(path_sides(&window, 0, 0, 14), 0);
    }
}
