//! A padded 2-D snapshot of the scanned path layers in a selected area.
//!
//! The window is built once per overlay pass so neighbor lookups during
//! connectivity computation are O(1) array reads instead of grid queries.

use crate::algorithms::scan::{scan_tile, PathLayer};
use crate::selection::{MapRange, TILE_SIZE};
use crate::TileGrid;

/// One window cell: a tile's world coordinates plus its scanned layers.
#[derive(Clone, Debug)]
pub struct TilePaths {
    pub x: i32,
    pub y: i32,
    pub layers: Vec<PathLayer>,
}

/// A rectangular snapshot of scanned tiles. The interior corresponds
/// exactly to the selected rectangle; the padding ring only supplies
/// neighbor data and is never itself visited for mutation.
#[derive(Clone, Debug)]
pub struct SelectionWindow {
    width: usize,
    height: usize,
    padding: usize,
    cells: Vec<TilePaths>,
}

impl SelectionWindow {
    /// Scans every tile covered by `range`, plus `padding` extra tiles on
    /// each side. Cells are laid out outer axis X, inner axis Y, so a fixed
    /// coordinate offset is a fixed index offset.
    pub fn build(grid: &TileGrid, range: MapRange, padding: usize) -> SelectionWindow {
        let pad = padding as i32;
        let left = range.left_top.x.div_euclid(TILE_SIZE) - pad;
        let right = range.right_bottom.x.div_euclid(TILE_SIZE) + pad;
        let top = range.left_top.y.div_euclid(TILE_SIZE) - pad;
        let bottom = range.right_bottom.y.div_euclid(TILE_SIZE) + pad;

        let width = (right - left + 1) as usize;
        let height = (bottom - top + 1) as usize;
        let mut cells = Vec::with_capacity(width * height);

        for x in left..=right {
            for y in top..=bottom {
                let layers = grid.tile(x, y).map(scan_tile).unwrap_or_default();
                cells.push(TilePaths { x, y, layers });
            }
        }

        SelectionWindow {
            width,
            height,
            padding,
            cells,
        }
    }

    /// Window width in tiles, padding included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Window height in tiles, padding included.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Cell at window-local coordinates. Panics when out of bounds; use
    /// [`get`](Self::get) for neighbor probes that may leave the window.
    pub fn at(&self, x: usize, y: usize) -> &TilePaths {
        &self.cells[x * self.height + y]
    }

    /// Checked cell lookup for neighbor probes.
    pub fn get(&self, x: isize, y: isize) -> Option<&TilePaths> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.at(x as usize, y as usize))
    }

    /// Visits every interior (non-padding) cell in build order. `x` and `y`
    /// are window-local indices, not world coordinates.
    pub fn for_each_interior(&self, mut visit: impl FnMut(usize, usize, &SelectionWindow)) {
        for x in self.padding..self.width - self.padding {
            for y in self.padding..self.height - self.padding {
                visit(x, y, self);
            }
        }
    }
}
