pub mod model;
pub mod selection;
pub mod algorithms {
    pub mod connectivity;
    pub mod overlay;
    pub mod scan;
    pub mod window;
}

use std::collections::HashMap;

use algorithms::window::SelectionWindow;
use model::Element;
use selection::{MapRange, MapSelection, SelectionError};

/// One cell of the world grid: an ordered stack of elements, bottom to top.
/// Relative order is stable; inserting shifts every later index up by one,
/// removing shifts them down by one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tile {
    elements: Vec<Element>,
}

impl Tile {
    pub fn new() -> Tile {
        Tile::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    /// Adds an element on top of the stack.
    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Inserts an element at `index`, shifting subsequent indices up by one.
    /// Panics if `index > element_count()`.
    pub fn insert_element(&mut self, index: usize, element: Element) {
        self.elements.insert(index, element);
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// indices down by one. Panics if `index` is out of bounds.
    pub fn remove_element(&mut self, index: usize) -> Element {
        self.elements.remove(index)
    }
}

/// The world grid. Tiles are stored sparsely by tile coordinates; reading a
/// tile that was never written yields `None`, writing creates it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileGrid {
    tiles: HashMap<(i32, i32), Tile>,
}

impl TileGrid {
    pub fn new() -> TileGrid {
        TileGrid::default()
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.get(&(x, y))
    }

    pub fn tile_mut(&mut self, x: i32, y: i32) -> &mut Tile {
        self.tiles.entry((x, y)).or_default()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Overlays a proxy element on every walkable path layer in the
    /// selection, hiding the originals. Layers proxied by an earlier pass
    /// only get their connectivity refreshed. Returns the number of path
    /// layers touched.
    ///
    /// With `smooth_edges`, each proxy's edge/corner flags are computed from
    /// its neighbor tiles; the selection window is padded by one tile to
    /// have that neighbor data at the selection border. Without it, proxies
    /// are fully connected on all sides.
    pub fn apply_proxy(
        &mut self,
        selection: &MapSelection,
        smooth_edges: bool,
    ) -> Result<usize, SelectionError> {
        let range = checked_range(selection)?;
        let padding = usize::from(smooth_edges);
        let window = SelectionWindow::build(self, range, padding);
        let applied = algorithms::overlay::apply(self, &window, smooth_edges);
        log::debug!("proxied {applied} path layer(s)");
        Ok(applied)
    }

    /// Deletes all proxy layers in the selection and restores the original
    /// paths' visibility. Returns the number of path layers restored.
    pub fn remove_proxy(&mut self, selection: &MapSelection) -> Result<usize, SelectionError> {
        let range = checked_range(selection)?;
        let window = SelectionWindow::build(self, range, 0);
        let restored = algorithms::overlay::remove(self, &window);
        log::debug!("restored {restored} path layer(s)");
        Ok(restored)
    }
}

fn checked_range(selection: &MapSelection) -> Result<MapRange, SelectionError> {
    match selection.to_map_range() {
        Ok(range) => Ok(range),
        Err(err) => {
            log::error!("{err}");
            Err(err)
        }
    }
}
