use serde::{Deserialize, Serialize};

/// Possible slope directions a path can have.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slope {
    #[default]
    Flat,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Slope {
    pub fn opposite(self) -> Slope {
        match self {
            Slope::Flat => Slope::Flat,
            Slope::NorthEast => Slope::SouthWest,
            Slope::SouthEast => Slope::NorthWest,
            Slope::SouthWest => Slope::NorthEast,
            Slope::NorthWest => Slope::SouthEast,
        }
    }
}

/// A walkable path element. `edges` and `corners` each use their low nibble,
/// one bit per direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footpath {
    pub base_height: u8,
    pub clearance_height: u8,
    pub slope: Slope,
    pub is_queue: bool,
    pub is_hidden: bool,
    pub has_addition: bool,
    pub object: u32,
    pub surface_object: u32,
    pub railings_object: u32,
    pub edges: u8,
    pub corners: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub base_height: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenery {
    pub base_height: u8,
    pub clearance_height: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub base_height: u8,
    pub clearance_height: u8,
}

/// One stacked object on a tile. Only the footpath variant is inspected by
/// the overlay passes; every other kind is carried through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Surface(Surface),
    Footpath(Footpath),
    Scenery(Scenery),
    Wall(Wall),
}

impl Element {
    pub fn as_footpath(&self) -> Option<&Footpath> {
        match self {
            Element::Footpath(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_footpath_mut(&mut self) -> Option<&mut Footpath> {
        match self {
            Element::Footpath(path) => Some(path),
            _ => None,
        }
    }
}
