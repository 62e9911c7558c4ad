use serde::Serialize;
use smallvec::SmallVec;

use crate::*;

/// Neighbor links of a cell, at most the 8 cells of its Moore neighborhood.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// A single square of the board, owned by its [`Board`].
///
/// Neighbors are stored as coordinates into the same board, they never own the cells they point at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) neighboring_mine_count: u8,
    pub(crate) neighbors: Neighbors,
}

impl Cell {
    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Last computed adjacent-mine count, only meaningful once the cell has been counted.
    pub const fn neighboring_mine_count(&self) -> u8 {
        self.neighboring_mine_count
    }

    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    /// Whether a flood passing by may open this cell.
    pub(crate) const fn is_floodable(&self) -> bool {
        !self.is_revealed && !self.is_flagged && !self.has_mine
    }
}
