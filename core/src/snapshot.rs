use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A revealed mine
    Exploded,
    /// Unrevealed mine, only shown once mines are uncovered
    Mine,
    /// Flag on a safe cell, only shown once mines are uncovered
    IncorrectFlag,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Exploded)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged | Self::IncorrectFlag)
    }

    /// Whether the cell holds a mine, `None` while that is still hidden from the player.
    pub const fn has_mine(self) -> Option<bool> {
        match self {
            Self::Revealed(_) | Self::IncorrectFlag => Some(false),
            Self::Exploded | Self::Mine => Some(true),
            Self::Hidden | Self::Flagged => None,
        }
    }

    pub const fn neighboring_mine_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Read-only copy of a board as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub mines_left: isize,
    pub state: GameState,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        let cells = board.cells_view(|cell| match cell {
            Cell {
                is_revealed: true,
                has_mine: true,
                ..
            } => CellView::Exploded,
            Cell {
                is_revealed: true,
                neighboring_mine_count,
                ..
            } => CellView::Revealed(*neighboring_mine_count),
            Cell {
                is_flagged: true, ..
            } => CellView::Flagged,
            _ => CellView::Hidden,
        });

        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            mines_left: board.mines_left(),
            state: board.evaluate(),
            cells,
        }
    }

    /// Same as [`Snapshot::from_board`] but uncovers every mine and marks wrong flags, for end of game screens.
    pub fn with_mines_shown(board: &Board) -> Self {
        let mut snapshot = Self::from_board(board);
        for (view, (_, cell)) in snapshot.cells.iter_mut().zip(board.iter_cells()) {
            *view = match (*view, cell.has_mine()) {
                (CellView::Hidden, true) => CellView::Mine,
                (CellView::Flagged, false) => CellView::IncorrectFlag,
                (view, _) => view,
            };
        }
        snapshot
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.arena_index()).copied()
    }
}

impl Board {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(self)
    }

    fn cells_view(&self, view: impl Fn(&Cell) -> CellView) -> Array2<CellView> {
        let mut cells = Array2::default(self.size().arena_index());
        for (coords, cell) in self.iter_cells() {
            cells[coords.arena_index()] = view(cell);
        }
        cells
    }
}
