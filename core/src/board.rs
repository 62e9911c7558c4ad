use core::num::Saturating;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// A mine field together with the player's progress on it.
///
/// The board is the sole owner of its cells; every mutation goes through its methods. Dimensions, neighbor links and
/// mine positions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    pub(crate) revealed_count: Saturating<CellCount>,
    pub(crate) flagged_count: Saturating<CellCount>,
    pub(crate) triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds the grid, links neighbors and lays out mines drawn from `rng`.
    pub fn new<R>(config: BoardConfig, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut board = Self::empty(config);
        let draws = place_mines(&mut board.cells, config.mines(), rng);
        log::debug!(
            "Created {:?} board with {} mines after {} draws",
            config.size(),
            config.mines(),
            draws
        );
        board
    }

    /// Validates the parameters and builds a board. Invalid parameters fail before the grid is allocated.
    pub fn create<R>(
        rows: impl Into<i64>,
        columns: impl Into<i64>,
        mines: impl Into<i64>,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RandomSource + ?Sized,
    {
        let config = BoardConfig::new(rows, columns, mines)?;
        Ok(Self::new(config, rng))
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::new(config, &mut seeded(seed))
    }

    /// Builds a board with mines at exactly the given (possibly repeated) coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, columns) = size;
        if let Some(&coords) = mine_coords
            .iter()
            .find(|&&(row, col)| row >= rows || col >= columns)
        {
            return Err(GameError::OutOfBounds(coords));
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.arena_index());
        for &coords in mine_coords {
            mine_mask[coords.arena_index()] = true;
        }
        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count() as i64;
        let config = BoardConfig::new(rows, columns, mines)?;

        let mut board = Self::empty(config);
        for (cell, &is_mine) in board.cells.iter_mut().zip(mine_mask.iter()) {
            cell.has_mine = is_mine;
        }
        Ok(board)
    }

    fn empty(config: BoardConfig) -> Self {
        let mut board = Self {
            config,
            cells: Array2::default(config.size().arena_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            triggered_mine: None,
        };
        board.rebuild_neighbors();
        board
    }

    /// Recomputes every cell's neighbor list from the board bounds, replacing whatever was there.
    pub fn rebuild_neighbors(&mut self) {
        let size = self.size();
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            cell.neighbors = moore_neighbors((row as Coord, col as Coord), size);
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn columns(&self) -> Coord {
        self.config.columns()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    /// Cells revealed through this board's own moves.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// How many mines have not been flagged yet, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines() as isize) - (self.flagged_count.0 as isize)
    }

    /// First mine the player revealed, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, columns) = self.size();
        if coords.0 < rows && coords.1 < columns {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.arena_index())
    }

    /// Row-major iterator over all cells with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    /// Counts the mined neighbors of a cell and caches the result on it.
    pub fn count_adjacent_mines(&mut self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.refresh_adjacent_count(coords))
    }

    pub(crate) fn refresh_adjacent_count(&mut self, coords: Coord2) -> u8 {
        let index = coords.arena_index();
        // at most 8 neighbors
        let count = self.cells[index]
            .neighbors
            .iter()
            .filter(|&&pos| self.cells[pos.arena_index()].has_mine)
            .count() as u8;
        self.cells[index].neighboring_mine_count = count;
        count
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.arena_index()]
    }
}

/// In-bounds cells around `(row, col)` on a board of `size`, row by row, never the cell itself.
pub fn moore_neighbors((row, col): Coord2, (rows, columns): Coord2) -> Neighbors {
    let mut neighbors = Neighbors::new();
    for d_row in -1..=1 {
        let Some(next_row) = row.checked_add_signed(d_row).filter(|&r| r < rows) else {
            continue;
        };
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(next_col) = col.checked_add_signed(d_col).filter(|&c| c < columns) {
                neighbors.push((next_row, next_col));
            }
        }
    }
    neighbors
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.arena_index()]
    }
}
