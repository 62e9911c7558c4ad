use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Source of uniformly distributed integers used to lay out mines.
///
/// Implementations must return values in `0..bound`; anything larger is reduced modulo `bound`.
pub trait RandomSource {
    fn next_below(&mut self, bound: Coord) -> Coord;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: Coord) -> Coord {
        (**self).next_below(bound)
    }
}

/// Marks exactly `mines` distinct cells of a mine-free grid by rejection sampling, returns the number of draws taken.
///
/// Terminates with probability 1 as long as `mines` is smaller than the cell count and the source is uniform.
pub(crate) fn place_mines<R>(cells: &mut Array2<Cell>, mines: CellCount, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    let (rows, columns) = cells.dim();
    let (rows, columns) = (rows as Coord, columns as Coord);

    let mut placed: CellCount = 0;
    let mut draws = 0;
    while placed < mines {
        let row = rng.next_below(rows) % rows;
        let col = rng.next_below(columns) % columns;
        draws += 1;

        let cell = &mut cells[(row, col).arena_index()];
        if !cell.has_mine {
            cell.has_mine = true;
            placed += 1;
        }
    }

    // double check mine count
    let count = cells.iter().filter(|cell| cell.has_mine).count();
    if count != mines as usize {
        log::warn!(
            "Placed mine count mismatch, actual: {}, requested: {}",
            count,
            mines
        );
    }

    draws
}
