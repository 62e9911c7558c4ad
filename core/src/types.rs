/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts, wide enough for any `Coord` by `Coord` board.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`, both 0-indexed.
pub type Coord2 = (Coord, Coord);

/// Position of a cell inside the row-major board arena.
pub trait ArenaIndex {
    fn arena_index(self) -> [usize; 2];
}

impl ArenaIndex for Coord2 {
    fn arena_index(self) -> [usize; 2] {
        [usize::from(self.0), usize::from(self.1)]
    }
}

/// Number of cells on a board of the given size.
pub const fn cell_total((rows, columns): Coord2) -> CellCount {
    rows as CellCount * columns as CellCount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_total_covers_the_full_coordinate_range() {
        assert_eq!(cell_total((10, 20)), 200);
        assert_eq!(cell_total((300, 2)), 600);
        assert_eq!(cell_total((Coord::MAX, Coord::MAX)), 4_294_836_225);
    }

    #[test]
    fn arena_index_is_row_then_column() {
        let coords: Coord2 = (3, 7);

        assert_eq!(coords.arena_index(), [3, 7]);
    }
}
