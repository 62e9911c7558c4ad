use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::*;

impl Board {
    /// Reveals a hidden, unflagged cell and floods outward from it when it has no adjacent mines.
    ///
    /// Revealed or flagged cells, and any cell once the game is over, are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        if self.game_over() {
            return Ok(NoChange);
        }

        let cell = self.cell_mut(coords);
        if cell.is_revealed || cell.is_flagged {
            return Ok(NoChange);
        }
        cell.is_revealed = true;
        let has_mine = cell.has_mine;
        self.revealed_count += 1;

        if has_mine {
            log::debug!("Revealed mine at {:?}", coords);
            self.triggered_mine.get_or_insert(coords);
            return Ok(HitMine);
        }

        let adjacent_mines = self.refresh_adjacent_count(coords);
        log::debug!("Revealed cell at {:?}, mine count: {}", coords, adjacent_mines);
        if adjacent_mines == 0 {
            self.flood_from(coords);
        }

        // no mine is revealed here, so every counted reveal is a safe cell
        if self.revealed_count.0 == self.safe_cell_count() {
            log::debug!("All {} safe cells revealed", self.safe_cell_count());
        }
        Ok(Revealed)
    }

    /// Flags or unflags a cell that is still hidden.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.validate_coords(coords)?;
        if self.game_over() {
            return Ok(NoChange);
        }

        let cell = self.cell_mut(coords);
        if cell.is_revealed {
            return Ok(NoChange);
        }
        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(Changed)
    }

    /// Breadth-first fill over zero-count cells starting at an already revealed zero-count `origin`.
    ///
    /// Every floodable neighbor of a zero-count cell is opened, nonzero cells form the border of the region.
    fn flood_from(&mut self, origin: Coord2) {
        let mut visited = HashSet::new();
        visited.insert(origin);
        let mut to_visit: VecDeque<_> = self.floodable_neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            if !self[visit_coords].is_floodable() {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            self.cell_mut(visit_coords).is_revealed = true;
            self.revealed_count += 1;
            let visit_adjacent_mines = self.refresh_adjacent_count(visit_coords);
            log::trace!(
                "Flood revealed cell at {:?}, mine count: {}",
                visit_coords,
                visit_adjacent_mines
            );

            if visit_adjacent_mines == 0 {
                to_visit.extend(
                    self.floodable_neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn floodable_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self[coords]
            .neighbors()
            .iter()
            .copied()
            .filter(|&pos| self[pos].is_floodable())
    }
}
