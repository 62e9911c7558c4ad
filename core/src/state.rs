use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Initial state, safe cells remain hidden and no mine was revealed
    InProgress,
    /// Every safe cell is revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

impl Board {
    /// Derives the game state from the cells alone, a revealed mine outranks a complete reveal.
    pub fn evaluate(&self) -> GameState {
        if self.is_lost() {
            GameState::Lost
        } else if self.is_won() {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    pub fn is_won(&self) -> bool {
        self.iter_cells()
            .all(|(_, cell)| cell.has_mine() || cell.is_revealed())
    }

    pub fn is_lost(&self) -> bool {
        self.iter_cells()
            .any(|(_, cell)| cell.has_mine() && cell.is_revealed())
    }

    pub fn game_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }
}
