#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod state;
mod types;

/// Validated board parameters: `0 < mines < rows * columns`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

/// Unchecked wire shape of [`BoardConfig`], accepts anything a caller might send.
#[derive(Deserialize)]
struct RawBoardConfig {
    size: (i64, i64),
    mines: i64,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> core::result::Result<Self, Self::Error> {
        Self::validate(raw.size.0, raw.size.1, raw.mines)
    }
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates raw parameters. Signed input is accepted so negative values are rejected, never wrapped.
    pub fn new(rows: impl Into<i64>, columns: impl Into<i64>, mines: impl Into<i64>) -> Result<Self> {
        Ok(Self::validate(rows.into(), columns.into(), mines.into())?)
    }

    fn validate(rows: i64, columns: i64, mines: i64) -> core::result::Result<Self, ConfigError> {
        if rows <= 0 {
            return Err(ConfigError::NoRows);
        }
        if columns <= 0 {
            return Err(ConfigError::NoColumns);
        }
        if mines <= 0 {
            return Err(ConfigError::NoMines);
        }

        // beyond the coordinate range the arena could not be allocated anyway
        let (Ok(rows), Ok(columns)) = (Coord::try_from(rows), Coord::try_from(columns)) else {
            return Err(ConfigError::TooLarge);
        };

        let total = i64::from(cell_total((rows, columns)));
        if mines >= total {
            return Err(ConfigError::TooManyMines {
                mines,
                max: total - 1,
            });
        }

        // mines < total <= CellCount::MAX
        Ok(Self::new_unchecked((rows, columns), mines as CellCount))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

impl BitOr for FlagOutcome {
    type Output = FlagOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::NoChange, Self::NoChange) => Self::NoChange,
            _ => Self::Changed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

/// Merges outcomes of several moves, the most severe one wins
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) | (_, HitMine) => HitMine,
            (Revealed, _) | (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_non_positive_values() {
        assert_eq!(
            BoardConfig::new(0, 20, 10),
            Err(GameError::Config(ConfigError::NoRows))
        );
        assert_eq!(
            BoardConfig::new(10, -5, 15),
            Err(GameError::Config(ConfigError::NoColumns))
        );
        assert_eq!(
            BoardConfig::new(10, 20, 0),
            Err(GameError::Config(ConfigError::NoMines))
        );
    }

    #[test]
    fn config_rejects_too_many_mines() {
        assert_eq!(
            BoardConfig::new(10, 20, 300),
            Err(GameError::Config(ConfigError::TooManyMines {
                mines: 300,
                max: 199
            }))
        );
        assert!(BoardConfig::new(10, 20, 200).unwrap_err().is_config());
        assert!(BoardConfig::new(1, 1, 1).is_err());
    }

    #[test]
    fn config_accepts_large_dimensions() {
        let config = BoardConfig::new(300, 2, 10).unwrap();
        assert_eq!(config.size(), (300, 2));
        assert_eq!(config.total_cells(), 600);

        let widest = BoardConfig::new(1, Coord::MAX, 1).unwrap();
        assert_eq!(widest.columns(), Coord::MAX);
    }

    #[test]
    fn config_rejects_unaddressable_dimensions() {
        assert_eq!(
            BoardConfig::new(65_536, 2, 1),
            Err(GameError::Config(ConfigError::TooLarge))
        );
    }

    #[test]
    fn config_accepts_valid_values() {
        let config = BoardConfig::new(10, 20, 50).unwrap();

        assert_eq!(config.size(), (10, 20));
        assert_eq!(config.mines(), 50);
        assert_eq!(config.total_cells(), 200);
        assert_eq!(config.safe_cells(), 150);
        assert!(BoardConfig::new(10, 20, 199).is_ok());
    }

    #[test]
    fn config_deserialization_is_validated() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"size":[9,9],"mines":10}"#).unwrap();
        assert_eq!(config, BoardConfig::new(9, 9, 10).unwrap());

        let invalid = serde_json::from_str::<BoardConfig>(r#"{"size":[9,-9],"mines":10}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(!FlagOutcome::NoChange.has_update());
        assert!(FlagOutcome::Changed.has_update());
    }

    #[test]
    fn outcomes_merge_by_severity() {
        use RevealOutcome::*;

        assert_eq!(Revealed | NoChange, Revealed);
        assert_eq!(NoChange | HitMine, HitMine);
        assert_eq!(HitMine | Revealed, HitMine);
        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(
            [NoChange, Revealed, NoChange].into_iter().reduce(BitOr::bitor),
            Some(Revealed)
        );

        assert_eq!(FlagOutcome::NoChange | FlagOutcome::Changed, FlagOutcome::Changed);
        assert_eq!(FlagOutcome::NoChange | FlagOutcome::NoChange, FlagOutcome::NoChange);
    }

    #[test]
    fn config_serializes_size_and_mines() {
        let config = BoardConfig::new(16, 30, 99).unwrap();

        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(json, r#"{"size":[16,30],"mines":99}"#);
    }
}
