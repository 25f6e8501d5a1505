//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] carries everything needed to build a
//! [`Simulation`](crate::Simulation): grid geometry, agent start state, the
//! rule table, and the snapshot trigger sequences.
//! [`validate()`](SimulationConfig::validate) runs every structural check
//! and returns the full list of failures; loaders must refuse to construct
//! on a non-empty list. The [`Simulation`](crate::Simulation) constructor itself performs
//! no validation.

use std::error::Error;
use std::fmt;

use turmite_core::{Orientation, RuleTable, RuleTableError};

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The rule table failed its closed-chain validation.
    RuleTable(RuleTableError),
    /// Grid width is zero.
    ZeroGridWidth,
    /// Grid height is zero.
    ZeroGridHeight,
    /// Agent starting column is outside the grid.
    AntColOutOfBounds {
        /// The configured starting column.
        col: u16,
        /// The configured grid width.
        width: u16,
    },
    /// Agent starting row is outside the grid.
    AntRowOutOfBounds {
        /// The configured starting row.
        row: u16,
        /// The configured grid height.
        height: u16,
    },
    /// A restored grid buffer does not match the configured dimensions.
    GridSizeMismatch {
        /// `width * height` for the configured dimensions.
        expected: usize,
        /// Length of the supplied grid buffer.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleTable(e) => write!(f, "{e}"),
            Self::ZeroGridWidth => write!(f, "grid width must be at least 1"),
            Self::ZeroGridHeight => write!(f, "grid height must be at least 1"),
            Self::AntColOutOfBounds { col, width } => {
                write!(f, "ant starting column {col} is outside grid width {width}")
            }
            Self::AntRowOutOfBounds { row, height } => {
                write!(f, "ant starting row {row} is outside grid height {height}")
            }
            Self::GridSizeMismatch { expected, actual } => {
                write!(f, "grid buffer has {actual} cells, expected {expected}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RuleTable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleTableError> for ConfigError {
    fn from(e: RuleTableError) -> Self {
        Self::RuleTable(e)
    }
}

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
///
/// Grid dimensions are `u16`, so the upper bound of 65 535 cells per axis
/// is enforced by the type; only zero needs rejecting at validation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Opaque simulation label, used for naming saved state and exports.
    pub name: String,
    /// Iteration counter to resume from (0 for a fresh simulation).
    pub iterations_completed: u64,
    /// Grid width in cells.
    pub grid_width: u16,
    /// Grid height in cells.
    pub grid_height: u16,
    /// Shade every cell starts with.
    pub initial_shade: u8,
    /// Agent starting column.
    pub ant_col: u16,
    /// Agent starting row.
    pub ant_row: u16,
    /// Agent starting orientation.
    pub ant_orientation: Orientation,
    /// The shade transition table.
    pub rules: RuleTable,
    /// Iteration counts at which a snapshot collaborator should fire once.
    pub singular_snapshots: Vec<u64>,
    /// Iteration intervals at which a snapshot collaborator fires repeatedly.
    pub periodic_snapshots: Vec<u64>,
}

impl SimulationConfig {
    /// Validate all structural invariants.
    ///
    /// Every check is independent and appends its own entry; an empty
    /// vector means the configuration is safe to construct from. A rule
    /// table with fewer than two defined rules reports only that failure
    /// (the chain analysis is skipped, see
    /// [`RuleTable::validate`]).
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.rules.validate() {
            errors.push(ConfigError::from(e));
        }
        if self.grid_width == 0 {
            errors.push(ConfigError::ZeroGridWidth);
        }
        if self.grid_height == 0 {
            errors.push(ConfigError::ZeroGridHeight);
        }
        if self.ant_col >= self.grid_width {
            errors.push(ConfigError::AntColOutOfBounds {
                col: self.ant_col,
                width: self.grid_width,
            });
        }
        if self.ant_row >= self.grid_height {
            errors.push(ConfigError::AntRowOutOfBounds {
                row: self.ant_row,
                height: self.grid_height,
            });
        }

        errors
    }

    /// Number of cells in the configured grid.
    pub fn cell_count(&self) -> usize {
        usize::from(self.grid_width) * usize::from(self.grid_height)
    }
}
