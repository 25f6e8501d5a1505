//! The simulation state and its single-step transition function.

use crate::config::{ConfigError, SimulationConfig};
use turmite_core::{Orientation, RuleTable, StepResult};

/// A running generalized Langton's Ant simulation.
///
/// Owns the grid buffer, the agent, the rule table, and the iteration
/// counter. Mutated only through [`step_forward`](Self::step_forward);
/// everything else is a read-only accessor for the surrounding
/// collaborators (savers, snapshot schedulers, display code).
///
/// Construction performs no validation — callers run
/// [`SimulationConfig::validate`] first and refuse on any reported error.
/// Stepping a simulation built from an unvalidated config can reach an
/// undefined rule slot, which is a contract violation and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    name: String,
    iterations_completed: u64,
    last_step_result: StepResult,
    grid_width: u16,
    grid_height: u16,
    grid: Vec<u8>,
    ant_col: u16,
    ant_row: u16,
    ant_orientation: Orientation,
    rules: RuleTable,
    singular_snapshots: Vec<u64>,
    periodic_snapshots: Vec<u64>,
}

impl Simulation {
    /// Build a fresh simulation from a validated configuration.
    ///
    /// Allocates the `width × height` grid with every cell set to the
    /// configured initial shade. The last step result starts as
    /// [`StepResult::Nil`].
    pub fn new(config: SimulationConfig) -> Self {
        let cell_count = config.cell_count();
        let SimulationConfig {
            name,
            iterations_completed,
            grid_width,
            grid_height,
            initial_shade,
            ant_col,
            ant_row,
            ant_orientation,
            rules,
            singular_snapshots,
            periodic_snapshots,
        } = config;

        Self {
            name,
            iterations_completed,
            last_step_result: StepResult::Nil,
            grid_width,
            grid_height,
            grid: vec![initial_shade; cell_count],
            ant_col,
            ant_row,
            ant_orientation,
            rules,
            singular_snapshots,
            periodic_snapshots,
        }
    }

    /// Rebuild a simulation from persisted state.
    ///
    /// Unlike [`new`](Self::new), the current grid contents and last step
    /// result are supplied explicitly, so a saved simulation resumes
    /// bit-identically. The grid buffer length must match the configured
    /// dimensions; the config itself is still the caller's responsibility
    /// to validate beforehand.
    pub fn restore(
        config: SimulationConfig,
        grid: Vec<u8>,
        last_step_result: StepResult,
    ) -> Result<Self, ConfigError> {
        let expected = config.cell_count();
        if grid.len() != expected {
            return Err(ConfigError::GridSizeMismatch {
                expected,
                actual: grid.len(),
            });
        }
        let mut sim = Self::new(config);
        sim.grid = grid;
        sim.last_step_result = last_step_result;
        Ok(sim)
    }

    /// Opaque simulation label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of successful steps completed so far.
    pub fn iterations_completed(&self) -> u64 {
        self.iterations_completed
    }

    /// Outcome of the most recent step ([`StepResult::Nil`] before the first).
    pub fn last_step_result(&self) -> StepResult {
        self.last_step_result
    }

    /// Grid width in cells.
    pub fn grid_width(&self) -> u16 {
        self.grid_width
    }

    /// Grid height in cells.
    pub fn grid_height(&self) -> u16 {
        self.grid_height
    }

    /// Agent's current column.
    pub fn ant_col(&self) -> u16 {
        self.ant_col
    }

    /// Agent's current row.
    pub fn ant_row(&self) -> u16 {
        self.ant_row
    }

    /// Agent's current orientation.
    pub fn ant_orientation(&self) -> Orientation {
        self.ant_orientation
    }

    /// Row-major view of the grid, one shade byte per cell.
    pub fn grid(&self) -> &[u8] {
        &self.grid
    }

    /// The configured rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Iteration counts at which a snapshot collaborator fires once.
    ///
    /// The engine stores and exposes these; it never acts on them.
    pub fn singular_snapshots(&self) -> &[u64] {
        &self.singular_snapshots
    }

    /// Iteration intervals at which a snapshot collaborator fires repeatedly.
    pub fn periodic_snapshots(&self) -> &[u64] {
        &self.periodic_snapshots
    }

    /// Returns `true` once the agent has hit the grid boundary.
    ///
    /// No further steps should be issued after this reports `true`; the
    /// engine does not guard against it.
    pub fn is_finished(&self) -> bool {
        self.last_step_result.is_terminal()
    }

    /// Advance the simulation by exactly one unit of agent motion.
    ///
    /// In order: look up the rule for the current cell's shade, turn,
    /// overwrite the cell with the replacement shade, then attempt to move
    /// one cell in the new orientation. Moving out of bounds yields
    /// [`StepResult::FailedAtBoundary`] with the agent position and
    /// iteration counter unchanged; otherwise the agent moves, the counter
    /// increments, and the result is [`StepResult::Success`].
    ///
    /// The result is stored (read it back via
    /// [`last_step_result`](Self::last_step_result)) and returned.
    ///
    /// # Panics
    ///
    /// Panics if the current cell's shade has no defined rule. The
    /// closed-chain validation guarantees this cannot happen for a
    /// validated configuration whose agent starts on a defined shade.
    pub fn step_forward(&mut self) -> StepResult {
        let cell_idx = usize::from(self.ant_row) * usize::from(self.grid_width)
            + usize::from(self.ant_col);
        let shade = self.grid[cell_idx];
        let rule = self
            .rules
            .get(shade)
            .unwrap_or_else(|| panic!("no rule defined for shade {shade}"));

        self.ant_orientation = self.ant_orientation.turned(rule.turn);
        self.grid[cell_idx] = rule.replacement_shade;

        let (d_col, d_row) = self.ant_orientation.offset();
        let next_col = i32::from(self.ant_col) + d_col;
        let next_row = i32::from(self.ant_row) + d_row;

        let in_bounds = (0..i32::from(self.grid_width)).contains(&next_col)
            && (0..i32::from(self.grid_height)).contains(&next_row);
        self.last_step_result = if in_bounds {
            self.ant_col = next_col as u16;
            self.ant_row = next_row as u16;
            self.iterations_completed += 1;
            StepResult::Success
        } else {
            StepResult::FailedAtBoundary
        };
        self.last_step_result
    }
}
