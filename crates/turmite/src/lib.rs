//! Turmite: a generalized Langton's Ant simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Turmite sub-crates. For most users, adding `turmite` as a single
//! dependency is sufficient.
//!
//! A simulation is a rectangular grid of shaded cells plus a single agent.
//! Each step, the shade under the agent selects a rule: the agent turns,
//! recolors the cell, and moves one cell forward. The run ends when the
//! agent walks off the grid.
//!
//! # Quick start
//!
//! ```rust
//! use turmite::{
//!     Orientation, Rule, RuleTable, Simulation, SimulationConfig, StepResult,
//!     TurnDirection,
//! };
//!
//! // The classic Langton pair: white turns right, black turns left.
//! let rules = RuleTable::from_pairs([
//!     (0, Rule { replacement_shade: 1, turn: TurnDirection::Right }),
//!     (1, Rule { replacement_shade: 0, turn: TurnDirection::Left }),
//! ]);
//!
//! let config = SimulationConfig {
//!     name: "langton".to_string(),
//!     iterations_completed: 0,
//!     grid_width: 64,
//!     grid_height: 64,
//!     initial_shade: 0,
//!     ant_col: 32,
//!     ant_row: 32,
//!     ant_orientation: Orientation::North,
//!     rules,
//!     singular_snapshots: vec![],
//!     periodic_snapshots: vec![],
//! };
//! assert!(config.validate().is_empty());
//!
//! let mut sim = Simulation::new(config);
//! while !sim.is_finished() {
//!     sim.step_forward();
//! }
//! assert_eq!(sim.last_step_result(), StepResult::FailedAtBoundary);
//! assert!(sim.iterations_completed() > 0);
//! ```
//!
//! # Modules
//!
//! - [`types`] (`turmite-core`): step outcomes, orientations, rules, and
//!   chain validation
//! - [`engine`] (`turmite-engine`): configuration validation and the
//!   stepping engine

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use turmite_core as types;
pub use turmite_engine as engine;

pub use turmite_core::{Orientation, Rule, RuleTable, RuleTableError, StepResult, TurnDirection};
pub use turmite_engine::{ConfigError, Simulation, SimulationConfig};
