//! Stepping engine for the Turmite ant simulator.
//!
//! [`SimulationConfig`] is the validated builder-input for a simulation;
//! [`Simulation`] owns the grid and agent state and advances one iteration
//! per [`step_forward`](Simulation::step_forward) call until the agent
//! walks off the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use simulation::Simulation;
