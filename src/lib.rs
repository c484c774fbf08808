// Mars rovers simulation library
// Exposes every module so the binaries (mission runner, data generator) can use them

pub mod types;          // Orientation, command scent classes, input limits
pub mod error;          // Crate-wide error type
pub mod terrain;        // Bounded grid and scent registry
pub mod command;        // Command letters and the per-mission command table
pub mod rover;          // Rover state machine
pub mod parser;         // Mission input parsing
pub mod mission;        // Runs every rover in order over a shared terrain
pub mod report;         // Debug and visualise projections
pub mod display;        // ASCII grid rendering

// Re-export the main types for easier importing
pub use types::*;
pub use error::{Error, Result};
pub use terrain::{Scent, Terrain};
pub use command::{Command, CommandSet};
pub use rover::{Anomaly, Observation, Rover, RoverReport, RoverState};
pub use parser::{MissionPlan, RoverPlan};
pub use mission::{run_mission, Mission, MissionConfig, MissionOutcome, SkippedRover};
