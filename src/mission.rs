use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::command::CommandSet;
use crate::error::{Error, Result};
use crate::parser::{self, RoverPlan};
use crate::rover::{Rover, RoverReport};
use crate::terrain::Terrain;
use crate::types::{MAX_COORDINATE, MAX_INSTRUCTION_LEN};

/// Input limits applied to a mission.
///
/// The limits can only be tightened: values above [`MAX_COORDINATE`] and
/// [`MAX_INSTRUCTION_LEN`] are capped to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Largest value allowed for either terrain bound.
    pub max_coordinate: i32,
    /// Instruction strings must be strictly shorter than this.
    pub max_instruction_len: usize,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            max_coordinate: MAX_COORDINATE,
            max_instruction_len: MAX_INSTRUCTION_LEN,
        }
    }
}

impl MissionConfig {
    /// Largest terrain bound accepted.
    pub fn coordinate_limit(&self) -> i32 {
        self.max_coordinate.min(MAX_COORDINATE)
    }

    /// Length at which an instruction string aborts the mission.
    pub fn instruction_limit(&self) -> usize {
        self.max_instruction_len.min(MAX_INSTRUCTION_LEN)
    }
}

/// Rover that never ran because it could not be deployed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedRover {
    /// 1-based position of the rover in the input.
    pub rover: usize,
    pub x: i32,
    pub y: i32,
    pub reason: String,
}

/// Result of one mission run.
#[derive(Clone, Debug, Default)]
pub struct MissionOutcome {
    /// Every rover record handed to the run, skipped ones included.
    pub total_rovers: usize,
    /// Reports of deployed rovers, in input order.
    pub rovers: Vec<RoverReport>,
    pub skipped: Vec<SkippedRover>,
}

impl MissionOutcome {
    /// One `x y O [LOST]` line per deployed rover.
    pub fn output(&self) -> Vec<String> {
        self.rovers.iter().map(|r| r.output.clone()).collect()
    }

    pub fn lost_count(&self) -> usize {
        self.rovers.iter().filter(|r| r.lost).count()
    }
}

/// One simulation run over a shared terrain.
///
/// Rovers are processed strictly one after the other so that every scent left
/// by a rover is seen by all the rovers after it.
pub struct Mission {
    terrain: Terrain,
    commands: CommandSet,
    config: MissionConfig,
}

impl Mission {
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            commands: CommandSet::standard(),
            config: MissionConfig::default(),
        }
    }

    pub fn with_commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_config(mut self, config: MissionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Runs every rover in order against the terrain.
    ///
    /// Fails before any rover moves if one instruction string is too long.
    /// Rovers starting outside the terrain are skipped and reported.
    pub fn run(&mut self, rovers: &[RoverPlan]) -> Result<MissionOutcome> {
        let max = self.config.instruction_limit();
        for (index, plan) in rovers.iter().enumerate() {
            let len = plan.instructions.chars().count();
            if len >= max {
                return Err(Error::InstructionTooLong {
                    rover: index + 1,
                    len,
                    max,
                });
            }
        }

        let mut outcome = MissionOutcome {
            total_rovers: rovers.len(),
            ..Default::default()
        };

        for (index, plan) in rovers.iter().enumerate() {
            let number = index + 1;
            let mut rover = match Rover::new(plan.x, plan.y, plan.orientation, &mut self.terrain) {
                Ok(rover) => rover.with_id(number),
                Err(err) => {
                    warn!(rover = number, %err, "rover inoperable, skipping");
                    outcome.skipped.push(SkippedRover {
                        rover: number,
                        x: plan.x,
                        y: plan.y,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            rover.execute_instructions(&plan.instructions, &self.commands);
            let report = rover.finish();
            debug!(rover = number, output = %report.output, "rover finished");
            outcome.rovers.push(report);
        }

        info!(
            rovers = outcome.rovers.len(),
            lost = outcome.lost_count(),
            skipped = outcome.skipped.len(),
            scents = self.terrain.scent_count(),
            "mission complete"
        );
        Ok(outcome)
    }
}

/// Parses `input` and runs it as a single mission with the standard commands.
pub fn run_mission(input: &str, config: &MissionConfig) -> Result<(Mission, MissionOutcome)> {
    let plan = parser::parse(input, config)?;
    let mut mission = Mission::new(plan.terrain).with_config(*config);
    let outcome = mission.run(&plan.rovers)?;
    Ok((mission, outcome))
}
