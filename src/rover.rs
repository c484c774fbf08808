use serde::Serialize;
use tracing::{debug, error, warn};

use crate::command::{Command, CommandSet};
use crate::error::{Error, Result};
use crate::terrain::Terrain;
use crate::types::{CommandKind, Orientation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RoverState {
    Active,
    Lost,
}

/// Entry of the rover memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Observation {
    Photo { x: i32, y: i32, orientation: Orientation },
    Sample { x: i32, y: i32 },
}

/// Non-fatal problem hit while executing instructions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum Anomaly {
    UnknownCommand(char),
    Malfunction(String),
}

pub struct Rover<'t> {
    id: usize,
    x: i32,
    y: i32,
    orientation: Orientation,
    state: RoverState,
    memory: Vec<Observation>,
    anomalies: Vec<Anomaly>,
    terrain: &'t mut Terrain,
}

impl<'t> Rover<'t> {
    pub fn new(x: i32, y: i32, orientation: Orientation, terrain: &'t mut Terrain) -> Result<Self> {
        if !terrain.is_in_bounds(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }

        Ok(Self {
            id: 0,
            x,
            y,
            orientation,
            state: RoverState::Active,
            memory: Vec::new(),
            anomalies: Vec::new(),
            terrain,
        })
    }

    /// Tags the rover with its position in the mission input (1-based).
    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn is_lost(&self) -> bool {
        self.state == RoverState::Lost
    }

    pub fn memory(&self) -> &[Observation] {
        &self.memory
    }

    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    pub fn turn_left(&mut self) -> RoverState {
        if !self.is_lost() {
            self.orientation = self.orientation.turn_left();
        }
        self.state
    }

    pub fn turn_right(&mut self) -> RoverState {
        if !self.is_lost() {
            self.orientation = self.orientation.turn_right();
        }
        self.state
    }

    pub fn record_photo(&mut self) -> RoverState {
        if !self.is_lost() {
            self.memory.push(Observation::Photo {
                x: self.x,
                y: self.y,
                orientation: self.orientation,
            });
        }
        self.state
    }

    pub fn record_sample(&mut self) -> RoverState {
        if !self.is_lost() {
            self.memory.push(Observation::Sample { x: self.x, y: self.y });
        }
        self.state
    }

    /// Steps one cell forward, applying the scent rule at the grid edge.
    ///
    /// An off-grid step with a matching scent is ignored and the rover stays
    /// active. Without a scent the rover leaves one, becomes lost and keeps
    /// the position it was departing from.
    pub fn move_forward(&mut self, kind: CommandKind) -> Result<RoverState> {
        if self.is_lost() {
            return Ok(RoverState::Lost);
        }

        let (dx, dy) = self.orientation.forward_delta();
        let (Some(next_x), Some(next_y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return Err(Error::CoordinateOverflow {
                x: self.x,
                y: self.y,
                orientation: self.orientation,
            });
        };

        if self.terrain.is_in_bounds(next_x, next_y) {
            self.x = next_x;
            self.y = next_y;
            return Ok(RoverState::Active);
        }

        if self.terrain.has_scent(self.x, self.y, self.orientation, kind) {
            debug!(x = self.x, y = self.y, orientation = %self.orientation, %kind, "scent found, skipping move");
            return Ok(RoverState::Active);
        }

        self.terrain.add_scent(self.x, self.y, self.orientation, kind);
        self.state = RoverState::Lost;
        debug!(x = self.x, y = self.y, orientation = %self.orientation, %kind, "rover lost, scent recorded");
        Ok(RoverState::Lost)
    }

    /// Executes one command. Returns `false` once the rover must stop.
    ///
    /// Unknown commands are recorded and skipped. A command that fails halts
    /// the rover without marking it lost.
    pub fn execute_instruction(&mut self, command: Command) -> bool {
        if self.is_lost() {
            return false;
        }

        if let Command::Unknown(letter) = command {
            warn!(rover = self.id, %letter, "unknown rover command, ignoring");
            self.anomalies.push(Anomaly::UnknownCommand(letter));
        }

        match command.execute(self) {
            Ok(state) => state == RoverState::Active,
            Err(err) => {
                error!(rover = self.id, %err, "rover malfunction");
                self.anomalies.push(Anomaly::Malfunction(err.to_string()));
                false
            }
        }
    }

    pub fn execute_instructions(&mut self, instructions: &str, commands: &CommandSet) {
        for command in commands.parse(instructions) {
            if !self.execute_instruction(command) {
                break;
            }
        }
    }

    pub fn output_line(&self) -> String {
        let line = format!("{} {} {}", self.x, self.y, self.orientation);
        match self.state {
            RoverState::Lost => format!("{line} LOST"),
            RoverState::Active => line,
        }
    }

    /// Ends the rover's run, releasing the terrain.
    pub fn finish(self) -> RoverReport {
        RoverReport {
            id: self.id,
            output: self.output_line(),
            x: self.x,
            y: self.y,
            orientation: self.orientation,
            lost: self.is_lost(),
            memory: self.memory,
            anomalies: self.anomalies,
        }
    }
}

/// Final state of a rover once its instructions are consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoverReport {
    pub id: usize,
    pub output: String,
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub lost: bool,
    pub memory: Vec<Observation>,
    pub anomalies: Vec<Anomaly>,
}
