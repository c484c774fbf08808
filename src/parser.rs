//! Mission input parsing.
//!
//! ```text
//! 5 3          <- terrain upper-right corner
//! 1 1 E        <- rover start
//! RFRFRFRF     <- rover instructions
//! ```
//!
//! Lines are trimmed and blank lines dropped before the structure is read.

use crate::error::{Error, Result};
use crate::mission::MissionConfig;
use crate::terrain::Terrain;
use crate::types::Orientation;

/// Start state and instructions of one rover, as read from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverPlan {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub instructions: String,
}

/// A parsed mission: the terrain every rover shares and the rovers in input order.
pub struct MissionPlan {
    pub terrain: Terrain,
    pub rovers: Vec<RoverPlan>,
}

pub fn parse(input: &str, config: &MissionConfig) -> Result<MissionPlan> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((terrain_line, rover_lines)) = lines.split_first() else {
        return Err(Error::EmptyInput);
    };

    let terrain = parse_terrain_line(terrain_line, config)?;

    let mut rovers = Vec::with_capacity(rover_lines.len() / 2);
    for record in rover_lines.chunks(2) {
        let [position_line, instruction_line] = record else {
            return Err(Error::MissingInstructionLine {
                position_line: record[0].to_string(),
            });
        };

        let (x, y, orientation) = parse_position_line(position_line)?;
        rovers.push(RoverPlan {
            x,
            y,
            orientation,
            instructions: instruction_line.to_string(),
        });
    }

    Ok(MissionPlan { terrain, rovers })
}

fn parse_terrain_line(line: &str, config: &MissionConfig) -> Result<Terrain> {
    let malformed = || Error::MalformedTerrainLine {
        line: line.to_string(),
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [max_x, max_y] = parts.as_slice() else {
        return Err(malformed());
    };
    let max_x: i32 = max_x.parse().map_err(|_| malformed())?;
    let max_y: i32 = max_y.parse().map_err(|_| malformed())?;

    let limit = config.coordinate_limit();
    if max_x > limit || max_y > limit {
        return Err(Error::TerrainTooLarge {
            max_x,
            max_y,
            limit,
        });
    }

    Terrain::new(max_x, max_y)
}

fn parse_position_line(line: &str) -> Result<(i32, i32, Orientation)> {
    let malformed = || Error::MalformedPositionLine {
        line: line.to_string(),
    };

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, orientation] = parts.as_slice() else {
        return Err(malformed());
    };
    let x: i32 = x.parse().map_err(|_| malformed())?;
    let y: i32 = y.parse().map_err(|_| malformed())?;

    Ok((x, y, orientation.parse()?))
}
