//! # Rover Types Module
//!
//! Core value types shared by the whole simulation: the compass [`Orientation`],
//! the scent class of a command ([`CommandKind`]) and the global input limits.
//!
//! ## Key Components
//!
//! - **Orientation**: N/E/S/W with the turn algebra and the forward step vector
//! - **CommandKind**: the equivalence class a fatal move is recorded under
//! - **MAX_COORDINATE / MAX_INSTRUCTION_LEN**: limits enforced on mission input
//!
//! All types are serializable so the mission reports can embed them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// NOTE - Largest value allowed for either terrain bound
pub const MAX_COORDINATE: i32 = 50;

/// NOTE - Instruction strings must be strictly shorter than this
pub const MAX_INSTRUCTION_LEN: usize = 100;

/// Compass heading of a rover.
///
/// Turning right walks the cycle N → E → S → W → N, turning left walks it backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    pub fn turn_left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Unit step `(dx, dy)` for one move forward. North is `+y`.
    pub fn forward_delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::South => (0, -1),
            Orientation::East => (1, 0),
            Orientation::West => (-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Orientation::North),
            "E" => Ok(Orientation::East),
            "S" => Ok(Orientation::South),
            "W" => Ok(Orientation::West),
            _ => Err(Error::InvalidOrientation {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Scent-equivalence class of a command.
///
/// A scent is recorded under the class, not the letter, so a hop and a plain
/// forward move share one class and profit from each other's scents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CommandKind {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "P")]
    Photo,
    #[serde(rename = "S")]
    Sample,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            CommandKind::Left => 'L',
            CommandKind::Right => 'R',
            CommandKind::Forward => 'F',
            CommandKind::Photo => 'P',
            CommandKind::Sample => 'S',
        };
        write!(f, "{letter}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_turns_return_to_start() {
        for start in Orientation::ALL {
            let left = (0..4).fold(start, |o, _| o.turn_left());
            let right = (0..4).fold(start, |o, _| o.turn_right());
            assert_eq!(left, start);
            assert_eq!(right, start);
        }
    }

    #[test]
    fn left_undoes_right() {
        for o in Orientation::ALL {
            assert_eq!(o.turn_right().turn_left(), o);
        }
    }

    #[test]
    fn forward_delta_is_a_unit_axis_step() {
        assert_eq!(Orientation::North.forward_delta(), (0, 1));
        assert_eq!(Orientation::South.forward_delta(), (0, -1));
        assert_eq!(Orientation::East.forward_delta(), (1, 0));
        assert_eq!(Orientation::West.forward_delta(), (-1, 0));

        for o in Orientation::ALL {
            let (dx, dy) = o.forward_delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{o} must not move diagonally");
        }
    }

    #[test]
    fn parses_trimmed_case_insensitive_letters() {
        assert_eq!(" n ".parse::<Orientation>(), Ok(Orientation::North));
        assert_eq!("e".parse::<Orientation>(), Ok(Orientation::East));
        assert_eq!("S\t".parse::<Orientation>(), Ok(Orientation::South));
        assert_eq!("W".parse::<Orientation>(), Ok(Orientation::West));
    }

    #[test]
    fn rejects_unknown_orientation() {
        assert_eq!(
            "X".parse::<Orientation>(),
            Err(Error::InvalidOrientation {
                value: "X".to_string()
            })
        );
        assert!("NE".parse::<Orientation>().is_err());
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn displays_single_letters() {
        let letters: String = Orientation::ALL.iter().map(|o| o.to_string()).collect();
        assert_eq!(letters, "NESW");
        assert_eq!(CommandKind::Forward.to_string(), "F");
    }
}
