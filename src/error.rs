use crate::types::Orientation;

/// Everything that can go wrong while reading a mission or running a rover.
///
/// Input-shape errors abort the whole mission. `OutOfBounds` only skips the
/// rover it belongs to, and `CoordinateOverflow` only halts the rover that hit it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("input must contain at least the terrain line")]
    EmptyInput,

    #[error("terrain line must be 'maxX maxY': {line}")]
    MalformedTerrainLine { line: String },

    #[error("terrain bounds {max_x} {max_y} exceed the maximum coordinate {limit}")]
    TerrainTooLarge { max_x: i32, max_y: i32, limit: i32 },

    #[error("terrain bounds must be non-negative, got {max_x} {max_y}")]
    NegativeBounds { max_x: i32, max_y: i32 },

    #[error("position line must be 'x y O': {line}")]
    MalformedPositionLine { line: String },

    #[error("invalid orientation: {value}")]
    InvalidOrientation { value: String },

    #[error("missing instruction line for rover at '{position_line}'")]
    MissingInstructionLine { position_line: String },

    #[error("instruction string for rover {rover} is {len} characters long (must be less than {max})")]
    InstructionTooLong { rover: usize, len: usize, max: usize },

    #[error("initial position ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("coordinate overflow moving {orientation} from ({x}, {y})")]
    CoordinateOverflow { x: i32, y: i32, orientation: Orientation },
}

pub type Result<T> = std::result::Result<T, Error>;
