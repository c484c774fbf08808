use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CommandKind, Orientation};

/// Marker left where a rover fell off the grid.
///
/// Keyed by the departing cell, the heading and the scent class of the
/// command that caused the fall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scent {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    pub kind: CommandKind,
}

impl std::fmt::Display for Scent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.orientation, self.kind)
    }
}

/// Rectangular grid from `(0, 0)` to `(max_x, max_y)` plus the scent registry.
///
/// One terrain is shared by every rover of a mission. Scents only ever grow.
pub struct Terrain {
    max_x: i32,
    max_y: i32,
    scents: IndexSet<Scent>,
}

impl Terrain {
    pub fn new(max_x: i32, max_y: i32) -> Result<Self> {
        if max_x < 0 || max_y < 0 {
            return Err(Error::NegativeBounds { max_x, max_y });
        }

        Ok(Self {
            max_x,
            max_y,
            scents: IndexSet::new(),
        })
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y)
    }

    pub fn has_scent(&self, x: i32, y: i32, orientation: Orientation, kind: CommandKind) -> bool {
        self.scents.contains(&Scent {
            x,
            y,
            orientation,
            kind,
        })
    }

    /// Records a fatal move. Adding the same tuple twice is a no-op.
    pub fn add_scent(&mut self, x: i32, y: i32, orientation: Orientation, kind: CommandKind) {
        self.scents.insert(Scent {
            x,
            y,
            orientation,
            kind,
        });
    }

    /// All scents in the order they were first recorded.
    pub fn scents(&self) -> impl Iterator<Item = &Scent> {
        self.scents.iter()
    }

    pub fn scent_count(&self) -> usize {
        self.scents.len()
    }

    /// Distinct scented cells, in the order their first scent was recorded.
    pub fn scent_cells(&self) -> Vec<(i32, i32)> {
        let cells: IndexSet<(i32, i32)> = self.scents.iter().map(|s| (s.x, s.y)).collect();
        cells.into_iter().collect()
    }
}
