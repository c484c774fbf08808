//! # Mission Report Module
//!
//! Read-only projections of a finished mission, built for humans and tools that
//! want more than the plain `x y O [LOST]` lines.
//!
//! ## Projections
//!
//! - [`DebugReport`]: counts, every scent, scents grouped by cell, the photo and
//!   sample logs and every anomaly, serialized to JSON by the mission runner
//! - [`VisualiseData`]: just what the grid visualiser needs, the surviving
//!   rovers' cells and the scented cells
//!
//! Building a projection never touches the simulation, so leaving it out does
//! not change the mission output.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mission::{MissionOutcome, SkippedRover};
use crate::rover::{Anomaly, Observation};
use crate::terrain::{Scent, Terrain};

/// Full diagnostic view of a mission.
///
/// # Examples
///
/// ```rust
/// use mars_rovers::{run_mission, MissionConfig};
/// use mars_rovers::report::create_debug_report;
///
/// let (mission, outcome) = run_mission("1 1\n1 1 N\nF\n", &MissionConfig::default()).unwrap();
/// let report = create_debug_report(mission.terrain(), &outcome);
///
/// assert_eq!(report.lost_rovers, 1);
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.contains("\"lostRovers\":1"));
/// ```
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    /// Terrain extent, e.g. `"0,0 to 5,3"`
    pub terrain: String,

    /// Rover records in the input, including rovers that were skipped
    pub total_rovers: usize,

    /// Rovers that ended the run lost
    pub lost_rovers: usize,

    /// Every scent, in the order it was recorded
    pub scents: Vec<Scent>,

    /// Scents grouped by `"x,y"` cell, cells sorted by that key as a string.
    ///
    /// Each entry is `"O K"`: the heading and the command class of the fall.
    pub scents_by_cell: IndexMap<String, Vec<String>>,

    /// Photos of all rovers, rover by rover, in the order they were taken
    pub photos_taken: Vec<Observation>,

    /// Samples of all rovers, rover by rover, in the order they were taken
    pub samples_taken: Vec<Observation>,

    /// Non-fatal problems met while executing instructions
    pub anomalies: Vec<AnomalyData>,

    /// Rovers that could not be deployed
    pub skipped: Vec<SkippedRover>,
}

/// Anomaly tagged with the input position (1-based) of the rover that hit it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AnomalyData {
    pub rover: usize,
    pub anomaly: Anomaly,
}

/// What the grid visualiser draws.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisualiseData {
    pub max_x: i32,
    pub max_y: i32,

    /// Final cells of the rovers that are not lost
    pub rover_positions: Vec<(i32, i32)>,

    /// Distinct cells holding at least one scent
    pub scent_cells: Vec<(i32, i32)>,
}

pub fn create_debug_report(terrain: &Terrain, outcome: &MissionOutcome) -> DebugReport {
    // Keyed by the "x,y" string, so cells come out in string order ("10,0" before "2,20")
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for scent in terrain.scents() {
        grouped
            .entry(format!("{},{}", scent.x, scent.y))
            .or_default()
            .push(format!("{} {}", scent.orientation, scent.kind));
    }
    let scents_by_cell = grouped.into_iter().collect();

    let observations = || outcome.rovers.iter().flat_map(|r| r.memory.iter().copied());
    let photos_taken = observations()
        .filter(|o| matches!(o, Observation::Photo { .. }))
        .collect();
    let samples_taken = observations()
        .filter(|o| matches!(o, Observation::Sample { .. }))
        .collect();

    let anomalies = outcome
        .rovers
        .iter()
        .flat_map(|r| {
            r.anomalies.iter().map(move |anomaly| AnomalyData {
                rover: r.id,
                anomaly: anomaly.clone(),
            })
        })
        .collect();

    DebugReport {
        terrain: format!("0,0 to {},{}", terrain.max_x(), terrain.max_y()),
        total_rovers: outcome.total_rovers,
        lost_rovers: outcome.lost_count(),
        scents: terrain.scents().copied().collect(),
        scents_by_cell,
        photos_taken,
        samples_taken,
        anomalies,
        skipped: outcome.skipped.clone(),
    }
}

pub fn create_visualise_data(terrain: &Terrain, outcome: &MissionOutcome) -> VisualiseData {
    VisualiseData {
        max_x: terrain.max_x(),
        max_y: terrain.max_y(),
        rover_positions: outcome
            .rovers
            .iter()
            .filter(|r| !r.lost)
            .map(|r| (r.x, r.y))
            .collect(),
        scent_cells: terrain.scent_cells(),
    }
}
