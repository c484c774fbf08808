// tests/mission_scenarios.rs
use mars_rovers::report::{create_debug_report, create_visualise_data};
use mars_rovers::{
    run_mission, Anomaly, CommandKind, Error, Mission, MissionConfig, Orientation, RoverPlan, Terrain,
};

fn output(input: &str) -> Vec<String> {
    let (_, outcome) = run_mission(input, &MissionConfig::default()).unwrap();
    outcome.output()
}

#[test]
fn sample_input_matches_expected_output() {
    let input = "\
5 3
1 1 E
RFRFRFRF
3 2 N
FRRFLLFFRRFLL
0 3 W
LLFFFLFLFL
";

    assert_eq!(output(input), vec!["1 1 E", "3 3 N LOST", "2 3 S"]);
}

#[test]
fn single_rover_stays_in_bounds() {
    assert_eq!(output("5 5\n0 0 N\nFFFF"), vec!["0 4 N"]);
}

#[test]
fn scent_saves_a_later_rover_at_the_same_edge() {
    // Rover 1 dies at (3,3) facing N; rover 2 reaches the same cell and heading.
    let input = "5 3\n3 2 N\nFF\n3 1 N\nFFF\n";
    assert_eq!(output(input), vec!["3 3 N LOST", "3 3 N"]);
}

#[test]
fn every_heading_on_a_single_cell_leaves_its_own_scent() {
    let input = "0 0\n0 0 N\nF\n0 0 E\nF\n0 0 S\nF\n0 0 W\nF\n0 0 N\nF\n";
    let (mission, outcome) = run_mission(input, &MissionConfig::default()).unwrap();

    assert_eq!(
        outcome.output(),
        vec!["0 0 N LOST", "0 0 E LOST", "0 0 S LOST", "0 0 W LOST", "0 0 N"]
    );
    assert_eq!(mission.terrain().scent_count(), 4);
    for orientation in Orientation::ALL {
        assert!(mission
            .terrain()
            .has_scent(0, 0, orientation, CommandKind::Forward));
    }
}

#[test]
fn scents_do_not_cover_other_cells() {
    let input = "2 2\n2 2 N\nF\n1 2 N\nF\n";
    assert_eq!(output(input), vec!["2 2 N LOST", "1 2 N LOST"]);
}

#[test]
fn hop_benefits_from_a_forward_scent() {
    let input = "4 4\n4 3 E\nF\n4 4 S\nLH\n";
    // Rover 2 turns east at (4,4): the hop's first step is off the grid with no scent there.
    assert_eq!(output(input), vec!["4 3 E LOST", "4 4 E LOST"]);

    let input = "4 4\n4 3 E\nF\n2 3 E\nHH\n";
    // Rover 2 hops to (4,3), then both halves of the next hop hit the scent.
    assert_eq!(output(input), vec!["4 3 E LOST", "4 3 E"]);
}

#[test]
fn out_of_bounds_rover_is_omitted_from_output() {
    let input = "3 3\n1 1 N\nF\n7 1 N\nF\n2 2 S\nF\n";
    let (mission, outcome) = run_mission(input, &MissionConfig::default()).unwrap();

    assert_eq!(outcome.output(), vec!["1 2 N", "2 1 S"]);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].rover, 2);

    let report = create_debug_report(mission.terrain(), &outcome);
    assert_eq!(report.total_rovers, 3);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn unknown_commands_do_not_stop_the_mission() {
    let input = "3 3\n0 0 N\nFZFzF\n";
    assert_eq!(output(input), vec!["0 3 N"]);
}

#[test]
fn whitespace_in_instructions_is_flagged_as_unknown() {
    let input = "3 3\n0 0 N\nF F\n";
    let (mission, outcome) = run_mission(input, &MissionConfig::default()).unwrap();
    assert_eq!(outcome.output(), vec!["0 2 N"]);

    let report = create_debug_report(mission.terrain(), &outcome);
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.anomalies[0].rover, 1);
    assert_eq!(report.anomalies[0].anomaly, Anomaly::UnknownCommand(' '));
}

#[test]
fn long_instruction_string_aborts_the_mission() {
    let long = "L".repeat(100);
    let input = format!("5 5\n1 1 N\nF\n2 2 N\n{long}\n");

    let result = run_mission(&input, &MissionConfig::default());
    assert!(matches!(
        result.err(),
        Some(Error::InstructionTooLong { rover: 2, len: 100, .. })
    ));

    let just_under = "L".repeat(99);
    let input = format!("5 5\n2 2 N\n{just_under}\n");
    assert_eq!(output(&input), vec!["2 2 E"]);
}

#[test]
fn fatal_input_errors_abort() {
    let config = MissionConfig::default();
    assert!(matches!(run_mission("", &config).err(), Some(Error::EmptyInput)));
    assert!(matches!(
        run_mission("60 3\n1 1 N\nF", &config).err(),
        Some(Error::TerrainTooLarge { .. })
    ));
    assert!(matches!(
        run_mission("5 3\n1 1 Q\nF", &config).err(),
        Some(Error::InvalidOrientation { .. })
    ));
    assert!(matches!(
        run_mission("5 3\n1 1 N\nF\n2 2 N", &config).err(),
        Some(Error::MissingInstructionLine { .. })
    ));
}

#[test]
fn scents_carry_over_between_runs_of_one_mission() {
    let mut mission = Mission::new(Terrain::new(2, 2).unwrap());
    let rover = |x, y, orientation, instructions: &str| RoverPlan {
        x,
        y,
        orientation,
        instructions: instructions.to_string(),
    };

    let first = mission
        .run(&[rover(0, 2, Orientation::West, "F")])
        .unwrap();
    assert_eq!(first.output(), vec!["0 2 W LOST"]);

    let second = mission
        .run(&[rover(0, 0, Orientation::North, "FFLF")])
        .unwrap();
    assert_eq!(second.output(), vec!["0 2 W"]);
}

#[test]
fn visualise_projection_matches_final_state() {
    let input = "5 3\n1 1 E\nRFRFRFRF\n3 2 N\nFRRFLLFFRRFLL\n0 3 W\nLLFFFLFLFL\n";
    let (mission, outcome) = run_mission(input, &MissionConfig::default()).unwrap();
    let data = create_visualise_data(mission.terrain(), &outcome);

    assert_eq!(data.rover_positions, vec![(1, 1), (2, 3)]);
    assert_eq!(data.scent_cells, vec![(3, 3)]);
}
