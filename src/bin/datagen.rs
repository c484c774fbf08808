// Mission data generator
// Writes a random mission file to stdout: one terrain, many rovers, long instruction strings

use anyhow::{ensure, Result};
use clap::Parser;
use rand::prelude::*;
use rand::rngs::StdRng;

use mars_rovers::{Orientation, MAX_COORDINATE, MAX_INSTRUCTION_LEN};

/// NOTE - One full turn on the spot, then the rover is forced to move
const MAX_CONSECUTIVE_ROTATIONS: usize = 4;

#[derive(Parser)]
#[command(name = "rover-datagen")]
#[command(about = "Generate a random Mars rover mission file")]
struct Args {
    #[arg(long, default_value_t = MAX_COORDINATE)]
    max_x: i32,

    #[arg(long, default_value_t = MAX_COORDINATE)]
    max_y: i32,

    #[arg(long, default_value_t = 100)]
    rovers: usize,

    /// Letters drawn per rover before `FF` pairs are folded into `H`
    #[arg(long, default_value_t = MAX_INSTRUCTION_LEN - 1)]
    commands: usize,

    /// Seed for a reproducible file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    ensure!(
        (0..=MAX_COORDINATE).contains(&args.max_x) && (0..=MAX_COORDINATE).contains(&args.max_y),
        "terrain bounds must be between 0 and {MAX_COORDINATE}"
    );
    ensure!(
        args.commands < MAX_INSTRUCTION_LEN,
        "instruction strings must be shorter than {MAX_INSTRUCTION_LEN} letters"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("{}", generate_mission(&mut rng, &args));
    Ok(())
}

fn generate_mission(rng: &mut impl Rng, args: &Args) -> String {
    let mut lines = vec![format!("{} {}", args.max_x, args.max_y)];

    for _ in 0..args.rovers {
        let x = rng.gen_range(0..=args.max_x);
        let y = rng.gen_range(0..=args.max_y);
        let orientation = Orientation::ALL
            .choose(rng)
            .copied()
            .unwrap_or(Orientation::North);
        lines.push(format!("{x} {y} {orientation}"));
        lines.push(generate_instructions(rng, args.commands));
    }

    lines.join("\n")
}

/// Random instruction string biased toward `F`.
///
/// Never more than four rotations in a row, rare photos and samples, and every
/// `FF` pair replaced by a hop.
fn generate_instructions(rng: &mut impl Rng, len: usize) -> String {
    let mut letters = String::with_capacity(len);
    let mut rotations = 0;

    for _ in 0..len {
        if rotations >= MAX_CONSECUTIVE_ROTATIONS {
            letters.push('F');
            rotations = 0;
            continue;
        }

        match rng.gen_range(1..=100) {
            1..=55 => {
                letters.push('F');
                rotations = 0;
            }
            56..=75 => {
                letters.push('L');
                rotations += 1;
            }
            76..=98 => {
                letters.push('R');
                rotations += 1;
            }
            _ => letters.push(if rng.gen_bool(0.5) { 'P' } else { 'S' }),
        }
    }

    letters.replace("FF", "H")
}
