use std::collections::HashSet;
use std::io::{stdout, Result, Write};

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::report::VisualiseData;

/// Width of one grid cell in characters, walls excluded.
const CELL_WIDTH: usize = 4;

/// ASCII box-drawn picture of the terrain.
///
/// North is up. A cell shows `R` when a surviving rover ended there, `S` when
/// it holds a scent and `RS` for both. Lost rovers are not drawn.
pub struct GridVisualiser;

impl GridVisualiser {
    pub fn draw(data: &VisualiseData) -> String {
        let rovers: HashSet<(i32, i32)> = data.rover_positions.iter().copied().collect();
        let scents: HashSet<(i32, i32)> = data.scent_cells.iter().copied().collect();
        let columns = usize::try_from(data.max_x).unwrap_or(0) + 1;

        let mut lines = vec![Self::border(columns, '┌', '┬', '┐')];

        for y in (0..=data.max_y).rev() {
            let mut row = String::from("│");
            for x in 0..=data.max_x {
                let mut cell = String::from(" ");
                if rovers.contains(&(x, y)) {
                    cell.push('R');
                }
                if scents.contains(&(x, y)) {
                    cell.push('S');
                }
                row.push_str(&format!("{cell:<CELL_WIDTH$}│"));
            }
            lines.push(row);

            if y > 0 {
                lines.push(Self::border(columns, '├', '┼', '┤'));
            }
        }

        lines.push(Self::border(columns, '└', '┴', '┘'));
        lines.join("\n")
    }

    fn border(columns: usize, left: char, junction: char, right: char) -> String {
        let segment = "─".repeat(CELL_WIDTH);
        let inner = vec![segment; columns].join(junction.to_string().as_str());
        format!("{left}{inner}{right}")
    }
}

pub struct Display;

impl Display {
    /// Prints the grid to the terminal, rovers in green and scents in red.
    pub fn render(data: &VisualiseData) -> Result<()> {
        let mut stdout = stdout();

        stdout.execute(Print(format!("\n=== Terrain 0,0 to {},{} ===\n", data.max_x, data.max_y)))?;
        stdout.execute(Print("Legend: [R] rover | [S] scent\n\n"))?;

        for ch in GridVisualiser::draw(data).chars() {
            match ch {
                'R' => {
                    stdout.execute(SetForegroundColor(Color::Green))?;
                    stdout.execute(Print(ch))?;
                    stdout.execute(ResetColor)?;
                }
                'S' => {
                    stdout.execute(SetForegroundColor(Color::Red))?;
                    stdout.execute(Print(ch))?;
                    stdout.execute(ResetColor)?;
                }
                _ => {
                    stdout.execute(Print(ch))?;
                }
            }
        }

        stdout.execute(Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }
}
