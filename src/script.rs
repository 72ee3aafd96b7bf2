//! Replaying a solved path as pointer clicks.
//!
//! The pointer is assumed to already rest on the origin, so the first position of a path produces no click.

use std::fmt::{Display, Formatter};
use std::fs;
use std::io;

use tracing::info;

use crate::location::Location;

/// A screen position in pixels.
pub type Pixel = (i64, i64);

/// One step of a [`ClickScript`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Click at a screen position.
    Click {
        /// Horizontal screen position.
        x: i64,
        /// Vertical screen position.
        y: i64,
    },
    /// Wait this many milliseconds.
    Delay(u64),
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Click { x, y } => write!(f, "click {} {}", x, y),
            Instruction::Delay(ms) => write!(f, "delay {}", ms),
        }
    }
}

/// How positions become clicks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Added to every position, e.g. the screen position of the board's corner.
    pub offset: Pixel,
    /// Wait after each click. Zero adds no delays at all.
    pub delay_ms: u64,
}

/// The center of the cell at `location` on a board drawn with square cells `cell_size` pixels wide, relative to its corner.
pub fn cell_center(location: Location, cell_size: u32) -> Pixel {
    let size = i64::from(cell_size);
    (location.0 as i64 * size + size / 2, location.1 as i64 * size + size / 2)
}

/// A flat list of clicks, optionally interleaved with delays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickScript {
    instructions: Vec<Instruction>,
}

impl ClickScript {
    /// One click per position after the first, each followed by a delay if [`ScriptOptions::delay_ms`] is nonzero.
    pub fn from_positions<I>(positions: I, options: ScriptOptions) -> Self
    where
        I: IntoIterator<Item = Pixel>,
    {
        let mut instructions = Vec::new();
        for (x, y) in positions.into_iter().skip(1) {
            instructions.push(Instruction::Click { x: x + options.offset.0, y: y + options.offset.1 });
            if options.delay_ms > 0 {
                instructions.push(Instruction::Delay(options.delay_ms));
            }
        }

        Self { instructions }
    }

    /// The instructions in replay order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Write the script to `path`, one instruction per line.
    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> io::Result<()> {
        fs::write(path.as_ref(), self.to_string())?;
        info!(path = %path.as_ref().display(), instructions = self.instructions.len(), "wrote click script");
        Ok(())
    }
}

impl Display for ClickScript {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{cell_center, ClickScript, Instruction, ScriptOptions};
    use crate::location::Location;

    #[test]
    fn skips_origin_and_offsets() {
        let script = ClickScript::from_positions([(0, 0), (10, 20), (30, 5)], ScriptOptions { offset: (100, 200), delay_ms: 0 });
        assert_eq!(script.instructions(), &[
            Instruction::Click { x: 110, y: 220 },
            Instruction::Click { x: 130, y: 205 },
        ]);
    }

    #[test]
    fn interleaves_delays() {
        let script = ClickScript::from_positions([(0, 0), (1, 2)], ScriptOptions { offset: (0, 0), delay_ms: 50 });
        assert_eq!(script.to_string(), "click 1 2\ndelay 50\n");
    }

    #[test]
    fn lone_origin_is_empty() {
        assert!(ClickScript::from_positions([(4, 4)], ScriptOptions::default()).instructions().is_empty());
    }

    #[test]
    fn cell_centers() {
        assert_eq!(cell_center(Location(0, 0), 40), (20, 20));
        assert_eq!(cell_center(Location(2, 1), 40), (100, 60));
    }
}
