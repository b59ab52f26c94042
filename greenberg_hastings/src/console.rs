// console.rs - Text rendering and the input-paced console loop

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::automaton::Automaton;
use crate::grid::{self, CellState, TGrid};

/// Writes the grid one row per line, each row wrapped in `|`.
pub fn render<W: Write>(grid: &TGrid, out: &mut W) -> std::io::Result<()> {
    for row in grid {
        let line: String = row
            .iter()
            .map(|&value| CellState::from_value(value).glyph())
            .collect();
        writeln!(out, "|{}|", line)?;
    }
    Ok(())
}

/// Seeds the center cell, then prints and advances one generation per line
/// of input until a line starting with `q` or end of input. Returns the
/// number of generations computed.
pub fn run<R: BufRead, W: Write>(automaton: &mut Automaton, mut input: R, mut out: W) -> Result<u64> {
    info!("Running in console mode");
    automaton.excite(grid::WIDTH / 2, grid::HEIGHT / 2);

    let mut generation = 0;
    let mut line = String::new();
    loop {
        render(automaton.current(), &mut out).context("failed to print grid")?;
        out.flush().context("failed to flush console")?;
        automaton.tick();
        generation += 1;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read console input")?;
        if read == 0 || line.starts_with('q') {
            break;
        }
    }
    debug!("Console loop finished after {} generations", generation);
    Ok(generation)
}
