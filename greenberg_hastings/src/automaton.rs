// automaton.rs - Double-buffered Greenberg-Hastings engine

use crate::grid::{self, CellState, Direction, TGrid, EMPTY_GRID, EXCITED, RESTING};

/// Owns the two grids of the automaton.
///
/// `current` is the authoritative state that renderers read and input writes.
/// `previous` is the snapshot that `step` evaluates the rules against, so that
/// every cell in a tick observes the same prior state.
#[derive(Clone)]
pub struct Automaton {
    current: TGrid,
    previous: TGrid,
}

impl Default for Automaton {
    fn default() -> Self {
        Self {
            current: EMPTY_GRID,
            previous: EMPTY_GRID,
        }
    }
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_grid(grid: TGrid) -> Self {
        Self {
            current: grid,
            previous: EMPTY_GRID,
        }
    }

    /// Sets every cell of the current grid to resting. Leaves the snapshot alone.
    pub fn initialize(&mut self) {
        self.current = EMPTY_GRID;
    }

    /// Copies the current grid into the snapshot.
    pub fn snapshot(&mut self) {
        self.previous = self.current;
    }

    /// Applies the rules to every cell, reading the snapshot and writing the
    /// current grid.
    pub fn step(&mut self) {
        for y in 0..grid::HEIGHT {
            for x in 0..grid::WIDTH {
                let old = self.previous[y][x];
                self.current[y][x] = if old == RESTING {
                    if self.excited_neighbors(x, y) > 0 {
                        EXCITED
                    } else {
                        RESTING
                    }
                } else {
                    old - 1
                };
            }
        }
    }

    /// One full generation: snapshot, then step.
    pub fn tick(&mut self) {
        self.snapshot();
        self.step();
    }

    /// State of the neighbor of `(x, y)` in `direction`, read from the
    /// snapshot. Anything off the grid is resting.
    pub fn neighbor_state(&self, x: usize, y: usize, direction: Direction) -> u8 {
        let (dx, dy) = direction.offset();
        match grid::in_bounds(x as isize + dx, y as isize + dy) {
            Some((nx, ny)) => self.previous[ny][nx],
            None => RESTING,
        }
    }

    pub fn excited_neighbors(&self, x: usize, y: usize) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.neighbor_state(x, y, dir) == EXCITED)
            .count()
    }

    /// Forces a cell of the current grid to excited.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid; callers validate coordinates.
    pub fn excite(&mut self, x: usize, y: usize) {
        self.current[y][x] = EXCITED;
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.current.get(y)?.get(x).copied()
    }

    pub fn state(&self, x: usize, y: usize) -> Option<CellState> {
        self.get(x, y).map(CellState::from_value)
    }

    pub fn current(&self) -> &TGrid {
        &self.current
    }

    #[cfg(test)]
    pub fn previous(&self) -> &TGrid {
        &self.previous
    }

    /// Number of cells in the current grid with the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.current
            .iter()
            .flatten()
            .filter(|&&value| CellState::from_value(value) == state)
            .count()
    }
}
