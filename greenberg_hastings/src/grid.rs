// grid.rs - Grid types for the Greenberg-Hastings automaton

// Compile-time grid size configuration
pub const WIDTH: usize = 70;
pub const HEIGHT: usize = 70;

// Raw cell values stored in the grids
pub const RESTING: u8 = 0;
#[cfg(test)]
pub const RECOVERING: u8 = 1;
pub const EXCITED: u8 = 2;

pub type TRow = [u8; WIDTH];
pub type TGrid = [TRow; HEIGHT];

pub const EMPTY_GRID: TGrid = [[RESTING; WIDTH]; HEIGHT];

/// Logical phase of a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellState {
    Resting,
    Recovering,
    Excited,
}

impl CellState {
    /// Classifies a raw cell value. Any non-zero value other than `EXCITED`
    /// is still counting down and therefore recovering.
    pub fn from_value(value: u8) -> Self {
        match value {
            RESTING => CellState::Resting,
            EXCITED => CellState::Excited,
            _ => CellState::Recovering,
        }
    }

    #[cfg(test)]
    pub fn value(self) -> u8 {
        match self {
            CellState::Resting => RESTING,
            CellState::Recovering => RECOVERING,
            CellState::Excited => EXCITED,
        }
    }

    /// Character used by the console renderer.
    pub fn glyph(self) -> char {
        match self {
            CellState::Resting => ' ',
            CellState::Recovering => 'x',
            CellState::Excited => 'o',
        }
    }
}

/// Von Neumann neighborhood directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// `(dx, dy)` offset, with y growing downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}

/// Returns `(x, y)` as grid indices if it lies inside the grid.
pub fn in_bounds(x: isize, y: isize) -> Option<(usize, usize)> {
    if x < 0 || y < 0 || x >= WIDTH as isize || y >= HEIGHT as isize {
        return None;
    }
    Some((x as usize, y as usize))
}
