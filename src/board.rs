use crate::GridError;

/// State of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// One generation of the field: a row-major `height x width` grid of cells.
///
/// Dimensions are fixed for the lifetime of the board; advancing the
/// simulation produces a fresh `Board` (see [`crate::next_generation`]) rather
/// than rewriting this one mid-step.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Board {
    /// Creates an all-dead board.
    pub fn empty(height: usize, width: usize) -> Self {
        assert!(height >= 1 && width >= 1);
        Self {
            cells: vec![Cell::Dead; height * width],
            height,
            width,
        }
    }

    /// Creates a board with every cell independently alive with probability
    /// `fill_rate`, drawn from `ChaCha8Rng` seeded with `seed`. The same seed
    /// always reproduces the same board; `None` seeds from entropy.
    pub fn random(height: usize, width: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        let mut board = Self::empty(height, width);
        board.randomize(seed, fill_rate);
        board
    }

    /// Reseeds every cell in place, same determinism contract as [`Board::random`].
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(fill_rate) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.height && col < self.width {
            Ok(col + row * self.width)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check_bounds(row, col).map(|i| self.cells[i])
    }

    /// Overwrites one cell. The board is unchanged on `OutOfBounds`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let i = self.check_bounds(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Flips one cell and returns its new state. Used for manual editing
    /// while the simulation is paused.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, GridError> {
        let i = self.check_bounds(row, col)?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    /// Unchecked accessor for the stepper, which iterates over known-valid
    /// indices.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[col + row * self.width]
    }

    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[col + row * self.width]
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}
