use super::{Cell, LifeRng};
use rayon::prelude::*;

/// Offsets of the 8 Moore-neighborhood cells around a coordinate.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Universe is the square toroidal grid of cells.
/// Evolution is functional: advancing produces a new universe, so every
/// next state is decided from a fully consistent previous generation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Universe {
    size: usize,
    cells: Vec<Cell>,
}

impl Universe {
    /// Create a new universe with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Side length of the square grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors under toroidal wrapping: index -1 lands on
    /// size-1 and index size lands on 0, so edge cells see the opposite
    /// edge as adjacent.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let n = self.size as i64;

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = ((x as i64 + dx) % n + n) % n;
                let ny = ((y as i64 + dy) % n + n) % n;
                self.cells[self.index(nx as usize, ny as usize)].is_alive()
            })
            .count() as u8
    }

    /// Fresh live-neighbor counts for every cell, row-major.
    /// Recomputed from the current universe each generation and never
    /// kept across steps.
    pub fn neighbor_counts(&self) -> Vec<u8> {
        (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| self.live_neighbors(x, y))
            .collect()
    }

    /// Advance one generation (serial). Counts are taken for the whole
    /// universe before any cell is decided, so the rule applies
    /// simultaneously everywhere.
    pub fn advance(&self) -> Self {
        let counts = self.neighbor_counts();
        let cells = self
            .cells
            .iter()
            .zip(counts)
            .map(|(&cell, count)| cell.next(count))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Parallel advance using rayon, same result as `advance`.
    /// Worth it for grids larger than roughly 100x100.
    pub fn advance_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.size)
            .into_par_iter()
            .flat_map(|y| (0..self.size).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.index(x, y)];
                current.next(self.live_neighbors(x, y))
            })
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Randomize every cell independently (builder style), alive with the
    /// given probability
    pub fn randomize(mut self, rng: &mut LifeRng, alive_probability: f64) -> Self {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.alive(alive_probability) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when every cell is dead
    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    /// Iterate over the grid one row at a time, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}
