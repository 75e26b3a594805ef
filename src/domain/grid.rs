use rand::Rng;

use super::{Cell, LifeError, Result};

/// Default probability of a cell being alive after a random fill.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Canonical row-major mapping shared by every component.
#[inline]
pub const fn index_of(x: usize, y: usize, cols: usize) -> usize {
    y * cols + x
}

/// Grid is a fixed-size, row-major buffer of byte cell states.
///
/// Dimensions never change for the lifetime of a value; resizing means
/// building a new grid. Core operations take `&Grid` and return a fresh
/// `Grid`, so a snapshot can be read by a renderer while the next one is
/// computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead.as_byte(); cols * rows],
        }
    }

    /// Build a grid from a raw buffer, checking its length and cell states.
    pub fn from_cells(cols: usize, rows: usize, cells: Vec<u8>) -> Result<Self> {
        if cells.len() != cols * rows {
            return Err(LifeError::InvalidBufferLength {
                expected: cols * rows,
                got: cells.len(),
            });
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > 1) {
            return Err(LifeError::InvalidCellState { index, value });
        }
        Ok(Self { cols, rows, cells })
    }

    /// Crate-internal constructor for buffers already known to be valid.
    pub(crate) fn from_raw(cols: usize, rows: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), cols * rows);
        Self { cols, rows, cells }
    }

    /// Fill a new grid where each cell is independently alive with
    /// probability `density`. The random source is supplied by the caller.
    pub fn random<R: Rng + ?Sized>(
        cols: usize,
        rows: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }
        let cells = (0..cols * rows)
            .map(|_| Cell::from_alive(rng.random::<f64>() < density).as_byte())
            .collect();
        Ok(Self { cols, rows, cells })
    }

    /// Random fill using the thread-local generator and the default density.
    pub fn random_default(cols: usize, rows: usize) -> Result<Self> {
        Self::random(cols, rows, DEFAULT_DENSITY, &mut rand::rng())
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Get grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of cells, always cols * rows
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw row-major buffer
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.cols && y < self.rows)
            .then(|| Cell::from_byte(self.cells[index_of(x, y, self.cols)]))
    }

    /// Out-of-range positions read as dead
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows && self.cells[index_of(x, y, self.cols)] != 0
    }

    /// Fails with `DimensionMismatch` unless `other` has the same shape.
    pub fn ensure_same_dimensions(&self, other: (usize, usize)) -> Result<()> {
        if self.dimensions() == other {
            Ok(())
        } else {
            Err(LifeError::DimensionMismatch {
                expected: self.dimensions(),
                got: other,
            })
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &b)| (i % cols, i / cols, Cell::from_byte(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.len(), 21);
        assert_eq!(grid.dimensions(), (7, 3));
        assert!(grid.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(index_of(0, 0, 5), 0);
        assert_eq!(index_of(4, 0, 5), 4);
        assert_eq!(index_of(0, 1, 5), 5);
        assert_eq!(index_of(3, 2, 5), 13);
    }

    #[test]
    fn test_from_cells_validates() {
        assert!(Grid::from_cells(2, 2, vec![0, 1, 1, 0]).is_ok());
        assert_eq!(
            Grid::from_cells(2, 2, vec![0, 1, 1]),
            Err(LifeError::InvalidBufferLength { expected: 4, got: 3 })
        );
        assert_eq!(
            Grid::from_cells(2, 2, vec![0, 1, 2, 0]),
            Err(LifeError::InvalidCellState { index: 2, value: 2 })
        );
    }

    #[test]
    fn test_get_bounds() {
        let grid = Grid::from_cells(3, 2, vec![0, 0, 1, 0, 0, 0]).unwrap();
        assert_eq!(grid.get(2, 0), Some(Cell::Alive));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(grid.is_alive(2, 0));
        assert!(!grid.is_alive(10, 10));
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty = Grid::random(10, 10, 0.0, &mut rng).unwrap();
        assert!(empty.cells().iter().all(|&c| c == 0));

        let full = Grid::random(10, 10, 1.0, &mut rng).unwrap();
        assert!(full.cells().iter().all(|&c| c == 1));
    }

    #[test]
    fn test_random_is_reproducible_with_seeded_source() {
        let a = Grid::random(16, 16, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(16, 16, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert!(a.cells().iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_random_default_fills_valid_grid() {
        let grid = Grid::random_default(12, 5).unwrap();
        assert_eq!(grid.dimensions(), (12, 5));
        assert!(grid.cells().iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_random_rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(4, 4, 1.5, &mut rng),
            Err(LifeError::InvalidDensity(1.5))
        );
        assert!(Grid::random(4, 4, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_iter_cells_positions() {
        let grid = Grid::from_cells(2, 2, vec![0, 1, 0, 0]).unwrap();
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(1, 0)]);
    }
}
