use super::{EdgePolicy, Grid};

/// Offsets of the Moore neighborhood, excluding the cell itself.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Count live cells among the 8 Moore neighbors of (x, y).
///
/// Under `Wrap` every offset resolves to a cell, so no cell is ever short of
/// neighbors. Under `Bounded` offsets that leave the grid contribute nothing.
/// This is the only place where the two topologies diverge.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize, edges: EdgePolicy) -> u8 {
    let (cols, rows) = grid.dimensions();
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| edges.resolve(x as isize + dx, y as isize + dy, cols, rows))
        .filter(|&(nx, ny)| grid.is_alive(nx, ny))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::index_of;

    fn grid_with(cols: usize, rows: usize, alive: &[(usize, usize)]) -> Grid {
        let mut cells = vec![0u8; cols * rows];
        for &(x, y) in alive {
            cells[index_of(x, y, cols)] = 1;
        }
        Grid::from_cells(cols, rows, cells).unwrap()
    }

    #[test]
    fn test_blinker_counts() {
        let grid = grid_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);
        assert_eq!(count_live_neighbors(&grid, 5, 5, EdgePolicy::Wrap), 2);
        assert_eq!(count_live_neighbors(&grid, 5, 4, EdgePolicy::Wrap), 3);
        assert_eq!(count_live_neighbors(&grid, 5, 6, EdgePolicy::Bounded), 3);
    }

    #[test]
    fn test_cell_itself_is_excluded() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&grid, 1, 1, EdgePolicy::Bounded), 0);
    }

    #[test]
    fn test_corner_sees_opposite_corner_only_when_wrapping() {
        let n = 6;
        let grid = grid_with(n, n, &[(0, 0), (n - 1, n - 1)]);
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Wrap), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Bounded), 0);
    }

    #[test]
    fn test_full_grid_counts() {
        let cells = vec![1u8; 25];
        let grid = Grid::from_cells(5, 5, cells).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Wrap), 8);
        assert_eq!(count_live_neighbors(&grid, 0, 0, EdgePolicy::Bounded), 3);
        assert_eq!(count_live_neighbors(&grid, 2, 0, EdgePolicy::Bounded), 5);
        assert_eq!(count_live_neighbors(&grid, 2, 2, EdgePolicy::Bounded), 8);
    }
}
