//! Grid model for maze carving
//!
//! A maze is a spanning tree over the implicit grid graph. The grid tracks:
//! - which cells the carver has reached (`visited`, only needed while carving)
//! - which horizontal edges are open (between `(r, c)` and `(r + 1, c)`)
//! - which vertical edges are open (between `(r, c)` and `(r, c + 1)`)
//!
//! Every edge starts closed (a wall). Carving only ever opens edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// A grid cell addressed by row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four grid directions, in the order candidates are built before shuffling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row delta, col delta)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Open/closed state of every interior edge, with no carving bookkeeping.
///
/// `horizontal` is `(rows - 1) x cols`, `vertical` is `rows x (cols - 1)`.
/// `true` means open (no wall).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeGrids {
    pub rows: usize,
    pub cols: usize,
    pub horizontal: Vec<Vec<bool>>,
    pub vertical: Vec<Vec<bool>>,
}

impl EdgeGrids {
    /// All edges closed
    pub fn closed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            horizontal: vec![vec![false; cols]; rows.saturating_sub(1)],
            vertical: vec![vec![false; cols.saturating_sub(1)]; rows],
        }
    }

    /// Check that both grids have the shape implied by `rows` and `cols`
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        check_shape("horizontal", &self.horizontal, self.rows - 1, self.cols)?;
        check_shape("vertical", &self.vertical, self.rows, self.cols - 1)?;
        Ok(())
    }

    /// Whether the edge between two adjacent cells is open.
    /// Returns false for non-adjacent or out-of-range pairs.
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        match edge_slot(a, b) {
            Some(EdgeSlot::Horizontal(r, c)) => self
                .horizontal
                .get(r)
                .and_then(|row| row.get(c))
                .copied()
                .unwrap_or(false),
            Some(EdgeSlot::Vertical(r, c)) => self
                .vertical
                .get(r)
                .and_then(|row| row.get(c))
                .copied()
                .unwrap_or(false),
            None => false,
        }
    }

    /// Number of open edges across both grids
    pub fn open_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .flatten()
            .filter(|&&open| open)
            .count()
    }

    /// Number of interior edge positions (open or closed)
    pub fn edge_positions(&self) -> usize {
        self.rows.saturating_sub(1) * self.cols + self.rows * self.cols.saturating_sub(1)
    }
}

fn check_shape(
    which: &'static str,
    grid: &[Vec<bool>],
    want_rows: usize,
    want_cols: usize,
) -> Result<(), MazeError> {
    let mismatch = |got_cols| MazeError::DimensionMismatch {
        which,
        got_rows: grid.len(),
        got_cols,
        want_rows,
        want_cols,
    };
    if grid.len() != want_rows {
        return Err(mismatch(grid.first().map_or(0, Vec::len)));
    }
    if let Some(bad) = grid.iter().find(|row| row.len() != want_cols) {
        return Err(mismatch(bad.len()));
    }
    Ok(())
}

/// Draws the maze with `+`, `-` and `|`, one text row per grid line.
impl fmt::Display for EdgeGrids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Top border
        for _ in 0..self.cols {
            write!(f, "+---")?;
        }
        writeln!(f, "+")?;

        for r in 0..self.rows {
            write!(f, "|")?;
            for c in 0..self.cols {
                let open_right = self.is_open(Cell::new(r, c), Cell::new(r, c + 1));
                write!(f, "   {}", if open_right { ' ' } else { '|' })?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for c in 0..self.cols {
                let open_down = self.is_open(Cell::new(r, c), Cell::new(r + 1, c));
                write!(f, "{}+", if open_down { "   " } else { "---" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

enum EdgeSlot {
    Horizontal(usize, usize),
    Vertical(usize, usize),
}

/// Locate the edge entry between two cells, if they share a side
fn edge_slot(a: Cell, b: Cell) -> Option<EdgeSlot> {
    if a.col == b.col && a.row.abs_diff(b.row) == 1 {
        Some(EdgeSlot::Horizontal(a.row.min(b.row), a.col))
    } else if a.row == b.row && a.col.abs_diff(b.col) == 1 {
        Some(EdgeSlot::Vertical(a.row, a.col.min(b.col)))
    } else {
        None
    }
}

/// Carving grid: visitation state plus the edge grids being carved
#[derive(Debug, Clone)]
pub struct Grid {
    visited: Vec<Vec<bool>>,
    edges: EdgeGrids,
}

impl Grid {
    /// Create a grid with nothing visited and every wall present
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            visited: vec![vec![false; cols]; rows],
            edges: EdgeGrids::closed(rows, cols),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.edges.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.edges.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), MazeError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn is_visited(&self, cell: Cell) -> Result<bool, MazeError> {
        self.check_bounds(cell)?;
        Ok(self.visited[cell.row][cell.col])
    }

    pub fn mark_visited(&mut self, cell: Cell) -> Result<(), MazeError> {
        self.check_bounds(cell)?;
        self.visited[cell.row][cell.col] = true;
        Ok(())
    }

    /// Neighbor of `cell` in `direction`, or `None` if it would leave the grid
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Remove the wall between two adjacent cells
    pub fn open_edge(&mut self, from: Cell, to: Cell) -> Result<(), MazeError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        match edge_slot(from, to) {
            Some(EdgeSlot::Horizontal(r, c)) => self.edges.horizontal[r][c] = true,
            Some(EdgeSlot::Vertical(r, c)) => self.edges.vertical[r][c] = true,
            None => return Err(MazeError::NonAdjacentCells { from, to }),
        }
        Ok(())
    }

    pub fn open_edge_count(&self) -> usize {
        self.edges.open_count()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().flatten().filter(|&&v| v).count()
    }

    pub fn edges(&self) -> &EdgeGrids {
        &self.edges
    }

    /// Finish carving: drop visitation state, keep the edges
    pub fn into_edges(self) -> EdgeGrids {
        self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 3).unwrap_err(),
            MazeError::InvalidDimension { rows: 0, cols: 3 }
        );
        assert!(Grid::new(4, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_grid_shapes() {
        let grid = Grid::new(3, 5).unwrap();
        let edges = grid.edges();
        assert_eq!(edges.horizontal.len(), 2);
        assert!(edges.horizontal.iter().all(|r| r.len() == 5));
        assert_eq!(edges.vertical.len(), 3);
        assert!(edges.vertical.iter().all(|r| r.len() == 4));
        assert_eq!(grid.open_edge_count(), 0);
        assert_eq!(grid.visited_count(), 0);
        assert!(edges.validate().is_ok());
    }

    #[test]
    fn test_mark_visited() {
        let mut grid = Grid::new(2, 2).unwrap();
        let cell = Cell::new(1, 0);
        assert!(!grid.is_visited(cell).unwrap());
        grid.mark_visited(cell).unwrap();
        assert!(grid.is_visited(cell).unwrap());
        assert!(matches!(
            grid.mark_visited(Cell::new(2, 0)),
            Err(MazeError::OutOfBounds { row: 2, col: 0, .. })
        ));
    }

    #[test]
    fn test_open_edge_each_direction() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Cell::new(1, 1);

        grid.open_edge(center, Cell::new(0, 1)).unwrap(); // up
        assert!(grid.edges().horizontal[0][1]);

        grid.open_edge(center, Cell::new(2, 1)).unwrap(); // down
        assert!(grid.edges().horizontal[1][1]);

        grid.open_edge(center, Cell::new(1, 0)).unwrap(); // left
        assert!(grid.edges().vertical[1][0]);

        grid.open_edge(center, Cell::new(1, 2)).unwrap(); // right
        assert!(grid.edges().vertical[1][1]);

        assert_eq!(grid.open_edge_count(), 4);
        assert!(grid.edges().is_open(Cell::new(1, 2), center));
    }

    #[test]
    fn test_open_edge_rejects_non_adjacent() {
        let mut grid = Grid::new(3, 3).unwrap();
        let err = grid.open_edge(Cell::new(0, 0), Cell::new(1, 1)).unwrap_err();
        assert!(matches!(err, MazeError::NonAdjacentCells { .. }));
        assert!(grid.open_edge(Cell::new(0, 0), Cell::new(0, 0)).is_err());
        assert!(grid.open_edge(Cell::new(0, 0), Cell::new(0, 2)).is_err());
        assert_eq!(grid.open_edge_count(), 0);
    }

    #[test]
    fn test_neighbor_stays_in_bounds() {
        let grid = Grid::new(2, 3).unwrap();
        let corner = Cell::new(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::Up), None);
        assert_eq!(grid.neighbor(corner, Direction::Left), None);
        assert_eq!(grid.neighbor(corner, Direction::Right), Some(Cell::new(0, 1)));
        assert_eq!(grid.neighbor(corner, Direction::Down), Some(Cell::new(1, 0)));
        assert_eq!(grid.neighbor(Cell::new(1, 2), Direction::Down), None);
        assert_eq!(grid.neighbor(Cell::new(1, 2), Direction::Right), None);
    }

    #[test]
    fn test_validate_catches_mismatch() {
        let mut edges = EdgeGrids::closed(3, 3);
        edges.vertical[2].push(false);
        assert!(matches!(
            edges.validate(),
            Err(MazeError::DimensionMismatch { which: "vertical", .. })
        ));

        let mut edges = EdgeGrids::closed(3, 3);
        edges.horizontal.pop();
        assert!(matches!(
            edges.validate(),
            Err(MazeError::DimensionMismatch { which: "horizontal", .. })
        ));
    }

    #[test]
    fn test_display_single_cell() {
        let edges = EdgeGrids::closed(1, 1);
        assert_eq!(edges.to_string(), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn test_display_open_edge() {
        let mut edges = EdgeGrids::closed(1, 2);
        edges.vertical[0][0] = true;
        assert_eq!(edges.to_string(), "+---+---+\n|       |\n+---+---+\n");
    }
}
