//! Randomized depth-first maze carving
//!
//! Equivalent to the recursive backtracker:
//!
//! ```text
//! visit(cell):
//!     if visited: return
//!     mark visited
//!     for dir in shuffle([up, right, down, left]):
//!         if neighbor in bounds and not visited:
//!             open edge, visit(neighbor)
//! ```
//!
//! but driven by an explicit stack so large grids cannot overflow the call
//! stack. Each frame shuffles its directions at the moment the cell is
//! entered, so the RNG is consumed in exactly the same order as the
//! recursive form and a seed yields the same maze either way.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, EdgeGrids, Grid};
use super::shuffle::shuffle;
use crate::error::MazeError;

/// One pending cell on the carving stack
struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

/// Mark `cell` visited and push its frame with freshly shuffled directions
fn enter<R: Rng>(
    grid: &mut Grid,
    stack: &mut Vec<Frame>,
    cell: Cell,
    rng: &mut R,
) -> Result<(), MazeError> {
    grid.mark_visited(cell)?;
    let mut directions = Direction::ALL;
    shuffle(&mut directions, rng);
    stack.push(Frame {
        cell,
        directions,
        next: 0,
    });
    Ok(())
}

/// Carve a spanning tree into `grid`, starting at `start`
pub fn carve<R: Rng>(grid: &mut Grid, start: Cell, rng: &mut R) -> Result<(), MazeError> {
    if grid.is_visited(start)? {
        return Ok(());
    }

    let mut stack = Vec::with_capacity(grid.rows() * grid.cols());
    enter(grid, &mut stack, start, rng)?;

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let current = frame.cell;

        let Some(next) = grid.neighbor(current, direction) else {
            continue;
        };
        if grid.is_visited(next)? {
            continue;
        }

        grid.open_edge(current, next)?;
        enter(grid, &mut stack, next, rng)?;
    }

    log::debug!(
        "Carved {}x{} maze from {}: {} open edges",
        grid.rows(),
        grid.cols(),
        start,
        grid.open_edge_count()
    );
    Ok(())
}

/// Grid dimensions for generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
}

/// A finished maze: the carved edges and where carving began
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    pub start: Cell,
    pub edges: EdgeGrids,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.edges.rows
    }

    pub fn cols(&self) -> usize {
        self.edges.cols
    }
}

/// Generate a maze from a random start cell.
///
/// The start row is drawn before the start column. On error the partially
/// carved grid is dropped and nothing is returned.
pub fn generate<R: Rng>(config: MazeConfig, rng: &mut R) -> Result<Maze, MazeError> {
    let mut grid = Grid::new(config.rows, config.cols)?;
    let start = Cell::new(
        rng.random_range(0..config.rows),
        rng.random_range(0..config.cols),
    );
    carve(&mut grid, start, rng)?;
    Ok(Maze {
        start,
        edges: grid.into_edges(),
    })
}
