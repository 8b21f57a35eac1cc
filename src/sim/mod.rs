//! Deterministic maze core
//!
//! Everything here is a pure function of its inputs:
//! - Seeded RNG only
//! - No engine, rendering or platform dependencies
//! - Generation finishes before any geometry leaves this module

pub mod carve;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod shuffle;
pub mod state;

pub use carve::{Maze, MazeConfig, carve, generate};
pub use geometry::{
    BallSpec, BodyLabel, MazeLayout, RectSpec, StyleHints, WorldDims, emit,
};
pub use grid::{Cell, Direction, EdgeGrids, Grid};
pub use input::{InputDirection, VELOCITY_STEP};
pub use shuffle::shuffle;
pub use state::{UNLOCK_GRAVITY, UnlockEffects, WorldState, is_win_pair};
