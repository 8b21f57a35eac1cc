//! Maze Drop - a perfect maze with a ball, a goal and collapsing walls
//!
//! Core modules:
//! - `sim`: Deterministic maze generation, geometry and win state
//! - `engine`: Physics engine seam and the world adapter
//! - `settings`: JSON configuration

pub mod engine;
pub mod error;
pub mod settings;
pub mod sim;

pub use engine::{MazeWorld, PhysicsEngine};
pub use error::{MazeError, SettingsError};
pub use settings::Settings;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use sim::{Maze, MazeLayout};

/// Game configuration constants
pub mod consts {
    /// Fixed step for the engine loop (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}

/// Generate a maze and its layout from settings and a seed.
///
/// Fails before any geometry exists if the settings are unusable.
pub fn build_maze(settings: &Settings, seed: u64) -> Result<(Maze, MazeLayout), MazeError> {
    settings.validate()?;
    let mut rng = Pcg32::seed_from_u64(seed);
    let maze = sim::generate(settings.maze_config(), &mut rng)?;
    let layout = sim::emit(&maze.edges, &settings.world_dims())?;
    log::info!(
        "Generated {}x{} maze (seed {}, start {})",
        maze.rows(),
        maze.cols(),
        seed,
        maze.start
    );
    Ok((maze, layout))
}
