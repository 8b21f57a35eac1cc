//! Maze geometry in world coordinates
//!
//! Turns carved edge grids into body specs for the engine. World space has
//! its origin at the top-left corner with y growing downward. Every closed
//! interior edge becomes one thin wall spanning a single cell side.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, EdgeGrids};
use crate::error::MazeError;

/// Body label used by the engine and the win check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyLabel {
    Wall,
    Goal,
    Ball,
    /// Outer frame; never collapses
    Boundary,
}

impl BodyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyLabel::Wall => "wall",
            BodyLabel::Goal => "goal",
            BodyLabel::Ball => "ball",
            BodyLabel::Boundary => "boundary",
        }
    }
}

impl fmt::Display for BodyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering hints passed through to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHints {
    /// 0xRRGGBB
    pub fill_color: u32,
}

pub const WALL_COLOR: u32 = 0xFF0000;
pub const GOAL_COLOR: u32 = 0x00FF00;
pub const BOUNDARY_COLOR: u32 = 0x808080;
pub const BALL_COLOR: u32 = 0xFFFFFF;

impl BodyLabel {
    pub fn style(&self) -> StyleHints {
        let fill_color = match self {
            BodyLabel::Wall => WALL_COLOR,
            BodyLabel::Goal => GOAL_COLOR,
            BodyLabel::Boundary => BOUNDARY_COLOR,
            BodyLabel::Ball => BALL_COLOR,
        };
        StyleHints { fill_color }
    }
}

/// World size and wall thickness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldDims {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

impl WorldDims {
    pub fn validate(&self) -> Result<(), MazeError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !(ok(self.width) && ok(self.height)) {
            return Err(MazeError::InvalidWorldSize {
                width: self.width,
                height: self.height,
            });
        }
        if !ok(self.wall_thickness) {
            return Err(MazeError::InvalidWallThickness {
                thickness: self.wall_thickness,
            });
        }
        Ok(())
    }
}

/// A static rectangle, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub center: Vec2,
    pub size: Vec2,
    pub label: BodyLabel,
}

/// The dynamic ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything the engine needs to build the maze world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeLayout {
    pub cell_size: Vec2,
    /// Interior walls, horizontal ones first (row-major), then vertical
    pub walls: Vec<RectSpec>,
    /// Top, bottom, left, right
    pub boundaries: [RectSpec; 4],
    pub goal: RectSpec,
    pub ball: BallSpec,
}

impl MazeLayout {
    /// Center of a cell in world coordinates
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.col as f32 + 0.5) * self.cell_size.x,
            (cell.row as f32 + 0.5) * self.cell_size.y,
        )
    }
}

/// Build the layout for a carved maze
pub fn emit(edges: &EdgeGrids, dims: &WorldDims) -> Result<MazeLayout, MazeError> {
    edges.validate()?;
    dims.validate()?;

    let unit = Vec2::new(
        dims.width / edges.cols as f32,
        dims.height / edges.rows as f32,
    );
    let thickness = dims.wall_thickness;

    let mut walls = Vec::with_capacity(edges.edge_positions() - edges.open_count());

    for (row, line) in edges.horizontal.iter().enumerate() {
        for (col, &open) in line.iter().enumerate() {
            if open {
                continue;
            }
            walls.push(RectSpec {
                center: Vec2::new(
                    col as f32 * unit.x + unit.x / 2.0,
                    row as f32 * unit.y + unit.y,
                ),
                size: Vec2::new(unit.x, thickness),
                label: BodyLabel::Wall,
            });
        }
    }

    for (row, line) in edges.vertical.iter().enumerate() {
        for (col, &open) in line.iter().enumerate() {
            if open {
                continue;
            }
            walls.push(RectSpec {
                center: Vec2::new(
                    col as f32 * unit.x + unit.x,
                    row as f32 * unit.y + unit.y / 2.0,
                ),
                size: Vec2::new(thickness, unit.y),
                label: BodyLabel::Wall,
            });
        }
    }

    let (w, h) = (dims.width, dims.height);
    let frame = |center: Vec2, size: Vec2| RectSpec {
        center,
        size,
        label: BodyLabel::Boundary,
    };
    let boundaries = [
        frame(Vec2::new(w / 2.0, 0.0), Vec2::new(w, thickness)),
        frame(Vec2::new(w / 2.0, h), Vec2::new(w, thickness)),
        frame(Vec2::new(0.0, h / 2.0), Vec2::new(thickness, h)),
        frame(Vec2::new(w, h / 2.0), Vec2::new(thickness, h)),
    ];

    let goal = RectSpec {
        center: Vec2::new(w - unit.x / 2.0, h - unit.y / 2.0),
        size: unit * 0.5,
        label: BodyLabel::Goal,
    };

    let ball = BallSpec {
        center: unit / 2.0,
        radius: unit.min_element() / 4.0,
    };

    log::debug!(
        "Emitted {} walls for {}x{} maze (cell {:.1}x{:.1})",
        walls.len(),
        edges.rows,
        edges.cols,
        unit.x,
        unit.y
    );

    Ok(MazeLayout {
        cell_size: unit,
        walls,
        boundaries,
        goal,
        ball,
    })
}
