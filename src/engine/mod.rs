//! Engine seam
//!
//! The maze core never touches a physics engine directly. A host implements
//! [`PhysicsEngine`] for whatever engine it runs, hands it to
//! [`MazeWorld::build`], and forwards collision and key events to the world.

pub mod headless;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use glam::Vec2;

use crate::sim::{
    BodyLabel, InputDirection, MazeLayout, RectSpec, StyleHints, UnlockEffects, WorldState,
};

pub use headless::{BodyHandle, HeadlessEngine};

/// The subset of a physics/render engine the maze needs
pub trait PhysicsEngine {
    type Handle: Copy + Eq + Hash + Debug;

    fn create_static_rectangle(
        &mut self,
        center: Vec2,
        size: Vec2,
        label: BodyLabel,
        style: StyleHints,
    ) -> Self::Handle;

    fn create_dynamic_circle(&mut self, center: Vec2, radius: f32, label: BodyLabel)
    -> Self::Handle;

    fn velocity(&self, handle: Self::Handle) -> Vec2;

    fn set_velocity(&mut self, handle: Self::Handle, velocity: Vec2);

    fn set_static(&mut self, handle: Self::Handle, is_static: bool);

    fn set_gravity(&mut self, gravity: Vec2);

    /// Advance simulation and rendering by `dt` seconds
    fn step(&mut self, dt: f32);
}

/// A maze installed in an engine, plus its lock state
#[derive(Debug)]
pub struct MazeWorld<H> {
    state: WorldState,
    unlock_gravity: Vec2,
    labels: HashMap<H, BodyLabel>,
    walls: Vec<H>,
    ball: H,
    goal: H,
}

impl<H: Copy + Eq + Hash + Debug> MazeWorld<H> {
    /// Create every body of `layout` in `engine`.
    ///
    /// Gravity is switched off until the world unlocks.
    pub fn build<E>(engine: &mut E, layout: &MazeLayout, unlock_gravity: Vec2) -> Self
    where
        E: PhysicsEngine<Handle = H>,
    {
        engine.set_gravity(Vec2::ZERO);

        let mut labels = HashMap::new();
        let mut add_rect = |engine: &mut E, rect: &RectSpec| {
            let handle =
                engine.create_static_rectangle(rect.center, rect.size, rect.label, rect.label.style());
            labels.insert(handle, rect.label);
            handle
        };

        for boundary in &layout.boundaries {
            add_rect(engine, boundary);
        }
        let walls: Vec<H> = layout
            .walls
            .iter()
            .map(|wall| add_rect(engine, wall))
            .collect();
        let goal = add_rect(engine, &layout.goal);

        let ball = engine.create_dynamic_circle(layout.ball.center, layout.ball.radius, BodyLabel::Ball);
        labels.insert(ball, BodyLabel::Ball);

        log::info!(
            "Maze world built: {} walls, goal at ({:.1}, {:.1})",
            walls.len(),
            layout.goal.center.x,
            layout.goal.center.y
        );

        Self {
            state: WorldState::Locked,
            unlock_gravity,
            labels,
            walls,
            ball,
            goal,
        }
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn walls(&self) -> &[H] {
        &self.walls
    }

    pub fn ball(&self) -> H {
        self.ball
    }

    pub fn goal(&self) -> H {
        self.goal
    }

    pub fn label_of(&self, handle: H) -> Option<BodyLabel> {
        self.labels.get(&handle).copied()
    }

    /// Handle a batch of collision-start pairs from the engine.
    ///
    /// Returns true if this batch unlocked the world.
    pub fn on_collision_start<E>(&mut self, engine: &mut E, pairs: &[(H, H)]) -> bool
    where
        E: PhysicsEngine<Handle = H>,
    {
        let mut unlocked = false;
        for &(a, b) in pairs {
            let (Some(label_a), Some(label_b)) = (self.label_of(a), self.label_of(b)) else {
                log::warn!("Collision with unknown body: {:?} / {:?}", a, b);
                continue;
            };

            log::debug!("Collision start: {} / {}", label_a, label_b);
            let (next, effects) = self.state.transition((label_a, label_b), self.unlock_gravity);
            self.state = next;
            if let Some(effects) = effects {
                self.apply_unlock(engine, effects);
                unlocked = true;
            }
        }
        unlocked
    }

    fn apply_unlock<E>(&self, engine: &mut E, effects: UnlockEffects)
    where
        E: PhysicsEngine<Handle = H>,
    {
        engine.set_gravity(effects.gravity);
        if effects.release_walls {
            for &wall in &self.walls {
                engine.set_static(wall, false);
            }
        }
        log::info!("Goal reached! {} walls released", self.walls.len());
    }

    /// Nudge the ball in response to a key press
    pub fn on_input<E>(&self, engine: &mut E, direction: InputDirection)
    where
        E: PhysicsEngine<Handle = H>,
    {
        let velocity = engine.velocity(self.ball);
        engine.set_velocity(self.ball, direction.apply(velocity));
    }
}
