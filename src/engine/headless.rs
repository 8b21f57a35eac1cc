//! In-memory engine with no collision response
//!
//! Keeps a body table, applies gravity and velocity to dynamic bodies with a
//! fixed-step Euler update, and reports when a circle starts overlapping a
//! rectangle. Bodies pass through each other. The binary uses it to run a
//! world without a window; tests use it to observe what `MazeWorld` does.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::PhysicsEngine;
use crate::sim::{BodyLabel, StyleHints};

/// Index into the headless body table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub label: BodyLabel,
    pub shape: Shape,
    pub pos: Vec2,
    pub vel: Vec2,
    pub is_static: bool,
    pub style: StyleHints,
}

impl Body {
    /// Circle against axis-aligned rectangle, touching edges excluded
    fn overlaps(&self, other: &Body) -> bool {
        let (Shape::Circle { radius }, Shape::Rect { size }) = (self.shape, other.shape) else {
            return false;
        };
        let half = size / 2.0;
        let closest = self.pos.clamp(other.pos - half, other.pos + half);
        self.pos.distance_squared(closest) < radius * radius
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadlessEngine {
    pub bodies: Vec<Body>,
    pub gravity: Vec2,
    /// Simulated seconds
    pub time: f32,
    /// Circle/rect pairs overlapping at the last `collision_starts` call
    #[serde(skip)]
    touching: HashSet<(BodyHandle, BodyHandle)>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0 as usize)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0 as usize)
    }

    fn insert(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(body);
        handle
    }

    /// Count bodies with `label`
    pub fn count(&self, label: BodyLabel) -> usize {
        self.bodies.iter().filter(|b| b.label == label).count()
    }

    /// (circle, rect) pairs that overlap now but did not at the previous call.
    ///
    /// Pairs come out in body order. A pair that stays overlapping is
    /// reported once; it is reported again only after separating.
    pub fn collision_starts(&mut self) -> Vec<(BodyHandle, BodyHandle)> {
        let mut now = HashSet::new();
        let mut started = Vec::new();

        for (i, circle) in self.bodies.iter().enumerate() {
            if !matches!(circle.shape, Shape::Circle { .. }) {
                continue;
            }
            for (j, rect) in self.bodies.iter().enumerate() {
                if !circle.overlaps(rect) {
                    continue;
                }
                let pair = (BodyHandle(i as u32), BodyHandle(j as u32));
                if !self.touching.contains(&pair) {
                    started.push(pair);
                }
                now.insert(pair);
            }
        }

        self.touching = now;
        started
    }
}

impl PhysicsEngine for HeadlessEngine {
    type Handle = BodyHandle;

    fn create_static_rectangle(
        &mut self,
        center: Vec2,
        size: Vec2,
        label: BodyLabel,
        style: StyleHints,
    ) -> BodyHandle {
        self.insert(Body {
            label,
            shape: Shape::Rect { size },
            pos: center,
            vel: Vec2::ZERO,
            is_static: true,
            style,
        })
    }

    fn create_dynamic_circle(&mut self, center: Vec2, radius: f32, label: BodyLabel) -> BodyHandle {
        self.insert(Body {
            label,
            shape: Shape::Circle { radius },
            pos: center,
            vel: Vec2::ZERO,
            is_static: false,
            style: label.style(),
        })
    }

    fn velocity(&self, handle: BodyHandle) -> Vec2 {
        self.body(handle).map_or(Vec2::ZERO, |b| b.vel)
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        match self.body_mut(handle) {
            Some(body) => body.vel = velocity,
            None => log::warn!("set_velocity on unknown body {:?}", handle),
        }
    }

    fn set_static(&mut self, handle: BodyHandle, is_static: bool) {
        match self.body_mut(handle) {
            Some(body) => {
                body.is_static = is_static;
                if is_static {
                    body.vel = Vec2::ZERO;
                }
            }
            None => log::warn!("set_static on unknown body {:?}", handle),
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn step(&mut self, dt: f32) {
        let gravity = self.gravity;
        for body in self.bodies.iter_mut().filter(|b| !b.is_static) {
            body.vel += gravity * dt;
            body.pos += body.vel * dt;
        }
        self.time += dt;
    }
}
