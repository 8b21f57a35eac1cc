//! Directional input
//!
//! Each key press nudges the ball's velocity by a fixed step on one axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Velocity change per key press
pub const VELOCITY_STEP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputDirection {
    Up,
    Right,
    Down,
    Left,
}

impl InputDirection {
    /// Map a key name to a direction (WASD or arrow names, case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "up" | "arrowup" => Some(InputDirection::Up),
            "d" | "right" | "arrowright" => Some(InputDirection::Right),
            "s" | "down" | "arrowdown" => Some(InputDirection::Down),
            "a" | "left" | "arrowleft" => Some(InputDirection::Left),
            _ => None,
        }
    }

    pub fn velocity_delta(&self) -> Vec2 {
        match self {
            InputDirection::Up => Vec2::new(0.0, -VELOCITY_STEP),
            InputDirection::Right => Vec2::new(VELOCITY_STEP, 0.0),
            InputDirection::Down => Vec2::new(0.0, VELOCITY_STEP),
            InputDirection::Left => Vec2::new(-VELOCITY_STEP, 0.0),
        }
    }

    /// New velocity after this key press
    #[inline]
    pub fn apply(&self, velocity: Vec2) -> Vec2 {
        velocity + self.velocity_delta()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(InputDirection::from_key("W"), Some(InputDirection::Up));
        assert_eq!(InputDirection::from_key("a"), Some(InputDirection::Left));
        assert_eq!(InputDirection::from_key("ArrowDown"), Some(InputDirection::Down));
        assert_eq!(InputDirection::from_key("right"), Some(InputDirection::Right));
        assert_eq!(InputDirection::from_key("q"), None);
    }

    #[test]
    fn test_apply_accumulates() {
        let mut vel = Vec2::ZERO;
        vel = InputDirection::Right.apply(vel);
        vel = InputDirection::Right.apply(vel);
        vel = InputDirection::Up.apply(vel);
        assert_eq!(vel, Vec2::new(10.0, -5.0));
        vel = InputDirection::Left.apply(vel);
        vel = InputDirection::Down.apply(vel);
        assert_eq!(vel, Vec2::new(5.0, 0.0));
    }
}
