//! World lock state and the win transition
//!
//! The world starts `Locked`. The first collision between the ball and the
//! goal unlocks it: gravity switches on and every wall becomes dynamic so the
//! maze collapses. The transition is pure so it can be tested without an
//! engine; `MazeWorld` applies the returned effects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::BodyLabel;

/// Default gravity applied on unlock (y grows downward)
pub const UNLOCK_GRAVITY: Vec2 = Vec2::new(0.0, 1.0);

/// Current phase of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorldState {
    /// Exploring the maze, walls fixed, no gravity
    #[default]
    Locked,
    /// Goal reached (terminal)
    Unlocked,
}

/// Side effects to apply exactly once when the world unlocks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnlockEffects {
    pub gravity: Vec2,
    /// Switch every wall from static to dynamic
    pub release_walls: bool,
}

/// True if the pair is exactly {ball, goal}, in either order
pub fn is_win_pair(a: BodyLabel, b: BodyLabel) -> bool {
    matches!(
        (a, b),
        (BodyLabel::Ball, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Ball)
    )
}

impl WorldState {
    /// Advance on a collision between bodies labelled `a` and `b`.
    ///
    /// Effects are returned only on the `Locked -> Unlocked` edge.
    pub fn transition(
        self,
        (a, b): (BodyLabel, BodyLabel),
        gravity: Vec2,
    ) -> (WorldState, Option<UnlockEffects>) {
        match self {
            WorldState::Locked if is_win_pair(a, b) => (
                WorldState::Unlocked,
                Some(UnlockEffects {
                    gravity,
                    release_walls: true,
                }),
            ),
            state => (state, None),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        *self == WorldState::Unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_goal_unlocks() {
        let (state, effects) =
            WorldState::Locked.transition((BodyLabel::Ball, BodyLabel::Goal), UNLOCK_GRAVITY);
        assert_eq!(state, WorldState::Unlocked);
        let effects = effects.unwrap();
        assert!(effects.release_walls);
        assert!(effects.gravity.y > 0.0);
    }

    #[test]
    fn test_order_independent() {
        let (state, effects) =
            WorldState::Locked.transition((BodyLabel::Goal, BodyLabel::Ball), UNLOCK_GRAVITY);
        assert!(state.is_unlocked());
        assert!(effects.is_some());
    }

    #[test]
    fn test_other_pairs_ignored() {
        let pairs = [
            (BodyLabel::Ball, BodyLabel::Wall),
            (BodyLabel::Goal, BodyLabel::Wall),
            (BodyLabel::Ball, BodyLabel::Boundary),
            (BodyLabel::Ball, BodyLabel::Ball),
            (BodyLabel::Goal, BodyLabel::Goal),
        ];
        for pair in pairs {
            let (state, effects) = WorldState::Locked.transition(pair, UNLOCK_GRAVITY);
            assert_eq!(state, WorldState::Locked, "{pair:?}");
            assert!(effects.is_none());
        }
    }

    #[test]
    fn test_unlocked_is_terminal() {
        let (state, effects) =
            WorldState::Unlocked.transition((BodyLabel::Ball, BodyLabel::Goal), UNLOCK_GRAVITY);
        assert_eq!(state, WorldState::Unlocked);
        assert!(effects.is_none());
    }
}
