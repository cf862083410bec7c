//! Movement of the player through the arena.
//!
//! A frame turns the held directions into a unit direction, moves the player by
//! `speed * elapsed` along it, clamps the result to the arena and finally resolves collisions
//! with the obstacles. When the full move is blocked, the move along x alone is tried first and
//! the move along y alone second, so the player glides along an obstacle's edge instead of
//! stopping dead. If both are blocked the player stays where it is.
//!
//! The engine keeps no state between frames. The caller threads the returned position into the
//! next call.

use std::time::Duration;

use bevy::log::trace;
use nalgebra::Vector2;

use super::{HeldDirections, MovementConfig, Obstacle, ObstacleSnapshot, Position, Rectangle};

/// Which rule decided the outcome of a frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Resolution {
    /// No effective input; the position is returned untouched.
    Idle,
    /// The clamped candidate is free.
    Free,
    /// Only the x component of the move was applied.
    SlideX,
    /// Only the y component of the move was applied.
    SlideY,
    /// Both axes are blocked.
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Movement {
    pub position: Position,
    pub resolution: Resolution,
}

impl Movement {
    fn new(position: Position, resolution: Resolution) -> Self {
        Self {
            position,
            resolution,
        }
    }
}

/// New position of the player after `elapsed` time.
pub fn step(
    current: Position,
    held: HeldDirections,
    elapsed: Duration,
    config: &MovementConfig,
    obstacles: &ObstacleSnapshot,
) -> Position {
    resolve(current, held, elapsed, config, obstacles).position
}

/// Same as [`step`], but also reports which rule produced the position.
pub fn resolve(
    current: Position,
    held: HeldDirections,
    elapsed: Duration,
    config: &MovementConfig,
    obstacles: &ObstacleSnapshot,
) -> Movement {
    let (dx, dy) = held.axis();
    if dx == 0.0 && dy == 0.0 {
        return Movement::new(current, Resolution::Idle);
    }

    let direction = Vector2::new(dx, dy).normalize();
    let displacement = direction * (config.speed * elapsed.as_secs_f64());
    let candidate = clamp_to_arena(current + displacement, config);

    let is_blocked =
        |position: Position| obstacles.has_collision(&Rectangle::at(position, config.entity));

    if !is_blocked(candidate) {
        return Movement::new(candidate, Resolution::Free);
    }

    let x_only = candidate.with_y(current.y());
    if !is_blocked(x_only) {
        trace!("slide along x from {current:?} to {x_only:?}");
        return Movement::new(x_only, Resolution::SlideX);
    }

    let y_only = current.with_y(candidate.y());
    if !is_blocked(y_only) {
        trace!("slide along y from {current:?} to {y_only:?}");
        return Movement::new(y_only, Resolution::SlideY);
    }

    trace!(
        "movement from {current:?} towards {candidate:?} blocked by {:?}",
        obstacles
            .blocking(&Rectangle::at(candidate, config.entity))
            .map(Obstacle::id)
            .collect::<Vec<_>>()
    );
    Movement::new(current, Resolution::Blocked)
}

/// `min` before `max`: an entity larger than the arena is pinned to 0, where `f64::clamp` would
/// panic.
fn clamp_to_arena(position: Position, config: &MovementConfig) -> Position {
    Position::new(
        position.x().min(config.max_x()).max(0.0),
        position.y().min(config.max_y()).max(0.0),
    )
}
