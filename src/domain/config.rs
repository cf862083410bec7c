//! Tunable constants of the movement rules.

use super::{GeometryError, Size};

/// Arena dimensions, entity size and movement speed (units per second).
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct MovementConfig {
    pub arena: Size,
    pub entity: Size,
    pub speed: f64,
}

impl MovementConfig {
    pub const DEFAULT_ARENA_WIDTH: f64 = 1280.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 720.0;
    pub const DEFAULT_ENTITY_LENGTH: f64 = 50.0;
    pub const DEFAULT_SPEED: f64 = 250.0;

    pub fn new(arena: Size, entity: Size, speed: f64) -> Result<Self, GeometryError> {
        GeometryError::check_finite(&[speed])?;
        if speed < 0.0 {
            return Err(GeometryError::NegativeSpeed(speed));
        }
        Ok(Self {
            arena,
            entity,
            speed,
        })
    }

    pub fn with_speed(&self, speed: f64) -> Result<Self, GeometryError> {
        Self::new(self.arena, self.entity, speed)
    }

    /// Largest x the entity's top-left corner may take. Negative if the entity is wider than
    /// the arena.
    pub fn max_x(&self) -> f64 {
        self.arena.width() - self.entity.width()
    }

    /// Largest y the entity's top-left corner may take.
    pub fn max_y(&self) -> f64 {
        self.arena.height() - self.entity.height()
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            arena: Size::from_raw(Self::DEFAULT_ARENA_WIDTH, Self::DEFAULT_ARENA_HEIGHT),
            entity: Size::from_raw(Self::DEFAULT_ENTITY_LENGTH, Self::DEFAULT_ENTITY_LENGTH),
            speed: Self::DEFAULT_SPEED,
        }
    }
}
