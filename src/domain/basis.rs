//! Basic building blocks.

use std::ops::{Add, Sub};

use nalgebra::Vector2;

use super::GeometryError;

/// Point in arena coordinates. The origin is the top-left corner of the arena, x grows to the
/// right and y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn with_y(&self, y: f64) -> Self {
        Self { y, ..*self }
    }

    pub fn distance(&self, position: Self) -> f64 {
        ((self.x - position.x).powi(2) + (self.y - position.y).powi(2)).sqrt()
    }
}

impl Add<Vector2<f64>> for Position {
    type Output = Position;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Extent of the arena or of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        GeometryError::check_extent(width, height)?;
        Ok(Self { width, height })
    }

    /// Skips validation, for compile-time constants known to be well formed.
    pub(super) const fn from_raw(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
