//! Collision detection based on axis-aligned rectangles.

use thiserror::Error;

use super::{Position, Size};

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("negative extent {width} x {height}")]
    NegativeExtent { width: f64, height: f64 },
    #[error("non-finite value {0}")]
    NonFinite(f64),
    #[error("negative speed {0}")]
    NegativeSpeed(f64),
}

impl GeometryError {
    pub(super) fn check_finite(values: &[f64]) -> Result<(), GeometryError> {
        match values.iter().find(|v| !v.is_finite()) {
            Some(value) => Err(GeometryError::NonFinite(*value)),
            None => Ok(()),
        }
    }

    pub(super) fn check_extent(width: f64, height: f64) -> Result<(), GeometryError> {
        Self::check_finite(&[width, height])?;
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeExtent { width, height });
        }
        Ok(())
    }
}

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    fn bounds(&self) -> Rectangle;
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        GeometryError::check_finite(&[x, y])?;
        GeometryError::check_extent(width, height)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Bounding box of an entity of `size` whose top-left corner sits at `position`.
    pub fn at(position: Position, size: Size) -> Self {
        Self {
            x: position.x(),
            y: position.y(),
            width: size.width(),
            height: size.height(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Two rectangles overlap unless one lies entirely on one side of the other. Shared edges
    /// are not an overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        !(self.right() <= other.left()
            || self.left() >= other.right()
            || self.bottom() <= other.top()
            || self.top() >= other.bottom())
    }
}

impl HasCollision for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }
}
