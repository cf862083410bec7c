//! Registry of static obstacles keyed by identifier.

use std::collections::BTreeMap;

use bevy::log::debug;

use super::{HasCollision, Rectangle};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Obstacle {
    id: String,
    rect: Rectangle,
}

impl Obstacle {
    pub fn new(id: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }
}

impl HasCollision for Obstacle {
    fn bounds(&self) -> Rectangle {
        self.rect
    }
}

/// Owns all obstacles of the arena. Identifiers are unique; registering an existing identifier
/// replaces its rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleRegistry {
    obstacles: BTreeMap<String, Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, rect: Rectangle) {
        let id = id.into();
        debug!("register obstacle {id} at {rect:?}");
        self.obstacles.insert(id.clone(), Obstacle::new(id, rect));
    }

    /// Replaces the rectangle of `id`. Without a rectangle the prior geometry is kept, and an
    /// unknown `id` stays unknown.
    pub fn update(&mut self, id: &str, rect: Option<Rectangle>) {
        let Some(rect) = rect else {
            if !self.obstacles.contains_key(id) {
                debug!("ignore update of unknown obstacle {id} without geometry");
            }
            return;
        };
        if let Some(obstacle) = self.obstacles.get_mut(id) {
            debug!("update obstacle {id} to {rect:?}");
            obstacle.rect = rect;
        } else {
            self.register(id, rect);
        }
    }

    pub fn unregister(&mut self, id: &str) {
        if self.obstacles.remove(id).is_some() {
            debug!("unregister obstacle {id}");
        }
    }

    pub fn get(&self, id: &str) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Point-in-time copy of all obstacles, ordered by identifier. Later mutations of the
    /// registry are not visible through it.
    pub fn snapshot(&self) -> ObstacleSnapshot {
        ObstacleSnapshot::new(self.obstacles.values().cloned().collect())
    }
}

/// Immutable view of the obstacles for one frame's collision pass.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct ObstacleSnapshot {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSnapshot {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn has_collision(&self, object: &dyn HasCollision) -> bool {
        self.obstacles.iter().any(|o| o.has_collision(object))
    }

    pub fn blocking<'a>(&'a self, rect: &'a Rectangle) -> impl Iterator<Item = &'a Obstacle> + 'a {
        self.obstacles.iter().filter(move |o| o.rect.overlaps(rect))
    }
}

impl FromIterator<Obstacle> for ObstacleSnapshot {
    fn from_iter<T: IntoIterator<Item = Obstacle>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
