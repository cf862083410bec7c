//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::domain;

#[derive(Resource)]
pub struct PlayerRes(domain::Driver);

impl Deref for PlayerRes {
    type Target = domain::Driver;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PlayerRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Driver> for PlayerRes {
    fn from(value: domain::Driver) -> Self {
        Self(value)
    }
}

#[derive(Resource, Default)]
pub struct ObstacleRegistryRes(domain::ObstacleRegistry);

impl Deref for ObstacleRegistryRes {
    type Target = domain::ObstacleRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ObstacleRegistryRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::ObstacleRegistry> for ObstacleRegistryRes {
    fn from(value: domain::ObstacleRegistry) -> Self {
        Self(value)
    }
}

/// Directions sampled from the keyboard for the current frame.
#[derive(Resource, Default, Clone, Copy)]
pub struct HeldDirectionsRes(pub domain::HeldDirections);

#[derive(Resource, Default)]
pub struct MovementConfigRes(domain::MovementConfig);

impl Deref for MovementConfigRes {
    type Target = domain::MovementConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::MovementConfig> for MovementConfigRes {
    fn from(value: domain::MovementConfig) -> Self {
        Self(value)
    }
}
