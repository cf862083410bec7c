//! Simulation of the player in an arena with obstacles.
//!
//! Every frame the registry is copied into a snapshot, then the player is advanced with the
//! directions the controller sampled for this frame.

use bevy::prelude::*;

use crate::{
    controller,
    domain::Resolution,
    resource::{HeldDirectionsRes, MovementConfigRes, ObstacleRegistryRes, PlayerRes},
};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulate.after(controller::control));
    }
}

pub fn simulate(
    time: Res<Time>,
    held: Res<HeldDirectionsRes>,
    config: Res<MovementConfigRes>,
    registry: Res<ObstacleRegistryRes>,
    mut player: ResMut<PlayerRes>,
) {
    let obstacles = registry.snapshot();
    let movement = player.advance(time.elapsed(), held.0, &config, &obstacles);

    if movement.resolution == Resolution::Blocked {
        debug!("player blocked at {:?}", movement.position);
    }
}
