//! Controller steering the player.
//!
//! The keyboard is sampled once per frame into a `HeldDirections` value. The simulator only ever
//! sees that value, never the keyboard itself.

use bevy::prelude::*;

use crate::{
    domain::{Direction, HeldDirections},
    resource::HeldDirectionsRes,
};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldDirectionsRes>()
            .add_systems(Update, control);
    }
}

pub fn control(keys: Res<ButtonInput<KeyCode>>, mut held: ResMut<HeldDirectionsRes>) {
    held.0 = held_directions(&keys);
}

fn held_directions(keys: &ButtonInput<KeyCode>) -> HeldDirections {
    Direction::iter()
        .filter(|direction| keys.any_pressed(key_codes(**direction)))
        .copied()
        .collect()
}

fn key_codes(direction: Direction) -> [KeyCode; 2] {
    match direction {
        Direction::Up => [KeyCode::ArrowUp, KeyCode::KeyW],
        Direction::Down => [KeyCode::ArrowDown, KeyCode::KeyS],
        Direction::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
        Direction::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
    }
}
