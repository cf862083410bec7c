use bevy::{prelude::*, window::WindowResolution};

use glide_arena::{controller, domain::MovementConfig, simulator, visualizer};

fn main() {
    let arena = MovementConfig::default().arena;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Glide Arena".into(),
                resolution: WindowResolution::new(arena.width() as f32, arena.height() as f32),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator)
        .run();
}
