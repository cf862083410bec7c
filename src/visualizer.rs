//! 2D visualization.

use std::collections::BTreeMap;

use bevy::{prelude::*, sprite::Anchor};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    domain::{Driver, MovementConfig, Obstacle, ObstacleRegistry, Position, Rectangle},
    resource::{MovementConfigRes, ObstacleRegistryRes, PlayerRes},
    simulator,
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        let config = MovementConfig::default();
        let mut scene = Scene::default();

        app.add_systems(Startup, set_up)
            .add_systems(
                Update,
                (
                    handle_keyboard_input,
                    (update_player, update_rocks, update_text).after(simulator::simulate),
                ),
            )
            .insert_resource(ClearColor(Color::rgb(0.2, 0.2, 0.2)))
            .insert_resource(PlayerRes::from(Driver::new(START_POSITION)))
            .insert_resource(create_registry(&config, &mut scene.rng))
            .insert_resource(MovementConfigRes::from(config))
            .insert_resource(scene);
    }
}

#[derive(Resource)]
pub struct Scene {
    player: Option<Entity>,
    rocks: BTreeMap<String, Entity>,
    added_rocks: Vec<String>,
    next_rock: usize,
    rng: ChaCha8Rng,
    show_text: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            player: None,
            rocks: BTreeMap::new(),
            added_rocks: vec![],
            next_rock: 0,
            rng: ChaCha8Rng::seed_from_u64(RNG_SEED),
            show_text: true,
        }
    }
}

#[derive(Component)]
struct HelpText;

const RNG_SEED: u64 = 19878367467712;
const START_POSITION: Position = Position::new(100.0, 100.0);
const ROCK_COUNT: usize = 8;

const PLAYER_Z: f32 = 2.0;
const ROCK_Z: f32 = 1.0;

fn create_registry(config: &MovementConfig, rng: &mut ChaCha8Rng) -> ObstacleRegistryRes {
    let mut registry = ObstacleRegistry::new();

    if let Ok(rect) = Rectangle::new(300.0, 200.0, 120.0, 80.0) {
        registry.register("rock-0", rect);
    }

    let start = Rectangle::at(START_POSITION, config.entity);
    while registry.len() < ROCK_COUNT {
        if let Some(rect) = random_rock(config, &start, rng) {
            registry.register(format!("rock-{}", registry.len()), rect);
        }
    }

    info!("arena with {} rocks", registry.len());
    registry.into()
}

/// Random rock inside the arena, or `None` if the drawn rock does not fit or would cover
/// `avoid`.
fn random_rock(
    config: &MovementConfig,
    avoid: &Rectangle,
    rng: &mut ChaCha8Rng,
) -> Option<Rectangle> {
    let width = rng.random_range(30.0..=160.0);
    let height = rng.random_range(30.0..=160.0);
    if width > config.arena.width() || height > config.arena.height() {
        return None;
    }
    let x = rng.random_range(0.0..=config.arena.width() - width);
    let y = rng.random_range(0.0..=config.arena.height() - height);
    let rect = Rectangle::new(x, y, width, height).ok()?;
    (!rect.overlaps(avoid)).then_some(rect)
}

fn set_up(mut scene: ResMut<Scene>, mut commands: Commands, config: Res<MovementConfigRes>) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn(SpriteBundle {
        sprite: Sprite {
            color: Color::rgb(0.93, 0.93, 0.93),
            custom_size: Some(to_bevy_size(config.arena.width(), config.arena.height())),
            anchor: Anchor::TopLeft,
            ..default()
        },
        transform: Transform::from_translation(to_bevy_position(Position::default(), &config, 0.0)),
        ..default()
    });

    scene.player = Some(
        commands
            .spawn(SpriteBundle {
                sprite: Sprite {
                    color: Color::RED,
                    custom_size: Some(to_bevy_size(
                        config.entity.width(),
                        config.entity.height(),
                    )),
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                transform: Transform::from_translation(to_bevy_position(
                    START_POSITION,
                    &config,
                    PLAYER_Z,
                )),
                ..default()
            })
            .id(),
    );

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 16.0,
                color: Color::BLACK,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        }),
        HelpText,
    ));
}

fn update_player(
    scene: Res<Scene>,
    player: Res<PlayerRes>,
    config: Res<MovementConfigRes>,
    mut transforms: Query<&mut Transform>,
) {
    let Some(entity) = scene.player else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(entity) {
        transform.translation = to_bevy_position(player.position(), &config, PLAYER_Z);
    }
}

fn update_rocks(
    mut scene: ResMut<Scene>,
    mut commands: Commands,
    registry: Res<ObstacleRegistryRes>,
    config: Res<MovementConfigRes>,
    mut sprites: Query<(&mut Transform, &mut Sprite)>,
) {
    let snapshot = registry.snapshot();

    let removed = scene
        .rocks
        .keys()
        .filter(|id| snapshot.obstacles().iter().all(|o| o.id() != id.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    for id in removed {
        if let Some(entity) = scene.rocks.remove(&id) {
            commands.entity(entity).despawn();
        }
    }

    for obstacle in snapshot.obstacles() {
        match scene.rocks.get(obstacle.id()).copied() {
            Some(entity) => {
                if let Ok((mut transform, mut sprite)) = sprites.get_mut(entity) {
                    transform.translation = rock_translation(obstacle, &config);
                    sprite.custom_size = Some(rock_size(obstacle));
                }
            }
            None => {
                let entity = commands
                    .spawn(SpriteBundle {
                        sprite: Sprite {
                            color: Color::DARK_GREEN,
                            custom_size: Some(rock_size(obstacle)),
                            anchor: Anchor::TopLeft,
                            ..default()
                        },
                        transform: Transform::from_translation(rock_translation(
                            obstacle, &config,
                        )),
                        ..default()
                    })
                    .id();
                scene.rocks.insert(obstacle.id().to_owned(), entity);
            }
        }
    }
}

fn update_text(
    mut text: Query<(&mut Text, &mut Visibility), With<HelpText>>,
    scene: Res<Scene>,
    player: Res<PlayerRes>,
    registry: Res<ObstacleRegistryRes>,
) {
    for (mut text, mut visibility) in &mut text {
        *visibility = if scene.show_text {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        text.sections[0].value = format!(
            "Arrow keys / WASD: move\n\
             Space: add rock, Backspace: remove added rock\n\
             R: reset player, H: toggle help\n\
             \n\
             Position: {:.1}, {:.1}\n\
             Rocks: {}",
            player.position().x(),
            player.position().y(),
            registry.len(),
        );
    }
}

fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<Scene>,
    mut registry: ResMut<ObstacleRegistryRes>,
    mut player: ResMut<PlayerRes>,
    config: Res<MovementConfigRes>,
) {
    if keys.just_pressed(KeyCode::KeyH) {
        scene.show_text = !scene.show_text;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        player.teleport(START_POSITION);
    }

    if keys.just_pressed(KeyCode::Space) {
        let occupied = Rectangle::at(player.position(), config.entity);
        if let Some(rect) = random_rock(&config, &occupied, &mut scene.rng) {
            let id = format!("added-{}", scene.next_rock);
            scene.next_rock += 1;
            registry.register(id.clone(), rect);
            scene.added_rocks.push(id);
        }
    }

    if keys.just_pressed(KeyCode::Backspace) {
        if let Some(id) = scene.added_rocks.pop() {
            registry.unregister(&id);
        }
    }
}

fn rock_translation(obstacle: &Obstacle, config: &MovementConfig) -> Vec3 {
    to_bevy_position(obstacle.rect().position(), config, ROCK_Z)
}

fn rock_size(obstacle: &Obstacle) -> Vec2 {
    to_bevy_size(obstacle.rect().width(), obstacle.rect().height())
}

/// Arena coordinates have their origin in the top-left corner with y pointing down, Bevy's 2D
/// camera looks at the arena's center with y pointing up.
fn to_bevy_position(position: Position, config: &MovementConfig, z: f32) -> Vec3 {
    Vec3::new(
        (position.x() - config.arena.width() / 2.0) as f32,
        (config.arena.height() / 2.0 - position.y()) as f32,
        z,
    )
}

fn to_bevy_size(width: f64, height: f64) -> Vec2 {
    Vec2::new(width as f32, height as f32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn app(player: Position) -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ObstacleRegistryRes>()
            .insert_resource(Scene::default())
            .insert_resource(PlayerRes::from(Driver::new(player)))
            .insert_resource(MovementConfigRes::from(MovementConfig::default()))
            .add_systems(Update, handle_keyboard_input);
        app
    }

    fn tap(app: &mut App, key: KeyCode) {
        app.world.resource_mut::<ButtonInput<KeyCode>>().press(key);
        app.update();
        let mut keys = app.world.resource_mut::<ButtonInput<KeyCode>>();
        keys.release(key);
        keys.clear();
    }

    #[test]
    fn test_to_bevy_position() {
        let config = MovementConfig::default();
        assert_eq!(
            to_bevy_position(Position::new(0.0, 0.0), &config, 0.0),
            Vec3::new(-640.0, 360.0, 0.0)
        );
        assert_eq!(
            to_bevy_position(Position::new(640.0, 360.0), &config, 1.0),
            Vec3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(
            to_bevy_position(Position::new(1280.0, 720.0), &config, 0.0),
            Vec3::new(640.0, -360.0, 0.0)
        );
    }

    #[test]
    fn test_layout_keeps_start_free() {
        let config = MovementConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let registry = create_registry(&config, &mut rng);
        assert_eq!(registry.len(), ROCK_COUNT);
        assert!(!registry
            .snapshot()
            .has_collision(&Rectangle::at(START_POSITION, config.entity)));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = MovementConfig::default();
        let first = create_registry(&config, &mut ChaCha8Rng::seed_from_u64(RNG_SEED));
        let second = create_registry(&config, &mut ChaCha8Rng::seed_from_u64(RNG_SEED));
        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_random_rock_avoids_given_rectangle() {
        let config = MovementConfig::default();
        let avoid = Rectangle::at(Position::new(640.0, 360.0), config.entity);
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let rocks = (0..500)
            .filter_map(|_| random_rock(&config, &avoid, &mut rng))
            .collect::<Vec<_>>();
        assert!(!rocks.is_empty());
        assert!(rocks.iter().all(|rock| !rock.overlaps(&avoid)));
    }

    #[test]
    fn test_added_rocks_never_cover_player() {
        let player = Position::new(640.0, 360.0);
        let mut app = app(player);
        for _ in 0..200 {
            tap(&mut app, KeyCode::Space);
        }

        let config = MovementConfig::default();
        let registry = app.world.resource::<ObstacleRegistryRes>();
        assert!(!registry.is_empty());
        assert!(!registry
            .snapshot()
            .has_collision(&Rectangle::at(player, config.entity)));
        assert_eq!(
            app.world.resource::<Scene>().added_rocks.len(),
            registry.len()
        );
    }

    #[test]
    fn test_backspace_removes_last_added_rock() {
        let mut app = app(START_POSITION);
        while app.world.resource::<Scene>().added_rocks.len() < 2 {
            tap(&mut app, KeyCode::Space);
        }
        let last = app.world.resource::<Scene>().added_rocks[1].clone();

        tap(&mut app, KeyCode::Backspace);

        let registry = app.world.resource::<ObstacleRegistryRes>();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&last).is_none());
        assert_eq!(app.world.resource::<Scene>().added_rocks.len(), 1);
    }

    #[test]
    fn test_backspace_without_added_rocks() {
        let mut app = app(START_POSITION);
        tap(&mut app, KeyCode::Backspace);
        assert!(app.world.resource::<ObstacleRegistryRes>().is_empty());
    }

    #[test]
    fn test_reset_teleports_to_start() {
        let mut app = app(Position::new(640.0, 360.0));
        tap(&mut app, KeyCode::KeyR);
        assert_eq!(app.world.resource::<PlayerRes>().position(), START_POSITION);
    }

    #[test]
    fn test_toggle_help_text() {
        let mut app = app(START_POSITION);
        assert!(app.world.resource::<Scene>().show_text);
        tap(&mut app, KeyCode::KeyH);
        assert!(!app.world.resource::<Scene>().show_text);
        tap(&mut app, KeyCode::KeyH);
        assert!(app.world.resource::<Scene>().show_text);
    }
}
