//! Level domain: spawning the grove and the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::feedback::{PlayerTint, SpriteSquash};
use crate::level::layout::{demo_grove, demo_gusts};
use crate::locomotion::{
    GameLayer, GustZone, LastVelocity, LocomotionState, LocomotionStateMachine,
    LocomotionTuning, Player, PlayerLocomotion, SpawnPoint, Surface, player_collision_layers,
};
use crate::survival::SurvivalTuning;

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Marks everything the level spawned.
#[derive(Component, Debug)]
pub struct LevelEntity;

pub(crate) fn spawn_grove(mut commands: Commands) {
    let pieces = demo_grove();
    for piece in &pieces {
        let z = if piece.is_sensor() { -1.0 } else { 0.0 };

        let mut entity = commands.spawn((
            LevelEntity,
            Surface { tag: piece.tag },
            Sprite {
                color: piece.color(),
                custom_size: Some(piece.size),
                ..default()
            },
            Transform::from_xyz(piece.center.x, piece.center.y, z),
            RigidBody::Static,
            Collider::rectangle(piece.size.x, piece.size.y),
            CollisionLayers::new(GameLayer::for_surface(piece.tag), [GameLayer::Player]),
        ));
        if piece.is_sensor() {
            entity.insert(Sensor);
        }
    }

    for gust in demo_gusts() {
        commands.spawn((
            LevelEntity,
            GustZone,
            Sprite {
                color: Color::srgba(0.7, 0.85, 1.0, 0.08),
                custom_size: Some(gust.size),
                ..default()
            },
            Transform::from_xyz(gust.center.x, gust.center.y, -2.0),
            // Found by point queries only; nothing collides with it.
            RigidBody::Static,
            Collider::rectangle(gust.size.x, gust.size.y),
            Sensor,
            CollisionLayers::new(GameLayer::Gust, LayerMask::NONE),
        ));
    }

    info!("Spawned grove: {} surfaces", pieces.len());
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    survival: Res<SurvivalTuning>,
    spawn: Res<SpawnPoint>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let machine = LocomotionStateMachine::new(tuning.clone(), survival.clone());
    let gravity = LocomotionState::Grounded.gravity_scale(&tuning, 0.0);
    let color = Color::srgb(0.9, 0.85, 0.7);

    commands.spawn((
        // Identity & locomotion
        (
            Player,
            PlayerLocomotion(machine),
            LastVelocity::default(),
        ),
        // Rendering
        (
            Sprite {
                color,
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            PlayerTint { base: color },
            SpriteSquash::new(PLAYER_SIZE),
            Transform::from_xyz(spawn.0.x, spawn.0.y, 1.0),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(gravity),
            Mass(tuning.body_mass),
            Friction::new(0.0),
            CollisionEventsEnabled,
            player_collision_layers(),
        ),
    ));

    info!("Spawned player at {:?}", spawn.0);
}
