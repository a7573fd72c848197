//! Locomotion domain: the fixed-step system that drives the player state machine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::ForcedZoom;
use crate::feedback::{AnimationFlags, PlayerFeedback};
use crate::locomotion::systems::physics::AvianBody;
use crate::locomotion::systems::surfaces::{AvianSurfaces, SurfaceShapes};
use crate::locomotion::{
    CollisionContact, ExternalTransitionRequest, LastVelocity, LocomotionContext,
    LocomotionEvent, Player, PlayerLocomotion, SpawnPoint,
};
use crate::survival::{SurvivalBridge, SurvivalRequest};

/// Normal of the first contact manifold, pointing from `surface` toward `player`.
/// Zero when the pair has no manifold yet.
fn contact_normal(collisions: &Collisions, player: Entity, surface: Entity) -> Vec2 {
    let Some(pair) = collisions.get(player, surface) else {
        return Vec2::ZERO;
    };
    let Some(manifold) = pair.manifolds.first() else {
        return Vec2::ZERO;
    };
    // Manifold normals point from collider1 to collider2.
    if pair.collider1 == player {
        -manifold.normal
    } else {
        manifold.normal
    }
}

/// Collisions first, then survival requests, external requests and the tick itself.
pub(crate) fn drive_player_locomotion(
    mut commands: Commands,
    time: Res<Time>,
    spatial_query: SpatialQuery,
    shapes: SurfaceShapes,
    collisions: Collisions,
    spawn: Res<SpawnPoint>,
    mut feedback: ResMut<PlayerFeedback>,
    mut animation: ResMut<AnimationFlags>,
    mut zoom: ResMut<ForcedZoom>,
    mut collision_starts: MessageReader<CollisionStart>,
    mut survival_requests: MessageReader<SurvivalRequest>,
    mut external_requests: MessageReader<ExternalTransitionRequest>,
    mut locomotion_events: MessageWriter<LocomotionEvent>,
    mut player: Query<
        (
            Entity,
            &mut PlayerLocomotion,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut LockedAxes,
            Has<ColliderDisabled>,
            &mut LastVelocity,
        ),
        With<Player>,
    >,
) {
    let Ok((
        entity,
        mut locomotion,
        mut transform,
        mut velocity,
        mut gravity_scale,
        mut locked_axes,
        collider_disabled,
        mut last_velocity,
    )) = player.single_mut()
    else {
        collision_starts.clear();
        survival_requests.clear();
        external_requests.clear();
        return;
    };

    let surfaces = AvianSurfaces {
        spatial: &spatial_query,
        shapes: &shapes,
    };

    let impact_velocity = last_velocity.0;
    let contacts: Vec<CollisionContact> = collision_starts
        .read()
        .filter_map(|event| {
            let other = if event.collider1 == entity {
                event.collider2
            } else if event.collider2 == entity {
                event.collider1
            } else {
                return None;
            };
            let tag = surfaces.tag(other)?;
            Some(CollisionContact {
                normal: contact_normal(&collisions, entity, other),
                relative_velocity: surfaces.velocity(other) - impact_velocity,
                tag,
            })
        })
        .collect();

    let machine = &mut locomotion.0;
    let mass = machine.tuning().body_mass;
    let mut body = AvianBody {
        transform: &mut *transform,
        velocity: &mut *velocity,
        gravity_scale: &mut *gravity_scale,
        locked_axes: &mut *locked_axes,
        collider_enabled: !collider_disabled,
        mass,
    };
    let mut ctx = LocomotionContext {
        body: &mut body,
        surfaces: &surfaces,
        effects: &mut *feedback,
        animation: &mut *animation,
        camera: &mut *zoom,
    };

    for contact in contacts {
        machine.on_collision(contact, &mut ctx);
    }

    for request in survival_requests.read() {
        match *request {
            SurvivalRequest::Damage { impulse } => machine.request_damage(impulse),
            SurvivalRequest::Stun => machine.request_stun(),
        }
    }

    for request in external_requests.read() {
        if !machine.request_external_transition(request.target) {
            debug!("External transition to {:?} rejected", request.target);
        }
    }

    machine.tick(time.delta_secs(), &mut ctx);

    let mut reload = false;
    for event in machine.drain_events() {
        reload |= event == LocomotionEvent::LevelReloadRequested;
        locomotion_events.write(event);
    }

    if reload {
        machine.reset(&mut ctx);
        ctx.body.set_position(spawn.0);
        info!("Player respawned at {:?}", spawn.0);
    }

    if body.collider_enabled == collider_disabled {
        if body.collider_enabled {
            commands.entity(entity).remove::<ColliderDisabled>();
        } else {
            commands.entity(entity).insert(ColliderDisabled);
        }
        debug!("Player collider enabled: {}", body.collider_enabled);
    }

    last_velocity.0 = velocity.0;
}
