//! Feedback domain: sprite tinting, squash/stretch and bark particles.

use bevy::prelude::*;

use crate::feedback::{AnimationFlags, BarkParticle, PlayerFeedback, PlayerTint, SpriteSquash};
use crate::locomotion::{AnimTrigger, Player};

const MAX_PARTICLES_PER_SECOND: f32 = 24.0;
const PARTICLE_LIFETIME: f32 = 0.5;
const SQUASH_RECOVERY: f32 = 10.0;

/// Player colour after fatigue desaturation, stun tint and the invulnerability flash.
pub fn tinted_color(base: Color, feedback: &PlayerFeedback) -> Color {
    let base = base.to_srgba();
    let luminance = 0.3 * base.red + 0.59 * base.green + 0.11 * base.blue;
    let fade = feedback.fatigue_tint * 0.7;
    let mut red = base.red + (luminance - base.red) * fade;
    let mut green = base.green + (luminance - base.green) * fade;
    let mut blue = base.blue + (luminance - base.blue) * fade;

    if feedback.stun_vfx {
        red = red + (1.0 - red) * 0.5;
        green *= 0.6;
        blue *= 0.6;
    }

    Color::srgba(red, green, blue, feedback.opacity)
}

pub(crate) fn apply_player_feedback(
    feedback: Res<PlayerFeedback>,
    mut query: Query<(&PlayerTint, &mut Sprite), With<Player>>,
) {
    for (tint, mut sprite) in &mut query {
        sprite.color = tinted_color(tint.base, &feedback);
    }
}

pub(crate) fn apply_animation_triggers(
    time: Res<Time>,
    mut flags: ResMut<AnimationFlags>,
    mut query: Query<(&mut SpriteSquash, &mut Sprite), With<Player>>,
) {
    let triggers = flags.take_triggers();
    let dt = time.delta_secs();

    for (mut squash, mut sprite) in &mut query {
        for trigger in &triggers {
            squash.amount = match trigger {
                AnimTrigger::Jump | AnimTrigger::TreeLeap => 1.2,
                AnimTrigger::Land => 0.8,
                AnimTrigger::Hurt => 0.9,
            };
        }
        squash.amount += (1.0 - squash.amount) * (SQUASH_RECOVERY * dt).clamp(0.0, 1.0);
        let stretch = Vec2::new(1.0 / squash.amount, squash.amount);
        sprite.custom_size = Some(squash.base_size * stretch);
    }
}

pub(crate) fn emit_climb_particles(
    mut commands: Commands,
    time: Res<Time>,
    feedback: Res<PlayerFeedback>,
    mut accumulator: Local<f32>,
    player: Query<&Transform, With<Player>>,
) {
    let Ok(transform) = player.single() else {
        return;
    };

    if feedback.climb_particle_rate <= 0.0 {
        *accumulator = 0.0;
        return;
    }

    *accumulator += feedback.climb_particle_rate * MAX_PARTICLES_PER_SECOND * time.delta_secs();
    let origin = transform.translation.truncate();
    let mut index = 0.0;
    while *accumulator >= 1.0 {
        *accumulator -= 1.0;
        index += 1.0;
        let drift = (time.elapsed_secs() * 17.0 + index).sin() * 30.0;
        commands.spawn((
            BarkParticle {
                lifetime: PARTICLE_LIFETIME,
                velocity: Vec2::new(drift, -60.0),
            },
            Sprite {
                color: Color::srgb(0.45, 0.32, 0.2),
                custom_size: Some(Vec2::splat(3.0)),
                ..default()
            },
            Transform::from_xyz(origin.x, origin.y, 1.0),
        ));
    }
}

pub(crate) fn update_bark_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut BarkParticle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut transform, mut sprite) in &mut query {
        particle.lifetime -= dt;
        if particle.lifetime <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += (particle.velocity * dt).extend(0.0);
        sprite.color.set_alpha(particle.lifetime / PARTICLE_LIFETIME);
    }
}
