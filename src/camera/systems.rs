//! Camera domain: follow, zoom and shake.

use bevy::prelude::*;

use crate::camera::{CameraTuning, FollowCamera, ForcedZoom};
use crate::feedback::PlayerFeedback;
use crate::locomotion::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, FollowCamera::default()));
}

/// Exponential follow toward the player, easing scale toward the forced-zoom target. Shake
/// is layered on top of the smoothed focus so it never feeds back into the follow.
pub(crate) fn follow_player_camera(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    zoom: Res<ForcedZoom>,
    feedback: Res<PlayerFeedback>,
    player_query: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera_query: Query<(&mut Transform, &mut FollowCamera)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok((mut camera_transform, mut follow)) = camera_query.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let desired = player_transform.translation.truncate();
    let lerp_t = 1.0 - f32::exp(-tuning.follow_speed * dt);
    follow.focus = follow.focus.lerp(desired, lerp_t);

    let zoom_t = 1.0 - f32::exp(-tuning.zoom_speed * dt);
    follow.zoom += (zoom.target_zoom() - follow.zoom) * zoom_t;

    let shake = shake_offset(
        feedback.shake,
        tuning.max_shake,
        tuning.shake_frequency,
        time.elapsed_secs(),
    );

    let z = camera_transform.translation.z;
    camera_transform.translation = (follow.focus + shake).extend(z);
    camera_transform.scale = Vec3::new(follow.zoom, follow.zoom, 1.0);
}

/// Deterministic two-axis wobble scaled by `strength` in `[0, 1]`.
pub fn shake_offset(strength: f32, max_shake: f32, frequency: f32, elapsed: f32) -> Vec2 {
    let strength = strength.clamp(0.0, 1.0);
    if strength == 0.0 {
        return Vec2::ZERO;
    }
    let phase = elapsed * frequency;
    Vec2::new(phase.sin(), (phase * 1.3 + 0.7).cos()) * max_shake * strength
}
