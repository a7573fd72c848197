//! Debug domain: overlay components and text formatting.

use bevy::prelude::*;

use crate::locomotion::LocomotionSnapshot;

/// Marker for the locomotion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Overlay body for one frame.
pub fn format_overlay(
    snapshot: &LocomotionSnapshot,
    position: Vec2,
    velocity: Vec2,
    status: Option<&str>,
) -> String {
    let mut text = format!(
        "State: {:?}\nPos: ({:.0}, {:.0})  Vel: ({:.0}, {:.0})\nFatigue: {:.2}/{:.2}  Slip: {:.0}\nLives: {}  Invuln: {:.2}  Stun: {:.2}\nJump buffer: {:.2}  Queued: {:.2}  Attach CD: {:.2}\nGust: {}",
        snapshot.state,
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        snapshot.fatigue,
        snapshot.max_fatigue,
        snapshot.slip_velocity,
        snapshot.lives,
        snapshot.invulnerability_timer,
        snapshot.stun_timer,
        snapshot.jump_buffer_timer,
        snapshot.queued_jump_timer,
        snapshot.attach_cooldown,
        snapshot.in_gust,
    );
    if let Some(status) = status {
        text.push_str("\n> ");
        text.push_str(status);
    }
    text.push_str("\n[F1 info | F2 carrier | F3 vine | F4 release | F5 hurt | F6 stun | F7 dump]");
    text
}
