//! UI domain: player HUD with life pips and the climb fatigue bar.

use bevy::prelude::*;

use crate::locomotion::{Player, PlayerLocomotion};

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const LIFE_PIP_SIZE: f32 = 18.0;
pub(crate) const FATIGUE_BAR_WIDTH: f32 = 200.0;
pub(crate) const FATIGUE_BAR_HEIGHT: f32 = 12.0;
/// Pips beyond this are not drawn.
pub(crate) const MAX_LIFE_PIPS: u32 = 5;

/// Marker for the HUD root container
#[derive(Component)]
pub struct PlayerHudUI;

/// One life pip. `index` 0 is the leftmost.
#[derive(Component)]
pub struct LifePip {
    pub index: u32,
}

/// Marker for the fatigue bar fill element
#[derive(Component)]
pub struct FatigueBarFill;

/// Bar colour for a fatigue progress: calm green, amber past half, red near exhaustion.
pub fn fatigue_bar_color(progress: f32) -> Color {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        let t = p * 2.0;
        Color::srgb(0.3 + t * 0.6, 0.8, 0.3 - t * 0.1)
    } else {
        let t = (p - 0.5) * 2.0;
        Color::srgb(0.9, 0.8 - t * 0.6, 0.2)
    }
}

pub(crate) fn spawn_player_hud(mut commands: Commands) {
    commands
        .spawn((
            PlayerHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Life pips
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|row| {
                    for index in 0..MAX_LIFE_PIPS {
                        row.spawn((
                            LifePip { index },
                            Node {
                                width: Val::Px(LIFE_PIP_SIZE),
                                height: Val::Px(LIFE_PIP_SIZE),
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.85, 0.25, 0.3)),
                            BorderColor::all(Color::srgb(0.3, 0.1, 0.1)),
                            Visibility::Hidden,
                        ));
                    }
                });

            // Fatigue bar
            parent
                .spawn((
                    Node {
                        width: Val::Px(FATIGUE_BAR_WIDTH),
                        height: Val::Px(FATIGUE_BAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        FatigueBarFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(fatigue_bar_color(0.0)),
                    ));
                });
        });
}

pub(crate) fn update_life_pips(
    player_query: Query<&PlayerLocomotion, With<Player>>,
    mut pips: Query<(&LifePip, &mut Visibility, &mut BackgroundColor)>,
) {
    let Ok(locomotion) = player_query.single() else {
        return;
    };
    let survival = locomotion.0.survival();

    for (pip, mut visibility, mut bg_color) in &mut pips {
        *visibility = if pip.index < survival.max_lives() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        bg_color.0 = if pip.index < survival.lives() {
            Color::srgb(0.85, 0.25, 0.3)
        } else {
            Color::srgba(0.2, 0.2, 0.2, 0.6)
        };
    }
}

pub(crate) fn update_fatigue_bar(
    player_query: Query<&PlayerLocomotion, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<FatigueBarFill>>,
) {
    let Ok(locomotion) = player_query.single() else {
        return;
    };

    let progress = locomotion.0.fatigue().progress();
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(progress * 100.0);
        bg_color.0 = fatigue_bar_color(progress);
    }
}
