//! UI domain: banner shown between losing the last life and the level reload.

use bevy::prelude::*;

use crate::locomotion::LocomotionEvent;

/// Marker for the death banner overlay
#[derive(Component)]
pub struct DeathBannerUI;

pub(crate) fn show_death_banner(
    mut commands: Commands,
    mut events: MessageReader<LocomotionEvent>,
    existing_banner: Query<Entity, With<DeathBannerUI>>,
) {
    for event in events.read() {
        match event {
            LocomotionEvent::Died => {
                // Only spawn if not already showing
                if existing_banner.is_empty() {
                    spawn_death_banner(&mut commands);
                }
            }
            LocomotionEvent::LevelReloadRequested => {
                for entity in &existing_banner {
                    commands.entity(entity).despawn();
                }
            }
            _ => {}
        }
    }
}

fn spawn_death_banner(commands: &mut Commands) {
    commands
        .spawn((
            DeathBannerUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU FELL"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("The grove resets shortly..."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}
