//! Level domain: the demo grove as plain data.

use bevy::prelude::*;

use crate::locomotion::SurfaceTag;

/// One static piece of the level. `size` is the full width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPiece {
    pub tag: SurfaceTag,
    pub center: Vec2,
    pub size: Vec2,
}

impl LevelPiece {
    const fn new(tag: SurfaceTag, center: Vec2, size: Vec2) -> Self {
        Self { tag, center, size }
    }

    pub fn color(&self) -> Color {
        match self.tag {
            SurfaceTag::Ground => Color::srgb(0.35, 0.45, 0.3),
            SurfaceTag::Climbable => Color::srgb(0.45, 0.32, 0.2),
            SurfaceTag::Moss => Color::srgb(0.3, 0.55, 0.25),
            SurfaceTag::Slippery => Color::srgb(0.55, 0.5, 0.45),
            SurfaceTag::Hazard => Color::srgb(0.75, 0.2, 0.2),
            SurfaceTag::Other => Color::srgb(0.4, 0.4, 0.45),
        }
    }

    /// Bark and thorns are sensors: the player overlaps them instead of being blocked.
    pub fn is_sensor(&self) -> bool {
        self.tag != SurfaceTag::Ground
    }
}

/// Wind region over the canopy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GustArea {
    pub center: Vec2,
    pub size: Vec2,
}

pub const GROUND_TOP: f32 = -180.0;

/// Ground, a trunk of every bark kind, a high ledge and a thorn patch.
pub fn demo_grove() -> Vec<LevelPiece> {
    vec![
        // Forest floor
        LevelPiece::new(
            SurfaceTag::Ground,
            Vec2::new(0.0, GROUND_TOP - 20.0),
            Vec2::new(1800.0, 40.0),
        ),
        // Canopy ledge reached from the trunks
        LevelPiece::new(SurfaceTag::Ground, Vec2::new(420.0, 230.0), Vec2::new(260.0, 20.0)),
        LevelPiece::new(SurfaceTag::Ground, Vec2::new(-520.0, 160.0), Vec2::new(200.0, 20.0)),
        // Trunks, each spanning floor to canopy
        LevelPiece::new(SurfaceTag::Climbable, Vec2::new(-200.0, 60.0), Vec2::new(30.0, 480.0)),
        LevelPiece::new(SurfaceTag::Moss, Vec2::new(40.0, 60.0), Vec2::new(30.0, 480.0)),
        LevelPiece::new(SurfaceTag::Slippery, Vec2::new(260.0, 60.0), Vec2::new(30.0, 480.0)),
        // Slippery trunk with a normal-bark band partway up
        LevelPiece::new(SurfaceTag::Slippery, Vec2::new(640.0, 60.0), Vec2::new(30.0, 480.0)),
        LevelPiece::new(SurfaceTag::Climbable, Vec2::new(640.0, 40.0), Vec2::new(30.0, 120.0)),
        // Thorns
        LevelPiece::new(SurfaceTag::Hazard, Vec2::new(-620.0, GROUND_TOP + 10.0), Vec2::new(80.0, 20.0)),
        LevelPiece::new(SurfaceTag::Hazard, Vec2::new(500.0, GROUND_TOP + 10.0), Vec2::new(120.0, 20.0)),
    ]
}

pub fn demo_gusts() -> Vec<GustArea> {
    vec![GustArea {
        center: Vec2::new(100.0, 360.0),
        size: Vec2::new(900.0, 160.0),
    }]
}
