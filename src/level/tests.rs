use bevy::prelude::*;

use super::*;
use crate::locomotion::test_support::{AabbSurfaces, SurfaceRect};
use crate::locomotion::{LocomotionTuning, SpawnPoint, SurfaceMask, SurfaceQuery, SurfaceTag};

fn grove_surfaces() -> AabbSurfaces {
    let rects = demo_grove()
        .iter()
        .enumerate()
        .map(|(id, piece)| SurfaceRect::new(id as u64, piece.tag, piece.center, piece.size * 0.5))
        .collect();
    AabbSurfaces::new(rects)
}

#[test]
fn test_grove_has_every_surface_kind() {
    let tags: Vec<_> = demo_grove().iter().map(|piece| piece.tag).collect();
    for tag in [
        SurfaceTag::Ground,
        SurfaceTag::Climbable,
        SurfaceTag::Moss,
        SurfaceTag::Slippery,
        SurfaceTag::Hazard,
    ] {
        assert!(tags.contains(&tag), "missing {tag:?}");
    }
}

#[test]
fn test_trunks_reach_the_forest_floor() {
    for piece in demo_grove().iter().filter(|piece| piece.tag.is_climbable()) {
        let bottom = piece.center.y - piece.size.y * 0.5;
        assert!(bottom <= GROUND_TOP, "{piece:?} floats above the floor");
    }
}

#[test]
fn test_spawn_point_lands_on_ground() {
    let surfaces = grove_surfaces();
    let spawn = SpawnPoint::default().0;
    let hit = surfaces.raycast(spawn, Vec2::NEG_Y, 100.0, SurfaceMask::GROUND);

    let Some(hit) = hit else {
        panic!("no ground under the spawn point");
    };
    assert_eq!(hit.point.y, GROUND_TOP);
}

#[test]
fn test_spawn_point_clear_of_bark_and_thorns() {
    let surfaces = grove_surfaces();
    let spawn = SpawnPoint::default().0;
    let reach = LocomotionTuning::default().attach_reach;

    let nearby = surfaces.overlap_circle(
        spawn,
        reach,
        SurfaceMask::CLIMBABLE.union(SurfaceMask::HAZARD),
    );
    assert!(nearby.is_empty());
}

#[test]
fn test_only_ground_blocks_the_player() {
    for piece in demo_grove() {
        assert_eq!(piece.is_sensor(), piece.tag != SurfaceTag::Ground);
    }
}
