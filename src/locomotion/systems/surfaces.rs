//! Locomotion domain: avian2d spatial queries behind [`SurfaceQuery`], and the gust flag.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::surface_layer_mask;
use crate::locomotion::{
    GameLayer, Player, PlayerLocomotion, RaycastHit, Surface, SurfaceHandle, SurfaceMask,
    SurfaceQuery, SurfaceTag,
};

/// Per-surface data the adapter needs beyond what the spatial pipeline returns.
pub(crate) type SurfaceShape = (
    &'static Surface,
    &'static Collider,
    &'static Position,
    &'static Rotation,
    Option<&'static LinearVelocity>,
);

/// Level surfaces, never the player.
pub(crate) type SurfaceShapes<'w, 's> = Query<'w, 's, SurfaceShape, Without<Player>>;

/// Read-only view of the physics world for one fixed step. Handles carry
/// [`Entity::to_bits`] as their id.
pub(crate) struct AvianSurfaces<'a, 'w, 's, 'qw, 'qs> {
    pub spatial: &'a SpatialQuery<'w, 's>,
    pub shapes: &'a SurfaceShapes<'qw, 'qs>,
}

impl AvianSurfaces<'_, '_, '_, '_, '_> {
    pub fn tag(&self, entity: Entity) -> Option<SurfaceTag> {
        self.shapes.get(entity).ok().map(|(surface, ..)| surface.tag)
    }

    /// Velocity of a surface, zero for static ones.
    pub fn velocity(&self, entity: Entity) -> Vec2 {
        self.shapes
            .get(entity)
            .ok()
            .and_then(|(.., velocity)| velocity)
            .map_or(Vec2::ZERO, |velocity| velocity.0)
    }

    fn handle(&self, entity: Entity, mask: SurfaceMask) -> Option<SurfaceHandle> {
        let tag = self.tag(entity)?;
        mask.contains(tag).then_some(SurfaceHandle {
            id: entity.to_bits(),
            tag,
        })
    }
}

impl SurfaceQuery for AvianSurfaces<'_, '_, '_, '_, '_> {
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: SurfaceMask) -> Vec<SurfaceHandle> {
        let filter = SpatialQueryFilter::from_mask(surface_layer_mask(mask));
        let hits = if radius > 0.0 {
            self.spatial
                .shape_intersections(&Collider::circle(radius), point, 0.0, &filter)
        } else {
            self.spatial.point_intersections(point, &filter)
        };

        hits.into_iter()
            .filter_map(|entity| self.handle(entity, mask))
            .collect()
    }

    fn closest_point(&self, handle: SurfaceHandle, point: Vec2) -> Option<Vec2> {
        let entity = Entity::try_from_bits(handle.id)?;
        let (_, collider, position, rotation, _) = self.shapes.get(entity).ok()?;
        let (projected, _inside) = collider.project_point(*position, *rotation, point, true);
        Some(projected)
    }

    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: SurfaceMask,
    ) -> Option<RaycastHit> {
        let Ok(direction) = Dir2::new(direction) else {
            return None;
        };
        if max_distance < 0.0 {
            return None;
        }

        // Bark kinds share a layer, so the predicate narrows hits to the exact tags.
        let filter = SpatialQueryFilter::from_mask(surface_layer_mask(mask));
        let hit = self.spatial.cast_ray_predicate(
            origin,
            direction,
            max_distance,
            true,
            &filter,
            &|entity| self.handle(entity, mask).is_some(),
        )?;

        Some(RaycastHit {
            handle: self.handle(hit.entity, mask)?,
            point: origin + *direction * hit.distance,
            normal: hit.normal,
            distance: hit.distance,
        })
    }
}

pub(crate) fn update_gust_flag(
    spatial_query: SpatialQuery,
    mut player: Query<(&Position, &mut PlayerLocomotion), With<Player>>,
) {
    let Ok((position, mut locomotion)) = player.single_mut() else {
        return;
    };

    let gust_filter = SpatialQueryFilter::from_mask(GameLayer::Gust);
    let in_gust = !spatial_query
        .point_intersections(position.0, &gust_filter)
        .is_empty();

    if locomotion.0.in_gust() != in_gust {
        locomotion.0.set_gust(in_gust);
    }
}
