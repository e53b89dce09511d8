use glam::{IVec3, Vec3};
use crate::voxel::Voxel;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// Result of walking one ray through the grid.
///
/// `impact` holds the accumulated per-axis distances along the ray, already
/// advanced past the boundary that was crossed last. `side` is the axis of
/// that crossing (0 = x, 1 = y, 2 = z) and `voxel` a copy of the cell it led
/// into, or [`Voxel::EMPTY`] when the ray left the grid.
#[derive(Clone, Copy, Debug)]
pub struct CollisionInfo {
    pub impact: Vec3,
    pub delta: Vec3,
    pub side: usize,
    pub cell: IVec3,
    pub steps: u32,
    pub voxel: Voxel,
}

impl CollisionInfo {
    pub fn is_hit(&self) -> bool {
        !self.voxel.is_empty
    }

    /// Distance along the ray to the face that was crossed on the last step.
    pub fn distance(&self) -> f32 {
        self.impact[self.side] - self.delta[self.side]
    }

    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.origin + ray.direction.normalize() * self.distance()
    }
}
