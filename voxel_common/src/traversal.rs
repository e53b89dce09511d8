use glam::{IVec3, Vec3};
use crate::ray::{CollisionInfo, Ray};
use crate::volume::VoxelVolume;
use crate::voxel::Voxel;

/// Walks `ray` through a cubic grid of side `dim` one cell boundary at a time
/// and stops at the first non-empty voxel or when the ray leaves the grid.
///
/// `volume` is indexed `z * dim * dim + y * dim + x`. The ray origin must lie
/// in the non-negative octant, inside the grid or on its boundary: the start
/// cell is found by truncation, which only agrees with `floor` there.
/// Direction components may be zero; such an axis is never stepped.
pub fn get_intersection(ray: &Ray, volume: &[Voxel], dim: i32) -> CollisionInfo {
    debug_assert!(dim > 0 && dim <= VoxelVolume::MAX_DIM);
    debug_assert_eq!(volume.len(), (dim * dim * dim) as usize);
    debug_assert!(ray.direction != Vec3::ZERO);

    let origin = ray.origin.to_array();
    let direction = ray.direction.to_array();

    let mut map = [origin[0] as i32, origin[1] as i32, origin[2] as i32];
    debug_assert!(map.iter().all(|m| (0..=dim).contains(m)));

    // distance to the next boundary on each axis and the distance between
    // two boundaries, both measured along the ray
    let mut impact = [f32::INFINITY; 3];
    let mut delta_dist = [f32::INFINITY; 3];
    let mut step = [1i32; 3];
    for i in 0..3 {
        if direction[i] == 0.0 {
            continue;
        }
        let x = direction[0] / direction[i];
        let y = direction[1] / direction[i];
        let z = direction[2] / direction[i];
        delta_dist[i] = (x * x + y * y + z * z).sqrt();
        if direction[i] < 0.0 {
            step[i] = -1;
            impact[i] = (origin[i] - map[i] as f32) * delta_dist[i];
        } else {
            impact[i] = (map[i] as f32 + 1.0 - origin[i]) * delta_dist[i];
        }
    }

    let mut steps = 0;
    let (side, voxel) = loop {
        // lowest axis wins ties
        let mut side = 0;
        for i in 1..3 {
            if impact[side] > impact[i] {
                side = i;
            }
        }
        impact[side] += delta_dist[side];
        map[side] += step[side];
        steps += 1;
        if map[side] < 0 || map[side] >= dim {
            break (side, Voxel::EMPTY);
        }

        let sample = volume[(map[2] * dim * dim + map[1] * dim + map[0]) as usize];
        if !sample.is_empty {
            break (side, sample);
        }
    };

    CollisionInfo {
        impact: Vec3::from_array(impact),
        delta: Vec3::from_array(delta_dist),
        side,
        cell: IVec3::from_array(map),
        steps,
        voxel,
    }
}

impl VoxelVolume {
    pub fn intersect(&self, ray: &Ray) -> CollisionInfo {
        get_intersection(ray, self.voxels(), self.dim())
    }
}
