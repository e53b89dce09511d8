use glam::Vec3;
use thiserror::Error;
use crate::util_funcs::{random_color, random_range_i32, seeded_rng};
use crate::voxel::Voxel;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VolumeError {
    #[error("volume dimension must be in 1..={max}, got {0}", max = VoxelVolume::MAX_DIM)]
    InvalidDimension(i32),
    #[error("volume of dimension {dim} needs {expected} voxels, got {actual}")]
    SizeMismatch { dim: i32, expected: usize, actual: usize },
}

/// A cubic block of voxels stored flat in z, y, x order.
pub struct VoxelVolume {
    dim: i32,
    voxels: Vec<Voxel>,
}

impl VoxelVolume {
    // largest side whose cell count, and so every flat index, fits in an i32
    pub const MAX_DIM: i32 = 1290;

    pub fn valid_dim(dim: i32) -> bool {
        (1..=Self::MAX_DIM).contains(&dim)
    }

    pub fn empty(dim: i32) -> Result<Self, VolumeError> {
        Self::from_fn(dim, |_, _, _| Voxel::EMPTY)
    }

    pub fn from_fn<F>(dim: i32, mut f: F) -> Result<Self, VolumeError>
    where
        F: FnMut(i32, i32, i32) -> Voxel,
    {
        if !Self::valid_dim(dim) {
            return Err(VolumeError::InvalidDimension(dim));
        }
        let mut voxels = Vec::with_capacity((dim * dim * dim) as usize);
        for z in 0..dim {
            for y in 0..dim {
                for x in 0..dim {
                    voxels.push(f(x, y, z));
                }
            }
        }
        Ok(Self { dim, voxels })
    }

    pub fn from_voxels(dim: i32, voxels: Vec<Voxel>) -> Result<Self, VolumeError> {
        if !Self::valid_dim(dim) {
            return Err(VolumeError::InvalidDimension(dim));
        }
        let expected = (dim as usize).pow(3);
        if voxels.len() != expected {
            return Err(VolumeError::SizeMismatch { dim, expected, actual: voxels.len() });
        }
        Ok(Self { dim, voxels })
    }

    // an open-topped room: coloured walls, a checkered floor at the bottom
    // of the view (+y) and random pillars standing on it
    pub fn demo(dim: i32, seed: Option<u64>) -> Result<Self, VolumeError> {
        let last = dim - 1;
        let mut volume = Self::from_fn(dim, |x, y, z| {
            if y == last {
                if (x + z) % 2 == 0 { Voxel::solid(160, 160, 160) } else { Voxel::solid(96, 96, 96) }
            } else if x == 0 {
                Voxel::solid(200, 64, 64)
            } else if x == last {
                Voxel::solid(64, 200, 64)
            } else if z == 0 {
                Voxel::solid(64, 64, 200)
            } else if z == last {
                Voxel::solid(200, 200, 64)
            } else {
                Voxel::EMPTY
            }
        })?;

        if dim < 5 {
            return Ok(volume);
        }

        let mut rng = seeded_rng(seed);
        let centre = dim / 2;
        for _ in 0..dim / 2 {
            let x = random_range_i32(&mut rng, 1, last);
            let z = random_range_i32(&mut rng, 1, last);
            // the camera starts in the centre column
            if (x - centre).abs() <= 1 && (z - centre).abs() <= 1 {
                continue;
            }
            let height = random_range_i32(&mut rng, 1, dim / 2 + 1);
            let [r, g, b] = random_color(&mut rng);
            for y in (last - height)..last {
                volume.set(x, y, z, Voxel::solid(r, g, b));
            }
        }
        Ok(volume)
    }

    pub fn dim(&self) -> i32 {
        self.dim
    }

    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.voxels.len() * std::mem::size_of::<Voxel>()
    }

    #[inline]
    pub fn index(&self, x: i32, y: i32, z: i32) -> usize {
        (z * self.dim * self.dim + y * self.dim + x) as usize
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<&Voxel> {
        if self.in_range(x, y, z) {
            self.voxels.get(self.index(x, y, z))
        } else {
            None
        }
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) {
        if self.in_range(x, y, z) {
            let idx = self.index(x, y, z);
            self.voxels[idx] = voxel;
        }
    }

    /// Whether a world-space point lies in `[0, dim)` on every axis.
    pub fn contains(&self, position: Vec3) -> bool {
        let dim = self.dim as f32;
        position.cmpge(Vec3::ZERO).all() && position.cmplt(Vec3::splat(dim)).all()
    }

    fn in_range(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.dim).contains(&x) && (0..self.dim).contains(&y) && (0..self.dim).contains(&z)
    }
}
