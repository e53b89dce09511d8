/// A single grid cell: a colour and whether the cell is occupied at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Voxel {
    pub rgb: [u8; 3],
    pub is_empty: bool,
}

impl Voxel {
    pub const EMPTY: Voxel = Voxel { rgb: [0, 0, 0], is_empty: true };

    pub const fn solid(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b], is_empty: false }
    }

    // faux shading: every axis index halves the brightness once more
    pub fn shaded(&self, side: usize) -> [u8; 3] {
        [self.rgb[0] >> side, self.rgb[1] >> side, self.rgb[2] >> side]
    }
}

impl Default for Voxel {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shading_shifts_each_channel_by_side() {
        let v = Voxel::solid(255, 128, 7);
        assert_eq!(v.shaded(0), [255, 128, 7]);
        assert_eq!(v.shaded(1), [127, 64, 3]);
        assert_eq!(v.shaded(2), [63, 32, 1]);
    }

    #[test]
    fn default_is_empty() {
        assert!(Voxel::default().is_empty);
    }
}
