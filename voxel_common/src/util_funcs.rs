use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn random_range_i32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..max)
}

// keeps every channel above 64 so the darkest shaded face is still visible
pub fn random_color<R: Rng>(rng: &mut R) -> [u8; 3] {
    [rng.gen_range(64..=255), rng.gen_range(64..=255), rng.gen_range(64..=255)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        for _ in 0..16 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }

    #[test]
    fn range_is_half_open() {
        let mut rng = seeded_rng(Some(1));
        for _ in 0..100 {
            let v = random_range_i32(&mut rng, 2, 5);
            assert!((2..5).contains(&v));
        }
    }
}
