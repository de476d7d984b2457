use rand::{Rng, SeedableRng, rngs::SmallRng};

/// The two independent random streams used during generation.
///
/// `uniform` drives coordinates, expected demands, class and capacity choice
/// and the name suffix. `discrete` drives the per-partition customer counts.
#[derive(Debug, Clone)]
pub struct RandomSources<R> {
    pub uniform: R,
    pub discrete: R,
}

impl<R: Rng> RandomSources<R> {
    pub fn new(uniform: R, discrete: R) -> Self {
        Self { uniform, discrete }
    }
}

impl RandomSources<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            uniform: SmallRng::seed_from_u64(seed),
            discrete: SmallRng::seed_from_u64(seed.wrapping_add(0x9E37_79B9_7F4A_7C15)),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            uniform: SmallRng::from_os_rng(),
            discrete: SmallRng::from_os_rng(),
        }
    }
}
