// Generator context: the explicitly-passed random source consumed by the
// message and content generators. Holding the RNG here (instead of reaching
// for a process-global one) lets tests seed it and replay a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct GeneratorContext {
    rng: StdRng,
}

impl GeneratorContext {
    /// Context seeded from OS entropy; the production path.
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Context with a fixed seed. Two contexts built from the same seed
    /// produce identical message and content selections.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
