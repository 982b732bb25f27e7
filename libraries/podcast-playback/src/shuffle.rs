//! Random episode selection for shuffle mode
//!
//! Shuffle does not reorder the queue. Each "next" draws a fresh index from the
//! whole queue, current index included.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index picker
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Create a picker, seeded from OS entropy unless `seed` is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draw an index in `0..len`
    ///
    /// Returns `None` for an empty range. No index is ever excluded, so the draw
    /// may repeat the current episode.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new(None)
    }
}
