use rand::prelude::*;

/// Source of the winner position for each round.
pub trait IndexSource {
    /// Returns an index in `0..bound`, `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<F> IndexSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, bound: usize) -> usize {
        self(bound)
    }
}

/// Uniform index source backed by a seeded small RNG, the same seed always replays the same rounds.
#[derive(Clone, Debug)]
pub struct SeededIndexSource {
    seed: u64,
    rng: SmallRng,
}

impl SeededIndexSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl IndexSource for SeededIndexSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
