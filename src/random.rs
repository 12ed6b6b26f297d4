use crate::board::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for players that do not search.
pub trait RandomGenerator {
    /// Returns a number in `from..to`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// A `RandomGenerator` backed by `rand`'s standard generator.
pub struct StandardRandomGenerator {
    rng: StdRng,
}

impl StandardRandomGenerator {
    /// A reproducible generator for tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StandardRandomGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

/// An opponent that plays a uniformly random legal move.
pub struct RandomPlayer<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomPlayer<K> {
    pub fn new(random: K) -> Self {
        Self { random }
    }

    /// Returns a random legal move, or `None` when the board is full.
    pub fn choose_move<B: Board>(&mut self, board: &B) -> Option<B::Move> {
        let moves = board.get_available_moves();
        self.random.choose(&moves).copied()
    }
}

impl Default for RandomPlayer<StandardRandomGenerator> {
    fn default() -> Self {
        RandomPlayer::new(StandardRandomGenerator::default())
    }
}
