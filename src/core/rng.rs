//! Deterministic random number generation for dealing levels.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Portable**: ChaCha8 output does not depend on platform or word size
//!
//! ```
//! use tray_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left: Vec<u32> = (0..10).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used by the level dealer.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
