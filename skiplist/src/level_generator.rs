use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// /////////////////////////////////////////////////////////////////////////////////////////////////
// Level Generator
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// Upon the insertion of a new node in the list, the node is replicated to high levels with a
/// certain probability as determined by a `LevelGenerator`.
///
/// The `total()` reflects the total number of levels, and `random()` should produce an integer in
/// the range `[0, total)` with the desired probability distribution.
///
/// The most commonly used probability distribution is a geometrical distribution, whereby the
/// chance that a node occupies level `n` is `p` times as likely as occupying level `n-1`.
/// Typically, `p` is equal to 1/2, though over values can be used which will trade speed against
/// memory.
///
/// Any implementation can be handed to
/// [`SkipList::with_level_generator`](crate::SkipList::with_level_generator), which is how tests
/// pin node heights.
pub trait LevelGenerator {
    fn random(&mut self) -> usize;
    fn total(&self) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator<R = SmallRng> {
    total: usize,
    p: f64,
    rng: R,
}

impl GeometricalLevelGenerator<SmallRng> {
    /// Create a new GeometricalLevelGenerator with `total` number of levels, and `p` as the
    /// probability that a given node is present in the next level.  The generator is seeded
    /// from the current time.
    ///
    /// # Panics
    ///
    /// `p` must be between 0 and 1 and will panic otherwise.  Similarly, `total` must be at
    /// greater or equal to 1.
    pub fn new(total: usize, p: f64) -> Self {
        Self::with_seed(total, p, util::ustime() as u64)
    }

    /// Same as `new`, but the sequence of levels is fully determined by `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skiplist::{GeometricalLevelGenerator, LevelGenerator};
    ///
    /// let mut a = GeometricalLevelGenerator::with_seed(8, 0.5, 7);
    /// let mut b = GeometricalLevelGenerator::with_seed(8, 0.5, 7);
    /// for _ in 0..100 {
    ///     assert_eq!(a.random(), b.random());
    /// }
    /// ```
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Self {
        Self::with_rng(total, p, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GeometricalLevelGenerator<R> {
    /// Builds a generator drawing its coin flips from `rng`.
    ///
    /// # Panics
    ///
    /// Same conditions as `new`.
    pub fn with_rng(total: usize, p: f64, rng: R) -> Self {
        if total == 0 {
            panic!("total must be non-zero.");
        }
        if p <= 0.0 || p >= 1.0 {
            panic!("p must be in (0, 1).");
        }
        GeometricalLevelGenerator { total, p, rng }
    }
}

impl<R: Rng> LevelGenerator for GeometricalLevelGenerator<R> {
    fn random(&mut self) -> usize {
        let mut h = 0;
        while h + 1 < self.total && self.rng.gen_bool(self.p) {
            h += 1;
        }
        h
    }

    fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::{GeometricalLevelGenerator, LevelGenerator};

    use rand::rngs::{SmallRng, StdRng};
    use rand::SeedableRng;

    #[test]
    fn stays_in_range() {
        let mut lg = GeometricalLevelGenerator::with_seed(4, 0.5, 1);
        for _ in 0..10_000 {
            assert!(lg.random() < lg.total());
        }
    }

    #[test]
    fn injected_rng() {
        let mut lg = GeometricalLevelGenerator::with_rng(6, 0.5, StdRng::seed_from_u64(5));
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let h = lg.random();
            assert!(h < 6);
            seen[h] = true;
        }
        assert!(seen.iter().all(|&s| s));

        let mut a = GeometricalLevelGenerator::with_rng(6, 0.25, SmallRng::seed_from_u64(11));
        let mut b = GeometricalLevelGenerator::with_seed(6, 0.25, 11);
        for _ in 0..1000 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    #[should_panic]
    fn injected_rng_zero_levels() {
        GeometricalLevelGenerator::with_rng(0, 0.5, StdRng::seed_from_u64(1));
    }

    #[test]
    fn single_level() {
        let mut lg = GeometricalLevelGenerator::new(1, 0.5);
        for _ in 0..100 {
            assert_eq!(lg.random(), 0);
        }
    }

    #[test]
    fn geometric_shape() {
        let mut lg = GeometricalLevelGenerator::with_seed(32, 0.5, 99);
        let samples = 100_000;
        let mut counts = [0usize; 32];
        for _ in 0..samples {
            counts[lg.random()] += 1;
        }
        // roughly half the nodes stop at each level
        assert!(counts[0] > samples * 2 / 5 && counts[0] < samples * 3 / 5);
        assert!(counts[1] > samples / 5 && counts[1] < samples * 3 / 10);
        assert!(counts[0] > counts[1] && counts[1] > counts[2] && counts[2] > counts[3]);
    }

    #[test]
    #[should_panic]
    fn zero_levels() {
        GeometricalLevelGenerator::new(0, 0.5);
    }

    #[test]
    #[should_panic]
    fn bad_probability() {
        GeometricalLevelGenerator::new(4, 1.0);
    }
}
