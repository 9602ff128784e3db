use rand::Rng;

/// Source of randomness for exercise selection.
///
/// Implemented for every [`rand::Rng`], so a seeded `StdRng` yields reproducible plans.
pub trait RandomSource {
    /// Returns an index in `0..upper`. `upper` is always positive.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Fisher–Yates shuffle driven by `source`.
pub fn shuffle<T, S: RandomSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1).min(i);
        items.swap(i, j);
    }
}
