use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of every random decision made while composing a reply.
/// Injected so tests can pin canned-reply and poem selection.
pub trait RandomSource: Send {
    /// True with probability `p`, clamped to 0.0..=1.0.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Picks one owned option. `options` must be non-empty.
pub fn choose(rng: &mut dyn RandomSource, mut options: Vec<String>) -> String {
    let i = rng.index(options.len());
    options.swap_remove(i)
}

/// Deterministic source for tests: every roll answers `hit`, every pick is `pick`
/// (clamped to the last option).
#[cfg(test)]
pub struct FixedRandom {
    pub hit: bool,
    pub pick: usize,
}

#[cfg(test)]
impl FixedRandom {
    pub fn always() -> Self {
        Self { hit: true, pick: 0 }
    }

    pub fn never() -> Self {
        Self { hit: false, pick: 0 }
    }
}

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn chance(&mut self, p: f64) -> bool {
        if p >= 1.0 {
            return true;
        }
        self.hit && p > 0.0
    }

    fn index(&mut self, len: usize) -> usize {
        self.pick.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = StdRandom::seeded(7);
        let mut b = StdRandom::seeded(7);
        let picks_a: Vec<usize> = (0..20).map(|_| a.index(5)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.index(5)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 5));
    }

    #[test]
    fn test_certain_and_impossible_chances() {
        let mut rng = StdRandom::seeded(1);
        assert!((0..50).all(|_| rng.chance(1.0)));
        assert!((0..50).all(|_| !rng.chance(0.0)));
        // out-of-range probabilities are clamped rather than panicking
        assert!(rng.chance(1.5));
        assert!(!rng.chance(-0.5));
    }

    #[test]
    fn test_fixed_random_always_honours_certain_rolls() {
        let mut rng = FixedRandom::never();
        assert!(rng.chance(1.0));
        assert!(!rng.chance(0.3));
        assert_eq!(rng.index(3), 0);

        let mut rng = FixedRandom { hit: true, pick: 10 };
        assert!(rng.chance(0.3));
        assert_eq!(rng.index(3), 2);
    }

    #[test]
    fn test_choose_returns_indexed_option() {
        let mut rng = FixedRandom { hit: false, pick: 1 };
        let options = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(choose(&mut rng, options), "b");
    }
}
