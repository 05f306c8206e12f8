/// Linear congruential generator using the POSIX `rand()` constants.
///
/// Every draw advances the state, so two generators created from the same seed
/// produce the same infinite sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new(Lcg::DEFAULT_SEED)
    }
}

impl Lcg {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;
    pub const DEFAULT_SEED: u32 = 12_345;

    pub fn new(seed: u32) -> Self {
        Lcg { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }

    /// Returns a value in `[min, max]`. If `max < min` the state still advances and `min`
    /// is returned.
    pub fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(Lcg::MULTIPLIER)
            .wrapping_add(Lcg::INCREMENT);
        if max < min {
            return min;
        }
        // Drop the low 16 bits, they cycle with a short period in this family of generator
        let high = (self.seed >> 16) as i64;
        let span = max as i64 - min as i64 + 1;
        (min as i64 + high % span) as i32
    }
}
