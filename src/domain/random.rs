use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
///
/// Every decorative generator (ticker walk, chart series, starfield) takes one
/// of these instead of calling `Math.random` so the math stays testable natively.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform sample centred on zero: `(r - 0.5) * span`.
    fn centered(&mut self, span: f64) -> f64 {
        (self.next_f64() - 0.5) * span
    }
}

/// Seeded stream for reproducible demos and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.5;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}
