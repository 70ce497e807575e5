use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Which subset of the dataset a record lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test => write!(f, "test"),
        }
    }
}

/// Per-record train/test assignment: one uniform draw in `[0,1)` per record,
/// test if the draw is below the configured percentage. This is a per-file
/// coin flip, not stratified sampling. The randomness source is injectable so
/// tests can supply a fixed seed or a deterministic generator.
pub struct SplitSampler<R: Rng> {
    rng: R,
    percentage_test: f64,
}

impl SplitSampler<StdRng> {
    pub fn from_seed(seed: u64, percentage_test: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), percentage_test)
    }
}

impl<R: Rng> SplitSampler<R> {
    pub fn with_rng(rng: R, percentage_test: f64) -> Self {
        Self {
            rng,
            percentage_test,
        }
    }

    pub fn draw(&mut self) -> Split {
        if self.rng.gen::<f64>() < self.percentage_test {
            Split::Test
        } else {
            Split::Train
        }
    }
}
