//! Initial status selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sale::SaleStatus;

/// Source of the initial status assigned to a new sale.
pub trait StatusSource: Send {
    fn pick(&mut self) -> SaleStatus;
}

impl<S> StatusSource for Box<S>
where
    S: StatusSource + ?Sized,
{
    fn pick(&mut self) -> SaleStatus {
        (**self).pick()
    }
}

/// Uniform choice over every [`SaleStatus`].
#[derive(Debug, Clone)]
pub struct RandomStatus {
    rng: StdRng,
}

impl RandomStatus {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStatus {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl StatusSource for RandomStatus {
    fn pick(&mut self) -> SaleStatus {
        SaleStatus::ALL[self.rng.gen_range(0..SaleStatus::ALL.len())]
    }
}

/// Always the same status.
#[derive(Debug, Clone, Copy)]
pub struct FixedStatus(pub SaleStatus);

impl StatusSource for FixedStatus {
    fn pick(&mut self) -> SaleStatus {
        self.0
    }
}
