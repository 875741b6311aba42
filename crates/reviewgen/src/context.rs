use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Everything a record draw depends on besides the static tables.
///
/// All randomness (including review ids) comes from `rng`, so two contexts
/// built with the same seed and date yield identical datasets.
pub struct GenContext {
    pub rng: StdRng,
    /// Anchor for `datePurchased`; purchases fall within the year before it.
    pub today: NaiveDate,
}

impl GenContext {
    pub fn new(rng: StdRng, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    /// Reproducible context.
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::new(StdRng::seed_from_u64(seed), today)
    }

    /// OS-entropy RNG anchored at the local calendar date.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng(), Local::now().date_naive())
    }

    /// Seeded when `seed` is set, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, Local::now().date_naive()),
            None => Self::from_entropy(),
        }
    }
}
