use rand::{Rng, seq::IndexedRandom};

use crate::generator::error::GenerationError;

/// One outcome of the per-partition customer count distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountOutcome {
    pub customers: usize,
    pub probability: f64,
}

impl CountOutcome {
    pub const fn new(customers: usize, probability: f64) -> Self {
        Self {
            customers,
            probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DensityClassParams {
    class: u8,
    nbar: usize,
    fleet_size: usize,
    duration_limit: f64,
    count_distribution: Vec<CountOutcome>,
}

impl DensityClassParams {
    pub fn new(
        class: u8,
        nbar: usize,
        fleet_size: usize,
        duration_limit: f64,
        count_distribution: Vec<CountOutcome>,
    ) -> Result<Self, GenerationError> {
        let invalid = |reason: &str| GenerationError::InvalidCountDistribution {
            class,
            reason: reason.to_owned(),
        };

        if count_distribution.is_empty() {
            return Err(invalid("no outcomes"));
        }

        if count_distribution
            .iter()
            .any(|outcome| !outcome.probability.is_finite() || outcome.probability < 0.0)
        {
            return Err(invalid("probabilities must be finite and non-negative"));
        }

        if count_distribution
            .iter()
            .map(|outcome| outcome.probability)
            .sum::<f64>()
            <= 0.0
        {
            return Err(invalid("probabilities sum to zero"));
        }

        Ok(Self {
            class,
            nbar,
            fleet_size,
            duration_limit,
            count_distribution,
        })
    }

    pub fn class(&self) -> u8 {
        self.class
    }

    /// Expected number of customers.
    pub fn nbar(&self) -> usize {
        self.nbar
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    pub fn duration_limit(&self) -> f64 {
        self.duration_limit
    }

    pub fn count_distribution(&self) -> &[CountOutcome] {
        &self.count_distribution
    }

    /// `floor(1.2 * nbar)`, computed in integers.
    pub fn customer_limit(&self) -> usize {
        self.nbar * 6 / 5
    }

    /// Draws the number of customers placed into one active partition.
    pub fn draw_count<R>(&self, rng: &mut R) -> Result<usize, GenerationError>
    where
        R: Rng + ?Sized,
    {
        self.count_distribution
            .choose_weighted(rng, |outcome| outcome.probability)
            .map(|outcome| outcome.customers)
            .map_err(|err| GenerationError::InvalidCountDistribution {
                class: self.class,
                reason: err.to_string(),
            })
    }
}

/// Static parameters of the density classes, indexed by ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityClassTable {
    classes: Vec<DensityClassParams>,
}

impl DensityClassTable {
    pub fn new(classes: Vec<DensityClassParams>) -> Self {
        Self { classes }
    }

    pub fn get(&self, class: u8) -> Result<&DensityClassParams, GenerationError> {
        self.classes
            .get(usize::from(class))
            .ok_or(GenerationError::UnknownDensityClass {
                class,
                available: self.classes.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DensityClassParams> {
        self.classes.iter()
    }
}

impl Default for DensityClassTable {
    /// Very low, low, moderate, high and very high density.
    fn default() -> Self {
        let class = |class: u8,
                     nbar: usize,
                     fleet_size: usize,
                     duration_limit: f64,
                     outcomes: &[(usize, f64)]| {
            DensityClassParams {
                class,
                nbar,
                fleet_size,
                duration_limit,
                count_distribution: outcomes
                    .iter()
                    .map(|&(customers, probability)| CountOutcome::new(customers, probability))
                    .collect(),
            }
        };

        Self::new(vec![
            class(0, 10, 2, 143.71, &[(0, 1.0 / 2.0), (1, 1.0 / 3.0), (2, 1.0 / 6.0)]),
            class(1, 15, 2, 201.38, &[(0, 1.0 / 3.0), (1, 1.0 / 3.0), (2, 1.0 / 3.0)]),
            class(2, 23, 3, 221.47, &[(0, 0.1), (1, 0.4), (2, 0.4), (3, 0.1)]),
            class(3, 53, 7, 195.54, &[(2, 0.1), (3, 0.4), (4, 0.4), (5, 0.1)]),
            class(4, 83, 11, 187.29, &[(4, 0.1), (5, 0.4), (6, 0.4), (7, 0.1)]),
        ])
    }
}
