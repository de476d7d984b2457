use rand::{Rng, seq::IndexedRandom};

use crate::scenario::error::ScenarioError;

/// Draws a realized demand from a customer's expected demand.
pub trait DemandModel {
    fn realize<R>(&self, expected_demand: f64, rng: &mut R) -> f64
    where
        R: Rng + ?Sized;
}

/// Realizes `expected_demand * k` with `k` drawn uniformly from a fixed set
/// of multipliers. Zero expected demand always realizes to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSpreadDemand {
    multipliers: Vec<f64>,
}

impl DiscreteSpreadDemand {
    pub fn new(multipliers: Vec<f64>) -> Result<Self, ScenarioError> {
        if multipliers.is_empty() {
            return Err(ScenarioError::EmptyMultipliers);
        }

        Ok(Self { multipliers })
    }

    pub fn multipliers(&self) -> &[f64] {
        &self.multipliers
    }
}

impl Default for DiscreteSpreadDemand {
    fn default() -> Self {
        Self {
            multipliers: vec![0.5, 1.0, 1.5],
        }
    }
}

impl DemandModel for DiscreteSpreadDemand {
    fn realize<R>(&self, expected_demand: f64, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        if expected_demand == 0.0 {
            return 0.0;
        }

        match self.multipliers.choose(rng) {
            Some(multiplier) => expected_demand * multiplier,
            None => expected_demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn test_realizations_use_multipliers() {
        let model = DiscreteSpreadDemand::default();
        let mut rng = SmallRng::seed_from_u64(5);

        for _ in 0..200 {
            let demand = model.realize(10.0, &mut rng);
            assert!([5.0, 10.0, 15.0].contains(&demand));
        }
    }

    #[test]
    fn test_zero_expected_demand() {
        let model = DiscreteSpreadDemand::default();
        let mut rng = SmallRng::seed_from_u64(5);

        assert_eq!(model.realize(0.0, &mut rng), 0.0);
    }

    #[test]
    fn test_rejects_empty_multipliers() {
        assert!(matches!(
            DiscreteSpreadDemand::new(vec![]),
            Err(ScenarioError::EmptyMultipliers)
        ));
    }
}
