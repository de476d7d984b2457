use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{problem::instance::Instance, scenario::demand_model::DemandModel};

/// One realized demand per customer slot, padding included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario(Vec<f64>);

impl Scenario {
    pub fn new(demands: Vec<f64>) -> Self {
        Self(demands)
    }

    pub fn demands(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Persisted as a flat JSON array of arrays, one inner array per scenario.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioBatch(Vec<Scenario>);

impl ScenarioBatch {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self(scenarios)
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct ScenarioSampler<M> {
    model: M,
}

impl<M> ScenarioSampler<M>
where
    M: DemandModel,
{
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Draws `count` independent scenarios. Rows at or past `real_n` realize
    /// to zero without consulting the demand model, whatever they hold.
    pub fn sample<R>(&self, instance: &Instance, count: usize, rng: &mut R) -> ScenarioBatch
    where
        R: Rng,
    {
        let real_n = instance.config().real_n;
        let scenarios = (0..count)
            .map(|_| {
                Scenario::new(
                    instance
                        .customers()
                        .iter()
                        .enumerate()
                        .map(|(index, customer)| {
                            if index >= real_n {
                                0.0
                            } else {
                                self.model.realize(customer.expected_demand(), rng)
                            }
                        })
                        .collect(),
                )
            })
            .collect();

        debug!(instance = instance.name(), count, "sampled scenarios");

        ScenarioBatch::new(scenarios)
    }
}
