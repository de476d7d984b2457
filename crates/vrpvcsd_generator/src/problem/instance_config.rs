use std::{collections::BTreeMap, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::coordinate::Coordinate;

/// Per-instance configuration stamped by the generator.
///
/// Every field falls back to its default when missing from a persisted file.
/// Keys this type does not know are kept in `extra` so that re-writing a
/// loaded collection does not drop them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InstanceConfig {
    pub density_class: u8,
    pub capacity: f64,
    pub duration_limit: f64,
    pub real_duration_limit: f64,
    /// Fleet size.
    pub m: usize,
    /// Number of customer slots, padding included.
    pub n: usize,
    /// Number of real customers.
    pub real_n: usize,
    #[schemars(with = "[i32; 2]")]
    pub depot: Coordinate,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Optional replacements for the fields of an [`InstanceConfig`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceConfigOverrides {
    pub density_class: Option<u8>,
    pub capacity: Option<f64>,
    pub duration_limit: Option<f64>,
    pub real_duration_limit: Option<f64>,
    pub m: Option<usize>,
    pub n: Option<usize>,
    pub real_n: Option<usize>,
    pub depot: Option<Coordinate>,
}

impl InstanceConfig {
    pub fn merge(&mut self, overrides: &InstanceConfigOverrides) {
        if let Some(density_class) = overrides.density_class {
            self.density_class = density_class;
        }

        if let Some(capacity) = overrides.capacity {
            self.capacity = capacity;
        }

        if let Some(duration_limit) = overrides.duration_limit {
            self.duration_limit = duration_limit;
        }

        if let Some(real_duration_limit) = overrides.real_duration_limit {
            self.real_duration_limit = real_duration_limit;
        }

        if let Some(m) = overrides.m {
            self.m = m;
        }

        if let Some(n) = overrides.n {
            self.n = n;
        }

        if let Some(real_n) = overrides.real_n {
            self.real_n = real_n;
        }

        if let Some(depot) = overrides.depot {
            self.depot = depot;
        }
    }

    /// Deep copy of `self` with `overrides` applied; `self` is left untouched.
    pub fn with_overrides(&self, overrides: &InstanceConfigOverrides) -> Self {
        let mut config = self.clone();
        config.merge(overrides);
        config
    }
}

impl fmt::Display for InstanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "density_class: {}, capacity: {}, duration_limit: {}, real_duration_limit: {}, m: {}, n: {}, real_n: {}, depot: {}",
            self.density_class,
            self.capacity,
            self.duration_limit,
            self.real_duration_limit,
            self.m,
            self.n,
            self.real_n,
            self.depot,
        )?;

        for (key, value) in &self.extra {
            write!(f, ", {key}: {value}")?;
        }

        Ok(())
    }
}
