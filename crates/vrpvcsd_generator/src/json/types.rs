use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{instance::Instance, instance_config::InstanceConfig};

/// One record of a persisted instance collection.
///
/// Rows are kept as raw numeric arrays because older files prefix every row
/// with an index column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Instance")]
pub struct JsonInstance {
    #[serde(rename = "Vehicles")]
    pub vehicles: Vec<Vec<f64>>,

    #[serde(rename = "Customers")]
    pub customers: Vec<Vec<f64>>,

    #[serde(rename = "Config")]
    pub config: InstanceConfig,

    /// Instance name, or the record position in older files.
    #[serde(rename = "Name", default)]
    pub name: serde_json::Value,
}

impl From<&Instance> for JsonInstance {
    /// Writes rows with a leading index column, so the first vehicle row
    /// always starts with 0 and the layout is detected unambiguously.
    fn from(instance: &Instance) -> Self {
        let indexed = |index: usize, row: &[f64]| {
            std::iter::once(index as f64)
                .chain(row.iter().copied())
                .collect::<Vec<_>>()
        };

        JsonInstance {
            vehicles: instance
                .vehicles()
                .iter()
                .enumerate()
                .map(|(index, vehicle)| indexed(index, &vehicle.to_row()))
                .collect(),
            customers: instance
                .customers()
                .iter()
                .enumerate()
                .map(|(index, customer)| indexed(index, &customer.to_row()))
                .collect(),
            config: instance.config().clone(),
            name: serde_json::Value::String(instance.name().to_owned()),
        }
    }
}
