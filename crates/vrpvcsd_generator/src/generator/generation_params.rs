use serde::{Deserialize, Serialize};

use crate::generator::{density_class::DensityClassTable, error::GenerationError};

/// Options of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationParams {
    pub density_class_list: Vec<u8>,
    pub capacity_list: Vec<f64>,
    pub count: usize,
    /// Customer slots per instance, defaults to `floor(1.2 * nbar)` of the
    /// largest requested density class.
    #[serde(default)]
    pub max_c_size: Option<usize>,
    /// Vehicle slots per instance, defaults to the fleet size of the largest
    /// requested density class.
    #[serde(default)]
    pub max_v_size: Option<usize>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            density_class_list: vec![0],
            capacity_list: vec![50.0],
            count: 1,
            max_c_size: None,
            max_v_size: None,
        }
    }
}

/// Array sizes of every instance in a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSizes {
    pub max_c_size: usize,
    pub max_v_size: usize,
}

impl GenerationParams {
    /// Checks the options against `table` and resolves the array sizes.
    pub fn resolve(&self, table: &DensityClassTable) -> Result<SlotSizes, GenerationError> {
        if self.capacity_list.is_empty() {
            return Err(GenerationError::EmptyCapacityList);
        }

        let largest = self
            .density_class_list
            .iter()
            .max()
            .copied()
            .ok_or(GenerationError::EmptyDensityClassList)?;
        let largest = table.get(largest)?;

        let sizes = SlotSizes {
            max_c_size: self.max_c_size.unwrap_or_else(|| largest.customer_limit()),
            max_v_size: self.max_v_size.unwrap_or_else(|| largest.fleet_size()),
        };

        for &class in &self.density_class_list {
            let fleet_size = table.get(class)?.fleet_size();
            if fleet_size > sizes.max_v_size {
                return Err(GenerationError::FleetExceedsVehicleSlots {
                    fleet_size,
                    vehicle_slots: sizes.max_v_size,
                });
            }
        }

        Ok(sizes)
    }
}

/// Settings of the spatial sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerSettings {
    /// Coordinate draws allowed per customer before a partition is
    /// considered exhausted.
    pub max_placement_attempts: usize,
    pub expected_demands: Vec<f64>,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            max_placement_attempts: 1000,
            expected_demands: vec![5.0, 10.0, 15.0],
        }
    }
}
