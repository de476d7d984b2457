use rand::Rng;

use crate::{
    generator::{error::GenerationError, generation_params::SlotSizes},
    problem::{
        customer::Customer, instance::Instance, instance_config::InstanceConfig,
        vehicle::Vehicle,
    },
};

/// Lays sampled customers and the fleet out into fixed-size arrays.
pub struct InstanceAssembler {
    sizes: SlotSizes,
}

impl InstanceAssembler {
    pub fn new(sizes: SlotSizes) -> Self {
        Self { sizes }
    }

    /// Builds an instance from a config whose `m`, `capacity`, `depot` and
    /// `density_class` are already set. Stamps `n` and `real_n`.
    pub fn assemble<R>(
        &self,
        mut config: InstanceConfig,
        sampled: Vec<Customer>,
        rng: &mut R,
    ) -> Result<Instance, GenerationError>
    where
        R: Rng,
    {
        let SlotSizes {
            max_c_size,
            max_v_size,
        } = self.sizes;

        if sampled.len() > max_c_size {
            return Err(GenerationError::CustomersExceedSlots {
                customers: sampled.len(),
                customer_slots: max_c_size,
            });
        }

        if config.m > max_v_size {
            return Err(GenerationError::FleetExceedsVehicleSlots {
                fleet_size: config.m,
                vehicle_slots: max_v_size,
            });
        }

        let real_n = sampled.len();
        let mut customers = sampled;
        customers.resize(max_c_size, Customer::PADDING);

        let mut vehicles = vec![Vehicle::default(); max_v_size];
        for vehicle in vehicles.iter_mut().take(config.m) {
            *vehicle = Vehicle::at_depot(config.depot, config.capacity, max_c_size);
        }

        config.n = max_c_size;
        config.real_n = real_n;

        let name = instance_name(&config, rng);

        Ok(Instance::new(name, config, vehicles, customers))
    }
}

/// `I_{class}_{m}_{capacity}_{suffix}` with a random six digit suffix.
/// Names may collide across calls.
fn instance_name<R>(config: &InstanceConfig, rng: &mut R) -> String
where
    R: Rng,
{
    format!(
        "I_{}_{}_{}_{}",
        config.density_class,
        config.m,
        config.capacity,
        rng.random_range(100_000..=999_999)
    )
}
