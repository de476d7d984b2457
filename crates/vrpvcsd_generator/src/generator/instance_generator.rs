use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, info, instrument};

use crate::{
    generator::{
        density_class::DensityClassTable,
        error::GenerationError,
        generation_params::{GenerationParams, SamplerSettings},
        instance_assembler::InstanceAssembler,
        partition_grid::PartitionGrid,
        random_sources::RandomSources,
        spatial_partition_sampler::SpatialPartitionSampler,
    },
    problem::{
        instance::Instance,
        instance_config::{InstanceConfig, InstanceConfigOverrides},
    },
};

/// Generation entry point. Owns the density table, the partition grid and
/// the sampler settings used for every instance it produces.
#[derive(Debug, Clone, Default)]
pub struct InstanceGenerator {
    table: DensityClassTable,
    grid: PartitionGrid,
    settings: SamplerSettings,
}

impl InstanceGenerator {
    pub fn new(table: DensityClassTable, grid: PartitionGrid, settings: SamplerSettings) -> Self {
        Self {
            table,
            grid,
            settings,
        }
    }

    pub fn table(&self) -> &DensityClassTable {
        &self.table
    }

    pub fn grid(&self) -> &PartitionGrid {
        &self.grid
    }

    pub fn settings(&self) -> &SamplerSettings {
        &self.settings
    }

    /// Generates `params.count` instances. `template` is cloned for each
    /// instance and never modified.
    #[instrument(skip_all, level = "debug", fields(count = params.count))]
    pub fn generate<R>(
        &self,
        template: &InstanceConfig,
        params: &GenerationParams,
        rngs: &mut RandomSources<R>,
    ) -> Result<Vec<Instance>, GenerationError>
    where
        R: Rng,
    {
        let sizes = params.resolve(&self.table)?;
        if self.settings.expected_demands.is_empty() {
            return Err(GenerationError::EmptyExpectedDemands);
        }

        let sampler = SpatialPartitionSampler::new(&self.grid, &self.settings);
        let assembler = InstanceAssembler::new(sizes);

        let mut instances = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let class = *params
                .density_class_list
                .choose(&mut rngs.uniform)
                .ok_or(GenerationError::EmptyDensityClassList)?;
            let capacity = *params
                .capacity_list
                .choose(&mut rngs.uniform)
                .ok_or(GenerationError::EmptyCapacityList)?;

            let class_params = self.table.get(class)?;
            let config = template.with_overrides(&InstanceConfigOverrides {
                density_class: Some(class),
                capacity: Some(capacity),
                duration_limit: Some(class_params.duration_limit()),
                real_duration_limit: Some(class_params.duration_limit()),
                m: Some(class_params.fleet_size()),
                ..InstanceConfigOverrides::default()
            });

            let customer_limit = class_params.customer_limit().min(sizes.max_c_size);
            let customers = sampler.sample(class_params, customer_limit, config.depot, rngs)?;
            let instance = assembler.assemble(config, customers, &mut rngs.uniform)?;

            debug!(
                name = instance.name(),
                density_class = class,
                real_n = instance.config().real_n,
                "generated instance"
            );

            instances.push(instance);
        }

        info!(
            count = instances.len(),
            max_c_size = sizes.max_c_size,
            max_v_size = sizes.max_v_size,
            "generated instances"
        );

        Ok(instances)
    }
}
