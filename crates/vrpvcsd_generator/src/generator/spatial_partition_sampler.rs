use fxhash::FxHashSet;
use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, warn};

use crate::{
    generator::{
        density_class::DensityClassParams,
        error::GenerationError,
        generation_params::SamplerSettings,
        partition_grid::{Partition, PartitionGrid},
        random_sources::RandomSources,
    },
    problem::{coordinate::Coordinate, customer::Customer},
};

/// Places customers into the active cells of a [`PartitionGrid`].
///
/// Cells are scanned in row-major order and the scan stops as soon as
/// `customer_limit` customers exist, so cells late in the scan may never be
/// visited. All coordinates, the depot included, are distinct.
pub struct SpatialPartitionSampler<'a> {
    grid: &'a PartitionGrid,
    settings: &'a SamplerSettings,
}

impl<'a> SpatialPartitionSampler<'a> {
    pub fn new(grid: &'a PartitionGrid, settings: &'a SamplerSettings) -> Self {
        Self { grid, settings }
    }

    pub fn sample<R>(
        &self,
        density_class: &DensityClassParams,
        customer_limit: usize,
        depot: Coordinate,
        rngs: &mut RandomSources<R>,
    ) -> Result<Vec<Customer>, GenerationError>
    where
        R: Rng,
    {
        if self.settings.expected_demands.is_empty() {
            return Err(GenerationError::EmptyExpectedDemands);
        }

        let mut taken = FxHashSet::default();
        taken.insert(depot);

        let mut customers = Vec::with_capacity(customer_limit);

        'scan: for partition in self.grid.partitions() {
            if customers.len() >= customer_limit {
                break;
            }

            if !partition.is_active() {
                continue;
            }

            let count = density_class.draw_count(&mut rngs.discrete)?;
            for _ in 0..count {
                let position = self.place(&partition, &taken, &mut rngs.uniform)?;
                taken.insert(position);

                let demand = self
                    .settings
                    .expected_demands
                    .choose(&mut rngs.uniform)
                    .copied()
                    .ok_or(GenerationError::EmptyExpectedDemands)?;

                customers.push(Customer::realized(position, demand));

                if customers.len() >= customer_limit {
                    break 'scan;
                }
            }
        }

        Ok(customers)
    }

    /// Rejection-samples a free coordinate inside `partition`.
    fn place<R>(
        &self,
        partition: &Partition,
        taken: &FxHashSet<Coordinate>,
        rng: &mut R,
    ) -> Result<Coordinate, GenerationError>
    where
        R: Rng,
    {
        for attempt in 0..self.settings.max_placement_attempts {
            let x = rng.random_range(partition.x_range());
            let y = rng.random_range(partition.y_range());
            let position = Coordinate::new(x, y);

            if !taken.contains(&position) {
                if attempt > 0 {
                    debug!(
                        row = partition.row(),
                        col = partition.col(),
                        attempt,
                        "placed customer after rejected draws"
                    );
                }
                return Ok(position);
            }
        }

        warn!(
            row = partition.row(),
            col = partition.col(),
            attempts = self.settings.max_placement_attempts,
            "partition exhausted"
        );

        Err(GenerationError::PartitionExhausted {
            row: partition.row(),
            col: partition.col(),
            attempts: self.settings.max_placement_attempts,
        })
    }
}
