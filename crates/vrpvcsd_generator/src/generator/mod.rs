pub mod density_class;
pub mod error;
pub mod generation_params;
pub mod instance_assembler;
pub mod instance_generator;
pub mod partition_grid;
pub mod random_sources;
pub mod spatial_partition_sampler;
