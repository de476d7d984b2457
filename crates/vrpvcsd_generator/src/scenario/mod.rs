pub mod demand_model;
pub mod error;
pub mod scenario_file;
pub mod scenario_sampler;
