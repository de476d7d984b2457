pub mod coordinate;
pub mod customer;
pub mod instance;
pub mod instance_config;
pub mod vehicle;
