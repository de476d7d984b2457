use std::path::PathBuf;

use crate::problem::{
    coordinate::Coordinate, customer::Customer, instance::Instance,
    instance_config::InstanceConfig, vehicle::Vehicle,
};

/// Very low density instance with 3 real customers, 3 padding slots and 2 of
/// 3 vehicle slots in use.
pub fn create_test_instance() -> Instance {
    let depot = Coordinate::new(50, 50);
    let config = InstanceConfig {
        density_class: 0,
        capacity: 50.0,
        duration_limit: 143.71,
        real_duration_limit: 143.71,
        m: 2,
        n: 6,
        real_n: 3,
        depot,
        ..InstanceConfig::default()
    };

    let mut customers = vec![
        Customer::realized(Coordinate::new(4, 17), 5.0),
        Customer::realized(Coordinate::new(33, 2), 10.0),
        Customer::realized(Coordinate::new(45, 58), 15.0),
    ];
    customers.resize(6, Customer::PADDING);

    let vehicles = vec![
        Vehicle::at_depot(depot, 50.0, 6),
        Vehicle::at_depot(depot, 50.0, 6),
        Vehicle::default(),
    ];

    Instance::new("I_0_2_50_100001".to_owned(), config, vehicles, customers)
}

/// A per-process path in the system temp folder.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vrpvcsd_{}_{}", std::process::id(), name))
}
