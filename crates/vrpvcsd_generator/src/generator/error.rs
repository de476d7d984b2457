use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Unknown density class {class}, expected 0..{available}")]
    UnknownDensityClass { class: u8, available: usize },

    #[error("density_class_list must not be empty")]
    EmptyDensityClassList,

    #[error("capacity_list must not be empty")]
    EmptyCapacityList,

    #[error("Expected demand candidates must not be empty")]
    EmptyExpectedDemands,

    #[error("Invalid customer count distribution for density class {class}: {reason}")]
    InvalidCountDistribution { class: u8, reason: String },

    #[error("Invalid partition grid: {0}")]
    InvalidGrid(String),

    #[error("Fleet of {fleet_size} vehicles does not fit into {vehicle_slots} vehicle slots")]
    FleetExceedsVehicleSlots {
        fleet_size: usize,
        vehicle_slots: usize,
    },

    #[error("{customers} customers do not fit into {customer_slots} customer slots")]
    CustomersExceedSlots {
        customers: usize,
        customer_slots: usize,
    },

    #[error(
        "Partition ({row}, {col}) has no free coordinate after {attempts} attempts, the cell is too crowded"
    )]
    PartitionExhausted {
        row: usize,
        col: usize,
        attempts: usize,
    },
}
