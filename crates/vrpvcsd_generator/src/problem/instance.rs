use crate::problem::{
    coordinate::Coordinate,
    customer::{Customer, CustomerIdx},
    instance_config::InstanceConfig,
    vehicle::{Vehicle, VehicleIdx},
};

/// A benchmark instance with fixed-size vehicle and customer arrays.
///
/// Customers `[0, real_n)` are real, the rest are padding. Vehicles `[0, m)`
/// start at the depot, the rest are blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    name: String,
    config: InstanceConfig,
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
}

impl Instance {
    pub(crate) fn new(
        name: String,
        config: InstanceConfig,
        vehicles: Vec<Vehicle>,
        customers: Vec<Customer>,
    ) -> Self {
        Self {
            name,
            config,
            vehicles,
            customers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    pub fn depot(&self) -> Coordinate {
        self.config.depot
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, customer_id: CustomerIdx) -> &Customer {
        &self.customers[customer_id]
    }

    /// Length of the customer array (`max_c_size`).
    pub fn customer_slots(&self) -> usize {
        self.customers.len()
    }

    /// Length of the vehicle array (`max_v_size`).
    pub fn vehicle_slots(&self) -> usize {
        self.vehicles.len()
    }

    pub fn real_customers(&self) -> &[Customer] {
        &self.customers[..self.config.real_n.min(self.customers.len())]
    }

    pub fn padding_customers(&self) -> &[Customer] {
        &self.customers[self.config.real_n.min(self.customers.len())..]
    }

    pub fn fleet(&self) -> &[Vehicle] {
        &self.vehicles[..self.config.m.min(self.vehicles.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_instance;

    #[test]
    fn test_real_and_padding_split() {
        let instance = create_test_instance();

        assert_eq!(instance.real_customers().len(), 3);
        assert_eq!(instance.padding_customers().len(), 3);
        assert!(instance.real_customers().iter().all(Customer::is_available));
        assert!(instance.padding_customers().iter().all(Customer::is_padding));
        assert_eq!(instance.customer(CustomerIdx::new(1)).expected_demand(), 10.0);
    }

    #[test]
    fn test_fleet_is_prefix_of_vehicle_slots() {
        let instance = create_test_instance();

        assert_eq!(instance.vehicle_slots(), 3);
        assert_eq!(instance.fleet().len(), 2);
        assert!(instance.vehicle(VehicleIdx::new(0)).is_at(instance.depot()));
        assert_eq!(*instance.vehicle(VehicleIdx::new(2)), Vehicle::default());
    }
}
