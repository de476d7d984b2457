use crate::{
    define_index_newtype,
    problem::{coordinate::Coordinate, customer::CustomerIdx},
};

define_index_newtype!(VehicleIdx, Vehicle);

pub const VEHICLE_COLUMNS: usize = 5;

/// A slot of the fixed-size vehicle array, laid out as
/// `[loc_x, loc_y, capacity, assigned_load, occupied_node]`.
///
/// `occupied_node` equal to the customer array length means the vehicle is
/// not serving any customer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vehicle {
    loc_x: f64,
    loc_y: f64,
    capacity: f64,
    assigned_load: f64,
    occupied_node: f64,
}

impl Vehicle {
    pub fn at_depot(depot: Coordinate, capacity: f64, customer_slots: usize) -> Self {
        Self {
            loc_x: f64::from(depot.x()),
            loc_y: f64::from(depot.y()),
            capacity,
            assigned_load: 0.0,
            occupied_node: customer_slots as f64,
        }
    }

    pub fn from_row(row: [f64; VEHICLE_COLUMNS]) -> Self {
        let [loc_x, loc_y, capacity, assigned_load, occupied_node] = row;
        Self {
            loc_x,
            loc_y,
            capacity,
            assigned_load,
            occupied_node,
        }
    }

    pub fn to_row(&self) -> [f64; VEHICLE_COLUMNS] {
        [
            self.loc_x,
            self.loc_y,
            self.capacity,
            self.assigned_load,
            self.occupied_node,
        ]
    }

    pub fn loc_x(&self) -> f64 {
        self.loc_x
    }

    pub fn loc_y(&self) -> f64 {
        self.loc_y
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn assigned_load(&self) -> f64 {
        self.assigned_load
    }

    pub fn is_at(&self, position: Coordinate) -> bool {
        self.loc_x == f64::from(position.x()) && self.loc_y == f64::from(position.y())
    }

    /// The customer this vehicle is serving, `None` when the marker holds the
    /// "unoccupied" sentinel for an array of `customer_slots` customers.
    pub fn occupied_node(&self, customer_slots: usize) -> Option<CustomerIdx> {
        let node = self.occupied_node as usize;
        if node >= customer_slots {
            None
        } else {
            Some(CustomerIdx::new(node))
        }
    }
}
