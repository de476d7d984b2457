use crate::{define_index_newtype, problem::coordinate::Coordinate};

define_index_newtype!(CustomerIdx, Customer);

/// Number of columns of a persisted customer row.
pub const CUSTOMER_COLUMNS: usize = 5;

/// Unserved demand of a customer whose demand has not been realized yet.
pub const UNREALIZED_DEMAND: f64 = -1.0;

/// A slot of the fixed-size customer array, laid out as `[x, y, h, d, dhat]`.
///
/// The availability flag `h` tells real customers and padding apart: a real
/// customer has `h = 1`, a padding slot is all zeros in every column and must
/// never be scheduled. Padding is never partially filled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Customer {
    x: f64,
    y: f64,
    availability: f64,
    expected_demand: f64,
    unserved_demand: f64,
}

impl Customer {
    pub const PADDING: Customer = Customer {
        x: 0.0,
        y: 0.0,
        availability: 0.0,
        expected_demand: 0.0,
        unserved_demand: 0.0,
    };

    /// A freshly sampled, available customer with unrealized demand.
    pub fn realized(position: Coordinate, expected_demand: f64) -> Self {
        Self {
            x: f64::from(position.x()),
            y: f64::from(position.y()),
            availability: 1.0,
            expected_demand,
            unserved_demand: UNREALIZED_DEMAND,
        }
    }

    pub fn from_row(row: [f64; CUSTOMER_COLUMNS]) -> Self {
        let [x, y, availability, expected_demand, unserved_demand] = row;
        Self {
            x,
            y,
            availability,
            expected_demand,
            unserved_demand,
        }
    }

    pub fn to_row(&self) -> [f64; CUSTOMER_COLUMNS] {
        [
            self.x,
            self.y,
            self.availability,
            self.expected_demand,
            self.unserved_demand,
        ]
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x as i32, self.y as i32)
    }

    pub fn availability(&self) -> f64 {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability == 1.0
    }

    pub fn is_padding(&self) -> bool {
        *self == Self::PADDING
    }

    pub fn expected_demand(&self) -> f64 {
        self.expected_demand
    }

    pub fn unserved_demand(&self) -> f64 {
        self.unserved_demand
    }

    pub fn has_unrealized_demand(&self) -> bool {
        self.unserved_demand == UNREALIZED_DEMAND
    }

    pub(crate) fn clear_unserved_demand(&mut self) {
        self.unserved_demand = 0.0;
    }
}
