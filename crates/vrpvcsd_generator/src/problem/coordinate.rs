use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer grid position, persisted as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[i32; 2]")]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new(50, 50)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(value: Coordinate) -> Self {
        [value.x, value.y]
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = String;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        let [x, y] = value;
        if x.fract() != 0.0 || y.fract() != 0.0 {
            return Err(format!("Coordinate [{x}, {y}] is not integral"));
        }

        Ok(Self::new(x as i32, y as i32))
    }
}
