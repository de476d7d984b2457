pub mod generator;
pub mod json;
pub mod parsers;
pub mod problem;
pub mod scenario;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
