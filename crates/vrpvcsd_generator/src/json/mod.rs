pub mod schema;
pub mod types;
pub mod writer;
