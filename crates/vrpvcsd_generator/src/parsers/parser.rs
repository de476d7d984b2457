use std::path::Path;

use crate::{parsers::error::LoadError, problem::instance::Instance};

pub trait InstanceParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<Vec<Instance>, LoadError>;
}
