use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{json::types::JsonInstance, problem::instance::Instance};

/// Writes `instances` as one JSON collection readable by
/// [`LegacyInstanceParser`](crate::parsers::legacy::LegacyInstanceParser).
pub fn write_instances<P: AsRef<Path>>(
    path: P,
    instances: &[Instance],
) -> Result<(), serde_json::Error> {
    let records = instances.iter().map(JsonInstance::from).collect::<Vec<_>>();

    let file = File::create(path).map_err(serde_json::Error::io)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);
    serde_json::to_writer(&mut writer, &records)?;
    writer.flush().map_err(serde_json::Error::io)?;

    Ok(())
}
