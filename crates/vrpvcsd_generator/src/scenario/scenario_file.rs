use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use rand::Rng;
use tracing::info;

use crate::{
    parsers::{legacy::LegacyInstanceParser, parser::InstanceParser},
    scenario::{
        demand_model::DemandModel,
        error::ScenarioError,
        scenario_sampler::{ScenarioBatch, ScenarioSampler},
    },
};

/// `"{instance_file}_{id}"`, next to the instance file.
pub fn scenario_file_path<P: AsRef<Path>>(instance_file: P, id: usize) -> PathBuf {
    let mut path = instance_file.as_ref().as_os_str().to_owned();
    path.push(format!("_{id}"));
    PathBuf::from(path)
}

/// Writes the whole batch at once; the file is replaced if it exists.
pub fn write_scenarios<P: AsRef<Path>>(
    instance_file: P,
    id: usize,
    batch: &ScenarioBatch,
) -> Result<PathBuf, ScenarioError> {
    let path = scenario_file_path(instance_file, id);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, batch)?;
    writer.flush()?;

    Ok(path)
}

pub fn read_scenarios<P: AsRef<Path>>(
    instance_file: P,
    id: usize,
) -> Result<ScenarioBatch, ScenarioError> {
    let file = File::open(scenario_file_path(instance_file, id))?;
    let batch = serde_json::from_reader(BufReader::new(file))?;

    Ok(batch)
}

/// Scenario entry point: loads instance `id` from `instance_file`, draws
/// `count` scenarios and persists them under `"{instance_file}_{id}"`.
pub fn generate_scenarios<P, M, R>(
    instance_file: P,
    id: usize,
    count: usize,
    sampler: &ScenarioSampler<M>,
    rng: &mut R,
) -> Result<ScenarioBatch, ScenarioError>
where
    P: AsRef<Path>,
    M: DemandModel,
    R: Rng,
{
    let instances = LegacyInstanceParser.parse(&instance_file)?;
    let available = instances.len();
    let instance = instances
        .get(id)
        .ok_or(ScenarioError::InstanceNotFound { id, available })?;

    let batch = sampler.sample(instance, count, rng);
    let path = write_scenarios(&instance_file, id, &batch)?;

    info!(path = %path.display(), count, "wrote scenarios");

    Ok(batch)
}
