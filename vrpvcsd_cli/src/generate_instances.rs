use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::Args;
use rand::rngs::SmallRng;
use tracing::info;
use vrpvcsd_generator::{
    generator::{
        generation_params::{GenerationParams, SamplerSettings},
        instance_generator::InstanceGenerator,
        random_sources::RandomSources,
    },
    json::writer::write_instances,
    problem::instance_config::InstanceConfig,
};

#[derive(Args)]
pub struct GenerateInstancesArgs {
    /// JSON file with generation options, flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with the instance config template
    #[arg(long)]
    template: Option<PathBuf>,

    /// Density classes to draw from (0 = very low .. 4 = very high)
    #[arg(long = "density-class", value_delimiter = ',')]
    density_classes: Vec<u8>,

    /// Vehicle capacities to draw from
    #[arg(long = "capacity", value_delimiter = ',')]
    capacities: Vec<f64>,

    /// Number of instances
    #[arg(short = 'n', long)]
    count: Option<usize>,

    #[arg(long)]
    max_c_size: Option<usize>,

    #[arg(long)]
    max_v_size: Option<usize>,

    /// Coordinate draws per customer before a partition is considered full
    #[arg(long)]
    max_placement_attempts: Option<usize>,

    /// Seed for reproducible corpora
    #[arg(long)]
    seed: Option<u64>,

    /// Output instance collection
    #[arg(short, long)]
    out: PathBuf,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(f))?)
}

impl GenerateInstancesArgs {
    fn generation_params(&self) -> anyhow::Result<GenerationParams> {
        let mut params = match &self.config {
            Some(path) => read_json(path)?,
            None => GenerationParams::default(),
        };

        if !self.density_classes.is_empty() {
            params.density_class_list = self.density_classes.clone();
        }

        if !self.capacities.is_empty() {
            params.capacity_list = self.capacities.clone();
        }

        if let Some(count) = self.count {
            params.count = count;
        }

        if self.max_c_size.is_some() {
            params.max_c_size = self.max_c_size;
        }

        if self.max_v_size.is_some() {
            params.max_v_size = self.max_v_size;
        }

        Ok(params)
    }
}

pub fn run(args: GenerateInstancesArgs) -> anyhow::Result<()> {
    let params = args.generation_params()?;
    let template: InstanceConfig = match &args.template {
        Some(path) => read_json(path)?,
        None => InstanceConfig::default(),
    };

    let mut settings = SamplerSettings::default();
    if let Some(attempts) = args.max_placement_attempts {
        settings.max_placement_attempts = attempts;
    }

    let generator = InstanceGenerator::new(Default::default(), Default::default(), settings);
    let mut rngs = match args.seed {
        Some(seed) => RandomSources::<SmallRng>::seeded(seed),
        None => RandomSources::<SmallRng>::from_os_rng(),
    };

    info!(?params, "Generating instances");
    let instances = generator.generate(&template, &params, &mut rngs)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_instances(&args.out, &instances)?;

    info!(
        "Wrote {} instances to {}",
        instances.len(),
        args.out.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateInstancesArgs,
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--density-class",
            "1,3",
            "--capacity",
            "50,100",
            "-n",
            "4",
            "--max-c-size",
            "70",
            "-o",
            "out.json",
        ]);

        let params = cli.args.generation_params().unwrap();

        assert_eq!(params.density_class_list, vec![1, 3]);
        assert_eq!(params.capacity_list, vec![50.0, 100.0]);
        assert_eq!(params.count, 4);
        assert_eq!(params.max_c_size, Some(70));
        assert_eq!(params.max_v_size, None);
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = TestCli::parse_from(["test", "-o", "out.json"]);

        assert_eq!(
            cli.args.generation_params().unwrap(),
            GenerationParams::default()
        );
    }
}
