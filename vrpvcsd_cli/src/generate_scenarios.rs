use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::info;
use vrpvcsd_generator::{
    parsers::{legacy::LegacyInstanceParser, parser::InstanceParser},
    scenario::{
        demand_model::DiscreteSpreadDemand,
        scenario_file::{generate_scenarios, write_scenarios},
        scenario_sampler::ScenarioSampler,
    },
};

use crate::file_utils::json_files;

#[derive(Args)]
pub struct GenerateScenariosArgs {
    /// Instance collection, or a folder of collections
    #[arg(short, long)]
    input: PathBuf,

    /// Instance to draw scenarios for, every instance when omitted
    #[arg(long)]
    id: Option<usize>,

    /// Scenarios per instance
    #[arg(short = 'n', long, default_value_t = 100)]
    count: usize,

    /// Demand multipliers of the realization model
    #[arg(long, value_delimiter = ',', default_value = "0.5,1.0,1.5")]
    multipliers: Vec<f64>,

    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(args: GenerateScenariosArgs) -> anyhow::Result<()> {
    let sampler = ScenarioSampler::new(DiscreteSpreadDemand::new(args.multipliers)?);
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let paths = json_files(&args.input)?;
    info!("Drawing scenarios for {} instance files", paths.len());

    for path in paths {
        if let Some(id) = args.id {
            generate_scenarios(&path, id, args.count, &sampler, &mut rng)?;
            continue;
        }

        let instances = LegacyInstanceParser.parse(&path)?;

        let bar = ProgressBar::new(instances.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?,
        );
        bar.set_message(path.display().to_string());

        for (id, instance) in instances.iter().enumerate() {
            let batch = sampler.sample(instance, args.count, &mut rng);
            write_scenarios(&path, id, &batch)?;
            bar.inc(1);
        }

        bar.finish_and_clear();
        info!("Finished {}", path.display());
    }

    Ok(())
}
