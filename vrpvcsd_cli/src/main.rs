use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    generate_instances::GenerateInstancesArgs, generate_scenarios::GenerateScenariosArgs,
    json_schema::JsonSchemaArgs,
};

mod file_utils;
mod generate_instances;
mod generate_scenarios;
mod json_schema;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a collection of benchmark instances
    #[command(visible_alias = "i")]
    Instances {
        #[command(flatten)]
        args: GenerateInstancesArgs,
    },
    /// Draw demand scenarios for persisted instances
    #[command(visible_alias = "s")]
    Scenarios {
        #[command(flatten)]
        args: GenerateScenariosArgs,
    },
    /// Write the JSON schema of instance collections
    #[command(visible_alias = "schema")]
    JsonSchema {
        #[command(flatten)]
        args: JsonSchemaArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Instances { args }) => generate_instances::run(args)?,
        Some(Commands::Scenarios { args }) => generate_scenarios::run(args)?,
        Some(Commands::JsonSchema { args }) => json_schema::run(args)?,
        None => {}
    }

    Ok(())
}
