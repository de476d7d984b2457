use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct JsonSchemaArgs {
    /// Output file of the schema
    #[arg(long, short = 'o')]
    out: PathBuf,
}

pub fn run(args: JsonSchemaArgs) -> Result<(), anyhow::Error> {
    let schema = vrpvcsd_generator::json::schema::generate_json_schema()?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(args.out, schema)?;

    Ok(())
}
