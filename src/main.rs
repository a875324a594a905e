mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use terraform_provider_null::{data_sources, output};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Read(args) => {
            let config = cli::load_config(&args)?;

            let mut rng: Box<dyn RngCore> = match args.seed {
                Some(seed) => {
                    tracing::debug!(seed, "using seeded generator");
                    Box::new(StdRng::seed_from_u64(seed))
                }
                None => Box::new(rand::rng()),
            };

            let outcome = data_sources::read_data_source(&args.data_source, &config, rng.as_mut())?;
            for warning in &outcome.warnings {
                eprintln!("Warning: {warning}");
            }

            println!("{}", output::render_state(&outcome.state, args.format)?);
        }
        Command::Schema(args) => {
            let data_source = data_sources::get_data_source(&args.data_source)?;
            let rendered =
                output::render_schema(data_source.type_name(), &data_source.schema(), args.format)?;
            println!("{rendered}");
        }
        Command::List => {
            for name in data_sources::data_source_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
