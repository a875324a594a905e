use std::path::PathBuf;

use clap::{Parser, Subcommand};
use terraform_provider_null::data_sources::null;
use terraform_provider_null::output::{SchemaFormat, StateFormat};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a data source and print the resulting state
    Read(ReadArgs),
    /// Print the schema of a data source
    Schema(SchemaArgs),
    /// List the available data sources
    List,
}

#[derive(clap::Args, Debug)]
pub struct ReadArgs {
    /// JSON configuration document; "-" reads from stdin
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long = "input", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub inputs: Vec<(String, String)>,

    #[arg(long)]
    pub has_computed_default: Option<String>,

    #[arg(long, default_value = null::TYPE_NAME)]
    pub data_source: String,

    /// Seed for the random value generator
    #[arg(long, env = "NULL_PROVIDER_SEED")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = StateFormat::Json)]
    pub format: StateFormat,
}

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    #[arg(long, default_value = null::TYPE_NAME)]
    pub data_source: String,

    #[arg(long, value_enum, default_value_t = SchemaFormat::Json)]
    pub format: SchemaFormat,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
