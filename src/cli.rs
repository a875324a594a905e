mod args;
mod config;

pub use args::{Cli, Command};
pub use config::load_config;
