pub mod api;
mod common_args;
pub mod config;
pub mod controller;
pub mod errors;
pub mod format;
pub mod session;
pub mod startup;
mod subcommands;
pub mod util;

use clap::{ArgMatches, Command};

pub use config::Config;
pub use errors::{Operation, TrackerError};
pub use subcommands::*;

pub fn get_subcommands() -> Vec<Command> {
    vec![
        version::cli(),
        list::cli(),
        add::cli(),
        build::cli(),
        delete::cli(),
        options::cli(),
        settings::cli(),
    ]
}

pub async fn exec_subcommand(config: Config, cmd: &str, args: &ArgMatches) -> Result<(), anyhow::Error> {
    match cmd {
        "version" => version::exec(config, args).await,
        "list" => list::exec(config, args).await,
        "add" => add::exec(config, args).await,
        "build" => build::exec(config, args).await,
        "delete" => delete::exec(config, args).await,
        "options" => options::exec(config, args).await,
        "config" => settings::exec(config, args).await,
        unknown => Err(anyhow::anyhow!("Invalid subcommand: {}", unknown)),
    }
}
