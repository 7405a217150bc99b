use std::path::PathBuf;

use clap::{Arg, Command};
use keebtrack_cli::startup::configure_logging;
use keebtrack_cli::*;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    configure_logging();

    let matches = get_command().get_matches();
    let config_path = match matches.get_one::<PathBuf>("config") {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load(config_path)?.with_store_url_override(matches.get_one::<String>("store-url").cloned());

    let Some((cmd, subcommand_args)) = matches.subcommand() else {
        anyhow::bail!("Missing subcommand");
    };
    exec_subcommand(config, cmd, subcommand_args).await?;

    Ok(())
}

fn get_command() -> Command {
    Command::new("keebtrack")
        .about("Track keyboard cases, switches, stabilizers, keycaps and builds in a spreadsheet store")
        .version(version::CLI_VERSION)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path of the config file to use"),
        )
        .arg(
            Arg::new("store-url")
                .long("store-url")
                .global(true)
                .env("KEEBTRACK_STORE_URL")
                .help("URL of the store endpoint, overriding the config file"),
        )
        .subcommands(get_subcommands())
}
