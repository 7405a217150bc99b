use anyhow::Context;
use clap::{Arg, ArgMatches, Command};

use crate::config::Config;

pub fn cli() -> Command {
    Command::new("config")
        .about("Shows or edits the keebtrack configuration")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Prints the effective configuration"))
        .subcommand(
            Command::new("set-url")
                .about("Sets the URL of the store endpoint")
                .arg(Arg::new("url").required(true).help("The deployed store URL")),
        )
        .subcommand(
            Command::new("set-timeout")
                .about("Sets the request timeout in seconds (0 disables it)")
                .arg(
                    Arg::new("seconds")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

pub async fn exec(mut config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    match args.subcommand() {
        Some(("show", _)) => {
            println!("Config file: {}", config.path().display());
            match config.store_url() {
                Ok(url) => println!("Store URL: {url}"),
                Err(_) => println!("Store URL: (not set)"),
            }
            match config.request_timeout() {
                Some(timeout) => println!("Request timeout: {}s", timeout.as_secs()),
                None => println!("Request timeout: (none)"),
            }
            println!("Assume yes: {}", config.assume_yes());
            Ok(())
        }
        Some(("set-url", args)) => {
            let url = args.get_one::<String>("url").context("missing url")?;
            config.set_store_url(url)?;
            config.save()?;
            println!("Store URL set to {url}");
            Ok(())
        }
        Some(("set-timeout", args)) => {
            let secs = *args.get_one::<u64>("seconds").context("missing seconds")?;
            config.set_request_timeout_secs(secs);
            config.save()?;
            println!("Request timeout set to {secs}s");
            Ok(())
        }
        Some((unknown, _)) => Err(anyhow::anyhow!("Invalid subcommand: {unknown}")),
        None => Err(anyhow::anyhow!("Missing config subcommand")),
    }
}
