use clap::{Arg, ArgAction::SetTrue, ArgMatches};

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::Config;

pub fn cli() -> clap::Command {
    clap::Command::new("version")
        .about("Print the version of the command line tool")
        .arg(
            Arg::new("cli")
                .short('c')
                .long("cli")
                .action(SetTrue)
                .help("Prints only the CLI version"),
        )
}

pub async fn exec(config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    if args.get_flag("cli") {
        println!("{}", CLI_VERSION);
        return Ok(());
    }

    println!("Path: {}", std::env::current_exe()?.display());
    println!("Config: {}", config.path().display());
    println!("keebtrack version {CLI_VERSION}");
    Ok(())
}
