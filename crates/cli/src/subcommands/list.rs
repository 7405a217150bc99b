use clap::{ArgMatches, Command};
use keebtrack_inventory::{render, Category};

use crate::common_args;
use crate::config::Config;
use crate::format::{self, arg_output_format, get_arg_output_format};
use crate::subcommands::connect;

pub fn cli() -> Command {
    Command::new("list")
        .about("Fetches the inventory and lists every part and build")
        .arg(common_args::category().help("Only list this category"))
        .arg(arg_output_format("text"))
}

pub async fn exec(config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    let session = connect(&config)?;
    let snapshot = session.refresh().await?;

    let mut view = render(&snapshot);
    if let Some(category) = args.get_one::<Category>("category") {
        view = view.only(*category);
    }
    format::render(&view, get_arg_output_format(args), &mut std::io::stdout().lock())
}
