use std::io::Write;

use clap::{Arg, ArgMatches, Command};
use keebtrack_inventory::form::CREATE_KEYBOARD_FORM;
use keebtrack_inventory::render;

use crate::api::InventoryStore;
use crate::config::Config;
use crate::session::Session;
use crate::subcommands::connect;

pub fn cli() -> Command {
    let reference_fields = CREATE_KEYBOARD_FORM
        .fields
        .iter()
        .filter(|f| f.references.is_some())
        .map(|f| f.name);
    Command::new("options")
        .about("Shows the choices offered for each part of a new build")
        .arg(
            Arg::new("field")
                .long("field")
                .value_parser(clap::builder::PossibleValuesParser::new(reference_fields))
                .help("Only show the choices for this field"),
        )
}

/// Fetches the inventory and writes the build form's choices to `out`.
pub(crate) async fn write_options<S: InventoryStore>(
    session: &Session<S>,
    only: Option<&str>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let snapshot = session.refresh().await?;
    let view = render(&snapshot);
    for dropdown in view.dropdowns.iter().filter(|d| only.is_none_or(|field| field == d.field)) {
        writeln!(out, "{} ({}):", dropdown.field, dropdown.category.sheet_name())?;
        if dropdown.options.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for option in &dropdown.options {
            writeln!(out, "  {} = {}", option.value, option.label)?;
        }
    }
    Ok(())
}

pub async fn exec(config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    let session = connect(&config)?;
    let only = args.get_one::<String>("field").map(String::as_str);
    write_options(&session, only, &mut std::io::stdout().lock()).await
}
