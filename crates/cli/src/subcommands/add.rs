use anyhow::Context;
use clap::{ArgMatches, Command};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use keebtrack_inventory::{render, Category, Form, FormSpec};

use crate::common_args;
use crate::config::Config;
use crate::controller::FormController;
use crate::format::{self, OutputFormat};
use crate::subcommands::connect;

pub fn cli() -> Command {
    Command::new("add")
        .about("Adds a part to the inventory")
        .arg(common_args::category().required(true).help("The kind of part: case, switch, stab or keycap"))
        .arg(common_args::fields())
        .after_help("Use `keebtrack build` to create keyboard builds.\n")
}

/// Fills `form` from `--field` assignments, or prompts for every field when there are none.
pub(crate) fn fill_form(form: &mut Form, assignments: &[&str]) -> anyhow::Result<()> {
    if assignments.is_empty() {
        return prompt_fields(form);
    }
    for assignment in assignments {
        form.assign(assignment)?;
    }
    Ok(())
}

fn prompt_fields(form: &mut Form) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    for field in form.spec().fields {
        let value: String = Input::with_theme(&theme)
            .with_prompt(field.name)
            .allow_empty(!field.required)
            .interact_text()?;
        form.set(field.name, value)?;
    }
    Ok(())
}

pub async fn exec(config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    let category = *args.get_one::<Category>("category").context("missing category")?;
    if !category.is_part() {
        anyhow::bail!("`{category}` is not a part; use `keebtrack build` to create a build");
    }
    let session = connect(&config)?;

    let mut controller = FormController::new(FormSpec::for_category(category));
    fill_form(controller.form_mut(), &common_args::get_fields(args))?;
    let snapshot = controller.submit(&session).await?;

    println!("{}", format!("Added to {}.", category.sheet_name()).green());
    let view = render(&snapshot).only(category);
    format::render(&view, OutputFormat::Text, &mut std::io::stdout().lock())
}
