use clap::{ArgMatches, Command};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use keebtrack_inventory::form::CREATE_KEYBOARD_FORM;
use keebtrack_inventory::{render, Category, Form, RenderedView};

use crate::common_args;
use crate::config::Config;
use crate::controller::FormController;
use crate::format::{self, OutputFormat};
use crate::subcommands::add::fill_form;
use crate::subcommands::connect;

pub fn cli() -> Command {
    Command::new("build")
        .about("Creates a keyboard build from one part of each kind")
        .arg(common_args::fields())
        .after_help("Run `keebtrack options` to see the part identifiers to choose from.\n")
}

/// Prompts for the build name, then offers each reference field as a selection.
fn prompt_build(form: &mut Form, view: &RenderedView) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    for field in form.spec().fields {
        let Some(dropdown) = view.dropdown(field.name) else {
            let value: String = Input::with_theme(&theme)
                .with_prompt(field.name)
                .allow_empty(!field.required)
                .interact_text()?;
            form.set(field.name, value)?;
            continue;
        };
        if dropdown.options.is_empty() {
            anyhow::bail!(
                "There are no {} to build with. Add one with `keebtrack add {}`.",
                dropdown.category.sheet_name().to_lowercase(),
                dropdown.category.label().to_lowercase(),
            );
        }
        let labels: Vec<&str> = dropdown.options.iter().map(|o| o.label.as_str()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(dropdown.category.label())
            .items(&labels)
            .default(0)
            .interact()?;
        form.set(field.name, dropdown.options[choice].value.to_string())?;
    }
    Ok(())
}

pub async fn exec(config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    let session = connect(&config)?;
    let mut controller = FormController::new(&CREATE_KEYBOARD_FORM);

    let assignments = common_args::get_fields(args);
    if assignments.is_empty() {
        let snapshot = session.refresh().await?;
        prompt_build(controller.form_mut(), &render(&snapshot))?;
    } else {
        fill_form(controller.form_mut(), &assignments)?;
    }
    let snapshot = controller.submit(&session).await?;

    println!("{}", "Build created.".green());
    let view = render(&snapshot).only(Category::Keyboards);
    format::render(&view, OutputFormat::Text, &mut std::io::stdout().lock())
}
