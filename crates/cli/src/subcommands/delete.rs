use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use keebtrack_inventory::{render, Category, Cell, DeleteAffordance, RenderedView};

use crate::api::InventoryStore;
use crate::common_args;
use crate::config::Config;
use crate::controller::{DeleteController, PromptConfirm};
use crate::errors::TrackerError;
use crate::session::Session;
use crate::subcommands::connect;

pub fn cli() -> Command {
    Command::new("delete")
        .about("Deletes a part or a build")
        .arg(common_args::category().requires("id"))
        .arg(Arg::new("id").requires("category").help("The identifier of the record to delete"))
        .arg(common_args::yes())
        .after_help("Without a category and identifier, pick the record from a list.\n")
}

fn pick_target(view: &RenderedView) -> anyhow::Result<DeleteAffordance> {
    let items: Vec<_> = view.deletable_items().collect();
    if items.is_empty() {
        anyhow::bail!("The inventory is empty; there is nothing to delete.");
    }
    let labels: Vec<String> = items
        .iter()
        .map(|item| format!("{}: {}", item.delete.category.label(), item.label))
        .collect();
    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Delete which record?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(items[choice].delete.clone())
}

/// Fetches the inventory and finds the record to delete, either by
/// `(category, id)` or by asking the user to pick one.
pub(crate) async fn resolve_target<S: InventoryStore>(
    session: &Session<S>,
    target: Option<(Category, &str)>,
) -> anyhow::Result<DeleteAffordance> {
    let snapshot = session.refresh().await?;
    let view = render(&snapshot);
    match target {
        Some((category, id)) => view
            .find_affordance(category, &Cell::from(id))
            .cloned()
            .with_context(|| format!("No {} with identifier `{id}`.", category.label().to_lowercase())),
        None => pick_target(&view),
    }
}

pub async fn exec(config: Config, args: &ArgMatches) -> Result<(), anyhow::Error> {
    let session = connect(&config)?;
    let target = match (args.get_one::<Category>("category"), args.get_one::<String>("id")) {
        (Some(category), Some(id)) => Some((*category, id.as_str())),
        _ => None,
    };
    let target = resolve_target(&session, target).await?;

    let assume_yes = args.get_flag("force") || config.assume_yes();
    let mut controller = DeleteController::new(PromptConfirm { assume_yes });
    match controller.on_delete(&session, &target).await {
        Ok(_) => {
            println!("{}", format!("Deleted {} {}.", target.category.label(), target.id).green());
            Ok(())
        }
        Err(TrackerError::UserAbort) => {
            println!("Aborted.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::MockStore;
    use crate::session::BusyIndicator;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn session() -> Session<MockStore> {
        Session::new(
            MockStore::with_snapshot(json!({
                "cases": [{"CaseID": 1, "Name": "Tofu60"}, {"CaseID": null, "Name": "Orphan"}],
                "switches": [{"SwitchID": 5, "Name": "Gateron Yellow"}]
            })),
            BusyIndicator::hidden(),
        )
    }

    #[tokio::test]
    async fn resolves_target_against_a_fresh_render() {
        let session = session();
        let target = resolve_target(&session, Some((Category::Switches, "5"))).await.unwrap();

        assert_eq!(
            target,
            DeleteAffordance {
                id: 5u64.into(),
                category: Category::Switches,
            }
        );
        assert_eq!(session.store().fetch_count(), 1);
        assert!(session.store().written().is_empty());
    }

    #[tokio::test]
    async fn unknown_or_blank_identifier_is_an_error() {
        let session = session();
        let err = resolve_target(&session, Some((Category::Cases, "9"))).await.unwrap_err();
        assert_eq!(err.to_string(), "No case with identifier `9`.");
        assert!(resolve_target(&session, Some((Category::Cases, ""))).await.is_err());
        assert!(session.store().written().is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_is_reported() {
        let session = Session::new(
            MockStore {
                fail_reads: true,
                ..MockStore::default()
            },
            BusyIndicator::hidden(),
        );
        let err = resolve_target(&session, Some((Category::Cases, "1"))).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::NetworkFailure { .. })
        ));
    }
}
