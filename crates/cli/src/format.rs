use std::io::Write;

use colored::Colorize;
use keebtrack_inventory::cell::or_na;
use keebtrack_inventory::render::html;
use keebtrack_inventory::{ListView, RenderedView};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Output format for rendered inventory.
///
/// Implements [`clap::ValueEnum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per record, grouped by category
    Text,
    /// Render output in an ASCII table format
    Table,
    /// Render the lists and dropdowns as JSON
    Json,
    /// Render a standalone HTML page
    Html,
}

/// A pre-configured [`clap::Arg`] for [`OutputFormat`].
pub fn arg_output_format(default_format: &'static str) -> clap::Arg {
    clap::Arg::new("output-format")
        .long("output-format")
        .short('o')
        .value_parser(clap::value_parser!(OutputFormat))
        .default_value(default_format)
        .help("How to format the inventory.")
}

/// Get the [`OutputFormat`] arg as configured using [`arg_output_format`].
pub fn get_arg_output_format(args: &clap::ArgMatches) -> OutputFormat {
    args.get_one("output-format").copied().unwrap_or(OutputFormat::Text)
}

/// Types which can be rendered according to an [`OutputFormat`].
pub trait Render {
    fn render_text(&self, out: &mut dyn Write) -> anyhow::Result<()>;
    fn render_tabled(&self, out: &mut dyn Write) -> anyhow::Result<()>;
    fn render_json(&self, out: &mut dyn Write) -> anyhow::Result<()>;
    fn render_html(&self, out: &mut dyn Write) -> anyhow::Result<()>;
}

/// Render the given [`Render`]-able to `out` using `fmt`.
pub fn render(r: &impl Render, fmt: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    use OutputFormat::*;

    match fmt {
        Text => r.render_text(out),
        Table => r.render_tabled(out),
        Json => r.render_json(out),
        Html => r.render_html(out),
    }
}

#[derive(Tabled)]
struct ItemRow {
    id: String,
    description: String,
}

fn heading(list: &ListView) -> String {
    format!("{} ({})", list.category.sheet_name(), list.items.len())
}

impl Render for RenderedView {
    fn render_text(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        for list in &self.lists {
            writeln!(out, "{}", heading(list).bold())?;
            if list.items.is_empty() {
                writeln!(out, "  {}", "(none)".dimmed())?;
            }
            for item in &list.items {
                writeln!(out, "  [{}] {}", or_na(Some(&item.delete.id)), item.label)?;
            }
        }
        Ok(())
    }

    fn render_tabled(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        for list in &self.lists {
            writeln!(out, "{}", heading(list).bold())?;
            let rows = list.items.iter().map(|item| ItemRow {
                id: or_na(Some(&item.delete.id)),
                description: item.label.clone(),
            });
            let mut table = Table::new(rows);
            table
                .with(Style::psql())
                .with(Modify::new(Columns::first()).with(Alignment::left()));
            writeln!(out, "{table}\n")?;
        }
        Ok(())
    }

    fn render_json(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    fn render_html(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        out.write_all(html::to_page(self).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keebtrack_inventory::{render as render_view, Category, Snapshot};

    fn view() -> RenderedView {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "keycaps": [{"KeycapID": 3, "Name": "GMK Olivia", "Profile": "Cherry"}]
        }))
        .unwrap();
        render_view(&snapshot).only(Category::Keycaps)
    }

    fn rendered(fmt: OutputFormat) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render(&view(), fmt, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_ids_and_labels() {
        assert_eq!(
            rendered(OutputFormat::Text),
            "Keycaps (1)\n  [3] GMK Olivia (N/A) - Profile: Cherry - Material: N/A - Notes: N/A\n"
        );
    }

    #[test]
    fn rows_without_identifier_show_na() {
        colored::control::set_override(false);
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "cases": [{"CaseID": null, "Name": "Tofu60"}]
        }))
        .unwrap();
        let mut out = Vec::new();
        render(&render_view(&snapshot).only(Category::Cases), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cases (1)\n  [N/A] Tofu60 (N/A) - Color: N/A - Notes: N/A\n"
        );
    }

    #[test]
    fn json_carries_delete_affordances() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json)).unwrap();
        assert_eq!(
            value["lists"][0]["items"][0]["delete"],
            serde_json::json!({"id": 3, "category": "keycaps"})
        );
    }

    #[test]
    fn table_has_a_row_per_item() {
        let table = rendered(OutputFormat::Table);
        assert!(table.contains("GMK Olivia"));
        assert!(table.contains("description"));
    }
}
