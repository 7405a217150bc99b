//! Turns a [`Snapshot`] into display-ready lists and dropdowns.
//!
//! Rendering is a pure function of the snapshot passed in. Nothing here keeps
//! state between passes.

use itertools::Itertools;
use serde::Serialize;

use crate::cell::{or_na, Cell};
use crate::form::FieldSpec;
use crate::lookup::find_by_id;
use crate::messages::{DeletePart, StoreRequest};
use crate::record::{Keyboard, Part, Record};
use crate::{Category, Snapshot};

pub mod html;

/// The handle attached to every rendered item that lets it be deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteAffordance {
    pub id: Cell,
    pub category: Category,
}

impl DeleteAffordance {
    pub fn for_record<R: Record>(record: &R) -> Self {
        Self {
            id: record.id().clone(),
            category: R::CATEGORY,
        }
    }

    pub fn request(&self) -> StoreRequest {
        StoreRequest::DeletePart(DeletePart {
            category: self.category,
            id: self.id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub label: String,
    pub delete: DeleteAffordance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub category: Category,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: Cell,
    pub label: String,
}

/// Options for one foreign-key field of the build form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub field: &'static str,
    pub category: Category,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedView {
    pub lists: Vec<ListView>,
    pub dropdowns: Vec<Dropdown>,
}

impl RenderedView {
    pub fn list(&self, category: Category) -> Option<&ListView> {
        self.lists.iter().find(|l| l.category == category)
    }

    pub fn dropdown(&self, field: &str) -> Option<&Dropdown> {
        self.dropdowns.iter().find(|d| d.field == field)
    }

    /// Keeps only the list for `category` and drops the dropdowns.
    pub fn only(mut self, category: Category) -> Self {
        self.lists.retain(|l| l.category == category);
        self.dropdowns.clear();
        self
    }

    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.lists.iter().flat_map(|l| &l.items)
    }

    /// Items that carry an identifier and so can be deleted.
    pub fn deletable_items(&self) -> impl Iterator<Item = &ListItem> {
        self.items().filter(|item| !item.delete.id.is_blank())
    }

    /// Finds the delete affordance rendered for `id` in `category`.
    pub fn find_affordance(&self, category: Category, id: &Cell) -> Option<&DeleteAffordance> {
        self.list(category)?
            .items
            .iter()
            .map(|item| &item.delete)
            .find(|delete| delete.id.loosely_eq(id))
    }
}

/// Renders every category of `snapshot`, one list item per record.
pub fn render(snapshot: &Snapshot) -> RenderedView {
    let lists = vec![
        part_list(&snapshot.cases),
        part_list(&snapshot.switches),
        part_list(&snapshot.stabs),
        part_list(&snapshot.keycaps),
        ListView {
            category: Category::Keyboards,
            items: snapshot
                .keyboards
                .iter()
                .map(|build| ListItem {
                    label: build_summary(build, snapshot),
                    delete: DeleteAffordance::for_record(build),
                })
                .collect(),
        },
    ];
    let dropdowns = crate::form::CREATE_KEYBOARD_FORM
        .fields
        .iter()
        .filter_map(|field| reference_dropdown(field, snapshot))
        .collect();
    RenderedView { lists, dropdowns }
}

fn part_list<P: Part>(records: &[P]) -> ListView {
    ListView {
        category: P::CATEGORY,
        items: records
            .iter()
            .map(|record| ListItem {
                label: record.describe(),
                delete: DeleteAffordance::for_record(record),
            })
            .collect(),
    }
}

fn reference_dropdown(field: &FieldSpec, snapshot: &Snapshot) -> Option<Dropdown> {
    Some(match field.references? {
        Category::Cases => dropdown(field.name, &snapshot.cases),
        Category::Switches => dropdown(field.name, &snapshot.switches),
        Category::Stabs => dropdown(field.name, &snapshot.stabs),
        Category::Keycaps => dropdown(field.name, &snapshot.keycaps),
        Category::Keyboards => return None,
    })
}

/// Builds the options for `field` from `records`.
///
/// Parts sharing a display name get their secondary attribute appended in
/// parentheses, or their identifier if that attribute is missing. Unique names
/// are shown as-is. Parts without an identifier cannot be referenced and are
/// left out.
pub fn dropdown<P: Part>(field: &'static str, records: &[P]) -> Dropdown {
    let referable: Vec<&P> = records.iter().filter(|r| !r.id().is_blank()).collect();
    let name_counts = referable.iter().map(|r| r.display_name()).counts();
    let options = referable
        .into_iter()
        .map(|record| {
            let name = record.display_name();
            let label = if name_counts[&name] > 1 {
                match record.secondary().filter(|c| !c.is_blank()) {
                    Some(secondary) => format!("{name} ({secondary})"),
                    None => format!("{name} (#{})", record.id()),
                }
            } else {
                name
            };
            SelectOption {
                value: record.id().clone(),
                label,
            }
        })
        .collect();
    Dropdown {
        field,
        category: P::CATEGORY,
        options,
    }
}

/// The human-readable summary of a build, with each reference resolved
/// against `snapshot`.
pub fn build_summary(build: &Keyboard, snapshot: &Snapshot) -> String {
    format!(
        "{}: Case: {} | Switches: {} | Stabs: {} | Keycaps: {}",
        or_na(build.build_name.as_ref()),
        resolve(build, build.case_id.as_ref(), &snapshot.cases),
        resolve(build, build.switch_id.as_ref(), &snapshot.switches),
        resolve(build, build.stab_id.as_ref(), &snapshot.stabs),
        resolve(build, build.keycap_id.as_ref(), &snapshot.keycaps),
    )
}

fn resolve<P: Part>(build: &Keyboard, reference: Option<&Cell>, parts: &[P]) -> String {
    match reference.and_then(|id| find_by_id(parts, id)) {
        Some(part) => part.display_name(),
        None => {
            tracing::warn!(
                build = %build.id,
                reference = ?reference.map(ToString::to_string),
                "build references a missing {}",
                P::CATEGORY.label().to_lowercase(),
            );
            P::CATEGORY.unknown_label()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Case;
    use pretty_assertions::assert_eq;

    fn case(id: u64, name: &str, color: Option<&str>) -> Case {
        Case {
            id: id.into(),
            name: Some(name.into()),
            brand: None,
            color: color.map(Cell::from),
            notes: None,
        }
    }

    fn sample() -> Snapshot {
        serde_json::from_value(serde_json::json!({
            "cases": [{"CaseID": 1, "Name": "Tofu60", "Brand": "KBDfans", "Color": "Black"}],
            "switches": [
                {"SwitchID": "s1", "Name": "Gateron Yellow", "Brand": "Gateron", "Type": "Linear", "Quantity": 70},
                {"SwitchID": "s2", "Name": "Boba U4T", "Type": "Tactile"}
            ],
            "stabs": [{"StabID": 7, "Name": "Durock V2", "KitSize": "60%"}],
            "keycaps": [{"KeycapID": 3, "Name": "GMK Olivia", "Profile": "Cherry", "Material": "ABS"}],
            "keyboards": [
                {"KeyboardID": 1, "BuildName": "Daily", "CaseID": "1", "SwitchID": "s2", "StabID": 7, "KeycapID": 3},
                {"KeyboardID": 2, "BuildName": "Orphan", "CaseID": 99, "SwitchID": "s1", "StabID": 7}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn one_item_per_record() {
        let snapshot = sample();
        let view = render(&snapshot);
        for category in Category::all() {
            let list = view.list(category).unwrap();
            assert_eq!(list.items.len(), snapshot.len_of(category), "{category}");
        }
        assert_eq!(view.items().count(), snapshot.total_len());
    }

    #[test]
    fn empty_snapshot_renders_empty_lists() {
        let view = render(&Snapshot::default());
        assert_eq!(view.lists.len(), 5);
        assert_eq!(view.items().count(), 0);
        assert!(view.dropdowns.iter().all(|d| d.options.is_empty()));
    }

    #[test]
    fn items_use_category_templates() {
        let view = render(&sample());
        let switches: Vec<_> = view
            .list(Category::Switches)
            .unwrap()
            .items
            .iter()
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(
            switches,
            [
                "Gateron Yellow (Gateron) - Type: Linear - Qty: 70 - Notes: N/A",
                "Boba U4T (N/A) - Type: Tactile - Qty: N/A - Notes: N/A",
            ]
        );
        let stab = &view.list(Category::Stabs).unwrap().items[0];
        assert_eq!(stab.label, "Durock V2 (N/A) - Color: N/A - Kit size: 60% - Notes: N/A");
        assert_eq!(
            stab.delete,
            DeleteAffordance {
                id: 7u64.into(),
                category: Category::Stabs,
            }
        );
    }

    #[test]
    fn build_summaries_resolve_references() {
        let view = render(&sample());
        let builds = &view.list(Category::Keyboards).unwrap().items;
        assert_eq!(
            builds[0].label,
            "Daily: Case: Tofu60 | Switches: Boba U4T | Stabs: Durock V2 | Keycaps: GMK Olivia"
        );
    }

    #[test]
    fn dangling_references_fall_back() {
        let view = render(&sample());
        let orphan = &view.list(Category::Keyboards).unwrap().items[1].label;
        assert!(orphan.contains("Unknown Case"), "{orphan}");
        assert!(orphan.contains("Unknown Keycap"), "{orphan}");
        assert!(orphan.contains("Switches: Gateron Yellow"), "{orphan}");
    }

    #[test]
    fn duplicate_names_are_disambiguated() {
        let cases = vec![
            case(1, "Tofu", Some("Black")),
            case(2, "Tofu", Some("White")),
            case(3, "Tofu60", None),
        ];
        let labels: Vec<_> = dropdown("CaseID", &cases)
            .options
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, ["Tofu (Black)", "Tofu (White)", "Tofu60"]);
    }

    #[test]
    fn duplicates_without_secondary_use_identifier() {
        let cases = vec![case(1, "Tofu", Some("Black")), case(2, "Tofu", None)];
        let labels: Vec<_> = dropdown("CaseID", &cases)
            .options
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, ["Tofu (Black)", "Tofu (#2)"]);
    }

    #[test]
    fn dropdowns_cover_every_reference_field() {
        let view = render(&sample());
        let fields: Vec<_> = view.dropdowns.iter().map(|d| d.field).collect();
        assert_eq!(fields, ["CaseID", "SwitchID", "StabID", "KeycapID"]);
        let switches = view.dropdown("SwitchID").unwrap();
        assert_eq!(switches.options[1].value, Cell::from("s2"));
        assert_eq!(switches.options[1].label, "Boba U4T");
    }

    #[test]
    fn affordances_are_found_loosely() {
        let view = render(&sample());
        let found = view.find_affordance(Category::Cases, &Cell::from("1")).unwrap();
        assert_eq!(found.request().action(), "deletePart");
        assert!(view.find_affordance(Category::Cases, &Cell::from("2")).is_none());
    }

    #[test]
    fn rows_without_identifier_are_listed_but_not_referable() {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "cases": [{"CaseID": 1, "Name": "Tofu60"}, {"CaseID": null, "Name": "Tofu60"}],
            "switches": [{"Name": "no id"}]
        }))
        .unwrap();
        let view = render(&snapshot);

        assert_eq!(view.list(Category::Cases).unwrap().items.len(), 2);
        assert_eq!(
            view.list(Category::Switches).unwrap().items[0].label,
            "no id (N/A) - Type: N/A - Qty: N/A - Notes: N/A"
        );
        let case_labels: Vec<_> = view
            .dropdown("CaseID")
            .unwrap()
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(case_labels, ["Tofu60"]);
        assert!(view.dropdown("SwitchID").unwrap().options.is_empty());
        assert_eq!(view.deletable_items().count(), 1);
        assert!(view.find_affordance(Category::Switches, &Cell::from("")).is_none());
    }
}
