use serde::{Deserialize, Serialize};

use crate::cell::{null_as_blank, or_na, Cell};
use crate::Category;

/// A row of one of the store's sheets.
///
/// A row whose identifier cell is empty, `null` or absent gets a blank id. It
/// is still listed but can neither be referenced nor deleted.
pub trait Record {
    const CATEGORY: Category;
    /// Name of the identifier column.
    const ID_KEY: &'static str;

    fn id(&self) -> &Cell;
}

/// An inventory record a build can reference.
pub trait Part: Record {
    fn name(&self) -> Option<&Cell>;

    /// The attribute used to tell apart parts that share a name.
    fn secondary(&self) -> Option<&Cell>;

    /// One-line description used in the part's list.
    fn describe(&self) -> String;

    fn display_name(&self) -> String {
        or_na(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Case {
    #[serde(rename = "CaseID", default, deserialize_with = "null_as_blank")]
    pub id: Cell,
    pub name: Option<Cell>,
    pub brand: Option<Cell>,
    pub color: Option<Cell>,
    pub notes: Option<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Switch {
    #[serde(rename = "SwitchID", default, deserialize_with = "null_as_blank")]
    pub id: Cell,
    pub name: Option<Cell>,
    pub brand: Option<Cell>,
    #[serde(rename = "Type")]
    pub kind: Option<Cell>,
    pub quantity: Option<Cell>,
    pub notes: Option<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stabilizer {
    #[serde(rename = "StabID", default, deserialize_with = "null_as_blank")]
    pub id: Cell,
    pub name: Option<Cell>,
    pub brand: Option<Cell>,
    pub color: Option<Cell>,
    pub kit_size: Option<Cell>,
    pub notes: Option<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Keycap {
    #[serde(rename = "KeycapID", default, deserialize_with = "null_as_blank")]
    pub id: Cell,
    pub name: Option<Cell>,
    pub brand: Option<Cell>,
    pub profile: Option<Cell>,
    pub material: Option<Cell>,
    pub notes: Option<Cell>,
}

/// A build: one part of each kind, referenced by identifier.
///
/// References are not checked by the store and may point at parts that have
/// since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Keyboard {
    #[serde(rename = "KeyboardID", default, deserialize_with = "null_as_blank")]
    pub id: Cell,
    pub build_name: Option<Cell>,
    #[serde(rename = "CaseID")]
    pub case_id: Option<Cell>,
    #[serde(rename = "SwitchID")]
    pub switch_id: Option<Cell>,
    #[serde(rename = "StabID")]
    pub stab_id: Option<Cell>,
    #[serde(rename = "KeycapID")]
    pub keycap_id: Option<Cell>,
}

fn headline(name: Option<&Cell>, brand: Option<&Cell>) -> String {
    format!("{} ({})", or_na(name), or_na(brand))
}

macro_rules! impl_record {
    ($ty:ty, $category:expr, $id_key:literal) => {
        impl Record for $ty {
            const CATEGORY: Category = $category;
            const ID_KEY: &'static str = $id_key;

            fn id(&self) -> &Cell {
                &self.id
            }
        }
    };
}

impl_record!(Case, Category::Cases, "CaseID");
impl_record!(Switch, Category::Switches, "SwitchID");
impl_record!(Stabilizer, Category::Stabs, "StabID");
impl_record!(Keycap, Category::Keycaps, "KeycapID");
impl_record!(Keyboard, Category::Keyboards, "KeyboardID");

impl Part for Case {
    fn name(&self) -> Option<&Cell> {
        self.name.as_ref()
    }

    fn secondary(&self) -> Option<&Cell> {
        self.color.as_ref()
    }

    fn describe(&self) -> String {
        format!(
            "{} - Color: {} - Notes: {}",
            headline(self.name.as_ref(), self.brand.as_ref()),
            or_na(self.color.as_ref()),
            or_na(self.notes.as_ref()),
        )
    }
}

impl Part for Switch {
    fn name(&self) -> Option<&Cell> {
        self.name.as_ref()
    }

    fn secondary(&self) -> Option<&Cell> {
        self.kind.as_ref()
    }

    fn describe(&self) -> String {
        format!(
            "{} - Type: {} - Qty: {} - Notes: {}",
            headline(self.name.as_ref(), self.brand.as_ref()),
            or_na(self.kind.as_ref()),
            or_na(self.quantity.as_ref()),
            or_na(self.notes.as_ref()),
        )
    }
}

impl Part for Stabilizer {
    fn name(&self) -> Option<&Cell> {
        self.name.as_ref()
    }

    fn secondary(&self) -> Option<&Cell> {
        self.color.as_ref()
    }

    fn describe(&self) -> String {
        format!(
            "{} - Color: {} - Kit size: {} - Notes: {}",
            headline(self.name.as_ref(), self.brand.as_ref()),
            or_na(self.color.as_ref()),
            or_na(self.kit_size.as_ref()),
            or_na(self.notes.as_ref()),
        )
    }
}

impl Part for Keycap {
    fn name(&self) -> Option<&Cell> {
        self.name.as_ref()
    }

    fn secondary(&self) -> Option<&Cell> {
        self.profile.as_ref()
    }

    fn describe(&self) -> String {
        format!(
            "{} - Profile: {} - Material: {} - Notes: {}",
            headline(self.name.as_ref(), self.brand.as_ref()),
            or_na(self.profile.as_ref()),
            or_na(self.material.as_ref()),
            or_na(self.notes.as_ref()),
        )
    }
}
