use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// One of the five record groups the store keeps, one sheet each.
///
/// Parses from the snapshot key (`switches`), the singular (`switch`) or the
/// sheet name (`Switches`), case-insensitively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(to_string = "cases", serialize = "case")]
    Cases,
    #[strum(to_string = "switches", serialize = "switch")]
    Switches,
    #[strum(to_string = "stabs", serialize = "stab", serialize = "stabilizer", serialize = "stabilizers")]
    Stabs,
    #[strum(to_string = "keycaps", serialize = "keycap")]
    Keycaps,
    #[strum(to_string = "keyboards", serialize = "keyboard", serialize = "build", serialize = "builds")]
    Keyboards,
}

impl Category {
    pub const PARTS: [Category; 4] = [Category::Cases, Category::Switches, Category::Stabs, Category::Keycaps];

    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    pub fn is_part(self) -> bool {
        self != Category::Keyboards
    }

    /// The sheet this category lives in on the store, as sent in `sheetName`.
    pub fn sheet_name(self) -> &'static str {
        match self {
            Category::Cases => "Cases",
            Category::Switches => "Switches",
            Category::Stabs => "Stabs",
            Category::Keycaps => "Keycaps",
            Category::Keyboards => "Keyboards",
        }
    }

    /// Singular, human-facing name of one record.
    pub fn label(self) -> &'static str {
        match self {
            Category::Cases => "Case",
            Category::Switches => "Switch",
            Category::Stabs => "Stabilizer",
            Category::Keycaps => "Keycap",
            Category::Keyboards => "Keyboard",
        }
    }

    /// Id of the list container this category renders into.
    pub fn list_id(self) -> &'static str {
        match self {
            Category::Cases => "cases-list",
            Category::Switches => "switches-list",
            Category::Stabs => "stabs-list",
            Category::Keycaps => "keycaps-list",
            Category::Keyboards => "keyboards-list",
        }
    }

    /// Fallback label for a build reference that does not resolve.
    pub fn unknown_label(self) -> String {
        format!("Unknown {}", self.label())
    }
}
