use serde::{Deserialize, Deserializer, Serialize};

use crate::record::{Case, Keyboard, Keycap, Stabilizer, Switch};
use crate::Category;

/// Everything the store returned from one read.
///
/// A snapshot is never patched: after any write the client fetches a new one
/// and replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "null_as_empty")]
    pub cases: Vec<Case>,
    #[serde(deserialize_with = "null_as_empty")]
    pub switches: Vec<Switch>,
    #[serde(deserialize_with = "null_as_empty")]
    pub stabs: Vec<Stabilizer>,
    #[serde(deserialize_with = "null_as_empty")]
    pub keycaps: Vec<Keycap>,
    #[serde(deserialize_with = "null_as_empty")]
    pub keyboards: Vec<Keyboard>,
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}

impl Snapshot {
    pub fn len_of(&self, category: Category) -> usize {
        match category {
            Category::Cases => self.cases.len(),
            Category::Switches => self.switches.len(),
            Category::Stabs => self.stabs.len(),
            Category::Keycaps => self.keycaps.len(),
            Category::Keyboards => self.keyboards.len(),
        }
    }

    pub fn total_len(&self) -> usize {
        Category::all().map(|c| self.len_of(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_categories_are_empty() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"cases": [{"CaseID": 1, "Name": "Tofu60"}], "switches": null, "plates": []}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len_of(Category::Cases), 1);
        assert_eq!(snapshot.len_of(Category::Switches), 0);
        assert_eq!(snapshot.len_of(Category::Keyboards), 0);
        assert_eq!(snapshot.total_len(), 1);
    }

    #[test]
    fn rows_without_identifier_do_not_fail_the_fetch() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"cases":[{"CaseID":1,"Name":"Tofu60"},{"CaseID":null,"Name":"x"}],"switches":[{"Name":"no id"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.len_of(Category::Cases), 2);
        assert_eq!(snapshot.len_of(Category::Switches), 1);
        assert!(snapshot.cases[1].id.is_blank());
        assert!(snapshot.switches[0].id.is_blank());
    }
}
