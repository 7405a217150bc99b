//! The JSON envelopes posted to the store.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::{Category, Cell};

/// Named form fields, in form declaration order.
pub type FormFields = IndexMap<String, String>;

/// A write request: `{ "action": ..., "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum StoreRequest {
    AddPart(AddPart),
    DeletePart(DeletePart),
    /// The build form's fields, sent as-is.
    CreateKeyboard(FormFields),
}

impl StoreRequest {
    /// The action tag as it appears on the wire.
    pub fn action(&self) -> &'static str {
        match self {
            StoreRequest::AddPart(_) => "addPart",
            StoreRequest::DeletePart(_) => "deletePart",
            StoreRequest::CreateKeyboard(_) => "createKeyboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddPart {
    #[serde(rename = "sheetName", serialize_with = "sheet_name")]
    pub category: Category,
    pub data: FormFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletePart {
    #[serde(rename = "sheetName", serialize_with = "sheet_name")]
    pub category: Category,
    pub id: Cell,
}

fn sheet_name<S: Serializer>(category: &Category, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(category.sheet_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn add_part_envelope() {
        let data = FormFields::from_iter([("Name".to_owned(), "Tofu60".to_owned())]);
        let request = StoreRequest::AddPart(AddPart {
            category: Category::Cases,
            data,
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "addPart", "payload": {"sheetName": "Cases", "data": {"Name": "Tofu60"}}})
        );
    }

    #[test]
    fn delete_part_keeps_id_as_stored() {
        let request = StoreRequest::DeletePart(DeletePart {
            category: Category::Stabs,
            id: Cell::from(12u64),
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "deletePart", "payload": {"sheetName": "Stabs", "id": 12}})
        );
    }

    #[test]
    fn create_keyboard_sends_raw_fields() {
        let fields = FormFields::from_iter([
            ("BuildName".to_owned(), "Daily".to_owned()),
            ("CaseID".to_owned(), "1".to_owned()),
        ]);
        let request = StoreRequest::CreateKeyboard(fields);
        assert_eq!(request.action(), "createKeyboard");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "createKeyboard", "payload": {"BuildName": "Daily", "CaseID": "1"}})
        );
    }
}
