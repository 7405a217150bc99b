use thiserror::Error;

use crate::messages::{AddPart, FormFields, StoreRequest};
use crate::Category;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("form `{form}` has no field named `{field}`")]
    UnknownField { form: &'static str, field: String },
    #[error("form `{form}` requires a value for `{field}`")]
    MissingField { form: &'static str, field: &'static str },
    #[error("expected a field assignment like `Name=value`, found `{0}`")]
    MalformedAssignment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Adds one part to the given category's sheet.
    AddPart(Category),
    /// Creates a build out of one part per category.
    CreateKeyboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    /// For build references, the category whose identifiers this field holds.
    pub references: Option<Category>,
}

const fn field(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        required: false,
        references: None,
    }
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
        references: None,
    }
}

const fn reference(name: &'static str, category: Category) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
        references: Some(category),
    }
}

/// A registered form: its id, what it submits, and the fields it carries.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub id: &'static str,
    pub kind: FormKind,
    pub fields: &'static [FieldSpec],
}

pub static ADD_CASE_FORM: FormSpec = FormSpec {
    id: "add-case-form",
    kind: FormKind::AddPart(Category::Cases),
    fields: &[required("Name"), field("Brand"), field("Color"), field("Notes")],
};

pub static ADD_SWITCH_FORM: FormSpec = FormSpec {
    id: "add-switch-form",
    kind: FormKind::AddPart(Category::Switches),
    fields: &[
        required("Name"),
        field("Brand"),
        field("Type"),
        field("Quantity"),
        field("Notes"),
    ],
};

pub static ADD_STAB_FORM: FormSpec = FormSpec {
    id: "add-stab-form",
    kind: FormKind::AddPart(Category::Stabs),
    fields: &[
        required("Name"),
        field("Brand"),
        field("Color"),
        field("KitSize"),
        field("Notes"),
    ],
};

pub static ADD_KEYCAP_FORM: FormSpec = FormSpec {
    id: "add-keycap-form",
    kind: FormKind::AddPart(Category::Keycaps),
    fields: &[
        required("Name"),
        field("Brand"),
        field("Profile"),
        field("Material"),
        field("Notes"),
    ],
};

pub static CREATE_KEYBOARD_FORM: FormSpec = FormSpec {
    id: "create-keyboard-form",
    kind: FormKind::CreateKeyboard,
    fields: &[
        required("BuildName"),
        reference("CaseID", Category::Cases),
        reference("SwitchID", Category::Switches),
        reference("StabID", Category::Stabs),
        reference("KeycapID", Category::Keycaps),
    ],
};

impl FormSpec {
    /// The form that creates records in `category`.
    pub fn for_category(category: Category) -> &'static FormSpec {
        match category {
            Category::Cases => &ADD_CASE_FORM,
            Category::Switches => &ADD_SWITCH_FORM,
            Category::Stabs => &ADD_STAB_FORM,
            Category::Keycaps => &ADD_KEYCAP_FORM,
            Category::Keyboards => &CREATE_KEYBOARD_FORM,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The live state of one form: the values typed into it so far.
#[derive(Debug)]
pub struct Form {
    spec: &'static FormSpec,
    values: FormFields,
}

impl Form {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            values: FormFields::new(),
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self.spec.field(name).ok_or_else(|| FormError::UnknownField {
            form: self.spec.id,
            field: name.to_owned(),
        })?;
        self.values.insert(field.name.to_owned(), value.into());
        Ok(())
    }

    /// Sets a field from a `Name=value` assignment.
    pub fn assign(&mut self, assignment: &str) -> Result<(), FormError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| FormError::MalformedAssignment(assignment.to_owned()))?;
        self.set(name.trim(), value)
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Serializes the filled fields into the form's write request and resets the form.
    ///
    /// The form is empty afterwards whether or not serialization succeeded.
    /// A field that was set but left blank is sent as an empty string, the way
    /// the store's web form sends it. Fields never set are left out, and a
    /// blank or unset required field is an error.
    pub fn take(&mut self) -> Result<StoreRequest, FormError> {
        let mut values = std::mem::take(&mut self.values);
        let mut data = FormFields::with_capacity(values.len());
        for field in self.spec.fields {
            let value = values.swap_remove(field.name);
            let blank = value.as_deref().is_none_or(|v| v.trim().is_empty());
            if blank && field.required {
                return Err(FormError::MissingField {
                    form: self.spec.id,
                    field: field.name,
                });
            }
            if let Some(value) = value {
                let value = if blank { String::new() } else { value };
                data.insert(field.name.to_owned(), value);
            }
        }
        Ok(match self.spec.kind {
            FormKind::AddPart(category) => StoreRequest::AddPart(AddPart { category, data }),
            FormKind::CreateKeyboard => StoreRequest::CreateKeyboard(data),
        })
    }
}
