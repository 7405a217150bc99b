//! The add/create forms and the delete flow, driven against a [`Session`].

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use keebtrack_inventory::{DeleteAffordance, Form, FormSpec, Snapshot};

use crate::api::InventoryStore;
use crate::errors::TrackerError;
use crate::session::Session;

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> dialoguer::Result<bool>;
}

/// Confirms through a terminal prompt, unless told to assume "yes".
pub struct PromptConfirm {
    pub assume_yes: bool,
}

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> dialoguer::Result<bool> {
        if self.assume_yes {
            println!("Skipping confirmation due to --yes");
            return Ok(true);
        }
        dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
    }
}

/// One registered form, bound to its write.
pub struct FormController {
    form: Form,
}

impl FormController {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self { form: Form::new(spec) }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Submits the filled fields and returns the refetched snapshot.
    ///
    /// The form is reset whatever the outcome, including when a required
    /// field is missing and nothing is sent.
    pub async fn submit<S: InventoryStore>(&mut self, session: &Session<S>) -> Result<Arc<Snapshot>, TrackerError> {
        let request = self.form.take()?;
        tracing::debug!(form = self.form.spec().id, action = request.action(), "submitting form");
        session.submit(request).await
    }
}

/// Handles delete affordances: confirm, then post `deletePart`.
pub struct DeleteController<C> {
    confirm: C,
}

impl<C: Confirm> DeleteController<C> {
    pub fn new(confirm: C) -> Self {
        Self { confirm }
    }

    /// Deletes the record behind `target` once the user confirms.
    ///
    /// Declining sends nothing and yields [`TrackerError::UserAbort`].
    pub async fn on_delete<S: InventoryStore>(
        &mut self,
        session: &Session<S>,
        target: &DeleteAffordance,
    ) -> Result<Arc<Snapshot>, TrackerError> {
        let prompt = format!(
            "Are you sure you want to delete this item? ({} {})",
            target.category.label(),
            target.id
        );
        if !self.confirm.confirm(&prompt)? {
            tracing::debug!(category = %target.category, id = %target.id, "delete declined");
            return Err(TrackerError::UserAbort);
        }
        session.submit(target.request()).await
    }
}
