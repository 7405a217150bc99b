pub mod add;
pub mod build;
pub mod delete;
pub mod list;
pub mod options;
pub mod settings;
pub mod version;

use crate::api::ClientApi;
use crate::config::Config;
use crate::session::{BusyIndicator, Session};

/// Opens a session against the configured store.
pub(crate) fn connect(config: &Config) -> anyhow::Result<Session<ClientApi>> {
    let api = ClientApi::from_config(config)?;
    tracing::debug!(url = %api.url(), "using store");
    Ok(Session::new(api, BusyIndicator::stderr()))
}
