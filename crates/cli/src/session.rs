use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use keebtrack_inventory::{Snapshot, StoreRequest};
use parking_lot::{Mutex, RwLock};

use crate::api::InventoryStore;
use crate::errors::{Operation, TrackerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Idle,
    Busy(Operation),
}

/// Shows that an operation is in flight.
#[derive(Debug, Clone, Copy)]
pub struct BusyIndicator {
    visible: bool,
}

impl BusyIndicator {
    /// A spinner on stderr, if stderr is a terminal.
    pub fn stderr() -> Self {
        Self {
            visible: std::io::stderr().is_terminal(),
        }
    }

    pub fn hidden() -> Self {
        Self { visible: false }
    }

    fn start(&self, op: Operation) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("{op}..."));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

/// Marks the session busy for as long as it lives.
struct BusyGuard<'a> {
    state: &'a Mutex<ClientState>,
    spinner: ProgressBar,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
        *self.state.lock() = ClientState::Idle;
    }
}

/// Owns the current snapshot and serializes every call to the store.
///
/// At most one operation is in flight at a time; anything issued while the
/// session is busy is rejected with [`TrackerError::Busy`]. The snapshot is
/// only ever replaced wholesale, by a successful fetch.
pub struct Session<S> {
    store: S,
    state: Mutex<ClientState>,
    snapshot: RwLock<Arc<Snapshot>>,
    indicator: BusyIndicator,
}

impl<S: InventoryStore> Session<S> {
    pub fn new(store: S, indicator: BusyIndicator) -> Self {
        Self {
            store,
            state: Mutex::new(ClientState::Idle),
            snapshot: RwLock::new(Arc::default()),
            indicator,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> ClientState {
        *self.state.lock()
    }

    /// The last successfully fetched snapshot; empty before the first fetch.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.read().clone()
    }

    fn begin(&self, op: Operation) -> Result<BusyGuard<'_>, TrackerError> {
        let mut state = self.state.lock();
        if let ClientState::Busy(in_flight) = *state {
            tracing::warn!(%op, %in_flight, "rejecting overlapping operation");
            return Err(TrackerError::Busy {
                requested: op,
                in_flight,
            });
        }
        *state = ClientState::Busy(op);
        Ok(BusyGuard {
            state: &self.state,
            spinner: self.indicator.start(op),
        })
    }

    /// Fetches a fresh snapshot and makes it current.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, TrackerError> {
        let _busy = self.begin(Operation::Fetch)?;
        self.fetch().await
    }

    async fn fetch(&self) -> Result<Arc<Snapshot>, TrackerError> {
        match self.store.fetch_all().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                tracing::debug!(records = snapshot.total_len(), "inventory fetched");
                *self.snapshot.write() = snapshot.clone();
                Ok(snapshot)
            }
            Err(e) => {
                tracing::debug!("Error fetching inventory: {e:#}");
                Err(TrackerError::network(Operation::Fetch, e))
            }
        }
    }

    /// Posts `request`, then refetches once the store has acknowledged it.
    ///
    /// The session stays busy across both calls. A failed write leaves the
    /// current snapshot in place and skips the refetch. Failures are returned
    /// to the caller to report and only logged at `debug`.
    pub async fn submit(&self, request: StoreRequest) -> Result<Arc<Snapshot>, TrackerError> {
        let op = Operation::Write(request.action());
        let _busy = self.begin(op)?;
        match self.store.submit(&request).await {
            Ok(ack) => tracing::info!(action = request.action(), %ack, "write acknowledged"),
            Err(e) => {
                tracing::debug!(action = request.action(), "Error posting data: {e:#}");
                return Err(TrackerError::network(op, e));
            }
        }
        self.fetch().await
    }
}
