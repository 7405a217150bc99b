use std::fmt;

use keebtrack_inventory::FormError;
use thiserror::Error;

/// What the session was doing when an error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    /// A write, by its action tag.
    Write(&'static str),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fetch => f.write_str("inventory fetch"),
            Operation::Write(action) => write!(f, "`{action}` write"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{op} failed")]
    NetworkFailure {
        op: Operation,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("deletion was declined")]
    UserAbort,
    #[error("cannot start {requested} while {in_flight} is in flight")]
    Busy { requested: Operation, in_flight: Operation },
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("prompt failed")]
    Prompt(#[from] dialoguer::Error),
}

impl TrackerError {
    pub(crate) fn network(op: Operation, source: anyhow::Error) -> Self {
        TrackerError::NetworkFailure {
            op,
            source: source.into(),
        }
    }
}
