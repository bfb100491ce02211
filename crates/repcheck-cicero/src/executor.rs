//! Query state machine: Idle → Loading → Success | Failure.
//!
//! The executor owns the only copy of the lookup state and publishes every
//! transition on a watch channel. At most one lookup is in flight; a submit
//! while Loading is refused rather than queued. A submit dropped mid-flight
//! still leaves Loading, as a transport failure.

use repcheck_core::Official;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::RepresentativeLookup;
use crate::error::TRANSPORT_MESSAGE;
use crate::response::Lookup;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    Idle,
    Loading,
    Success {
        normalized_address: String,
        officials: Vec<Official>,
    },
    Failure {
        message: String,
    },
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What happened to a call to [`QueryExecutor::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Address was blank; nothing was sent.
    Blank,
    /// A lookup was already in flight; nothing was sent.
    Busy,
    /// The lookup ran and the state is now Success or Failure.
    Completed,
}

pub struct QueryExecutor<L> {
    lookup: L,
    state: watch::Sender<QueryState>,
}

impl<L: RepresentativeLookup> QueryExecutor<L> {
    pub fn new(lookup: L) -> Self {
        let (state, _) = watch::channel(QueryState::Idle);
        Self { lookup, state }
    }

    /// Look up representatives for `address`.
    ///
    /// The address is sent as entered; only its trimmed form is checked for
    /// blankness. Failures are terminal for the request and are never retried.
    pub async fn submit(&self, address: &str) -> Submission {
        if address.trim().is_empty() {
            debug!("ignoring blank address");
            return Submission::Blank;
        }

        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = QueryState::Loading;
            true
        });
        if !started {
            debug!("lookup already in flight, ignoring submit");
            return Submission::Busy;
        }
        let in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        let next = match self.lookup.lookup(address).await {
            Ok(Lookup {
                normalized_address,
                officials,
            }) => {
                info!(officials = officials.len(), "query succeeded");
                QueryState::Success {
                    normalized_address,
                    officials,
                }
            }
            Err(e) => {
                warn!(error = %e, "query failed");
                QueryState::Failure {
                    message: e.user_message(),
                }
            }
        };
        in_flight.settle(next);
        Submission::Completed
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    /// True while a lookup is in flight; the submit control should be disabled.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Observe state transitions as they happen.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }
}

/// Owns the Loading state for one submit; dropping it unsettled records a
/// transport failure so the executor never stays Loading.
struct InFlight<'a> {
    state: &'a watch::Sender<QueryState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, next: QueryState) {
        self.state.send_replace(next);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("lookup cancelled while in flight");
        self.state.send_replace(QueryState::Failure {
            message: TRANSPORT_MESSAGE.to_string(),
        });
    }
}
