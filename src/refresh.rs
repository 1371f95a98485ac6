//! Single-flight coordination for session refresh.
//!
//! At most one `/auth/refresh` call may be outstanding per client. The first
//! request to hit a 401 becomes the owner of the refresh attempt; every
//! other 401 that arrives while it is outstanding parks a continuation here
//! and is released, in FIFO order, with the shared outcome.

use std::sync::Arc;
use std::sync::Mutex;

use tokio::sync::broadcast;
use tokio::sync::oneshot;

use crate::error::RefreshError;

/// Shared outcome of one refresh cycle.
pub(crate) type RefreshOutcome = Result<(), RefreshError>;

/// Broadcast when a refresh attempt fails and the session should be treated
/// as ended (the original UI listened for this to force a logout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnded;

const SESSION_ENDED_CAPACITY: usize = 16;

/// Gate serializing refresh attempts for one client.
#[derive(Debug)]
pub(crate) struct RefreshGate {
    state: Mutex<GateState>,
    session_ended: broadcast::Sender<SessionEnded>,
}

#[derive(Debug, Default)]
struct GateState {
    refreshing: bool,
    // Insertion order is release order.
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// Result of asking the gate whether this request should refresh.
pub(crate) enum Admission {
    /// No refresh was in flight; the caller owns a new attempt and must
    /// settle the ticket once the refresh call completes.
    Owner(RefreshTicket),
    /// A refresh is already outstanding; await the receiver for its outcome.
    Queued(oneshot::Receiver<RefreshOutcome>),
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        let (session_ended, _) = broadcast::channel(SESSION_ENDED_CAPACITY);
        Self {
            state: Mutex::new(GateState::default()),
            session_ended,
        }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<SessionEnded> {
        self.session_ended.subscribe()
    }

    /// Check-and-set under one lock so two concurrent 401s can never both
    /// become owners. The lock covers bookkeeping only, never an await.
    pub(crate) fn admit(self: &Arc<Self>) -> Admission {
        let mut state = self.state.lock().unwrap();
        if state.refreshing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            tracing::debug!(waiting = state.waiters.len(), "refresh in flight; queueing request");
            Admission::Queued(rx)
        } else {
            state.refreshing = true;
            Admission::Owner(RefreshTicket {
                gate: Arc::clone(self),
                settled: false,
            })
        }
    }

    #[cfg(test)]
    fn is_idle(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.refreshing && state.waiters.is_empty()
    }
}

/// Obligation to settle one refresh cycle.
///
/// Settling drains the waiter queue in FIFO order with the shared outcome
/// and reopens the gate. If the owning future is dropped before settling,
/// `Drop` releases the waiters with an interrupted error so no continuation
/// hangs; the session-ended broadcast fires only for a refresh call that
/// actually failed.
#[derive(Debug)]
pub(crate) struct RefreshTicket {
    gate: Arc<RefreshGate>,
    settled: bool,
}

impl RefreshTicket {
    pub(crate) fn settle(mut self, outcome: RefreshOutcome) {
        self.release(&outcome);
        if let Err(err) = &outcome {
            tracing::info!(%err, "session refresh failed; broadcasting session end");
            // No subscribers is fine; the signal fires regardless.
            let _ = self.gate.session_ended.send(SessionEnded);
        }
    }

    fn release(&mut self, outcome: &RefreshOutcome) {
        if self.settled {
            return;
        }
        self.settled = true;
        let waiters = {
            let mut state = self.gate.state.lock().unwrap();
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            // A waiter may have been abandoned by its caller.
            let _ = waiter.send(outcome.clone());
        }
    }
}

impl Drop for RefreshTicket {
    fn drop(&mut self) {
        if !self.settled {
            self.release(&Err(RefreshError::interrupted()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gate() -> Arc<RefreshGate> {
        Arc::new(RefreshGate::new())
    }

    fn expect_owner(admission: Admission) -> RefreshTicket {
        match admission {
            Admission::Owner(ticket) => ticket,
            Admission::Queued(_) => panic!("expected to own the refresh"),
        }
    }

    fn expect_queued(admission: Admission) -> oneshot::Receiver<RefreshOutcome> {
        match admission {
            Admission::Owner(_) => panic!("expected to be queued"),
            Admission::Queued(rx) => rx,
        }
    }

    #[test]
    fn first_caller_owns_later_callers_queue() {
        let gate = gate();
        let ticket = expect_owner(gate.admit());
        let _rx1 = expect_queued(gate.admit());
        let _rx2 = expect_queued(gate.admit());
        ticket.settle(Ok(()));
    }

    #[tokio::test]
    async fn settle_releases_waiters_with_shared_outcome() {
        let gate = gate();
        let ticket = expect_owner(gate.admit());
        let rx1 = expect_queued(gate.admit());
        let rx2 = expect_queued(gate.admit());

        let failure = RefreshError {
            status: Some(401),
            detail: "session revoked".to_string(),
        };
        ticket.settle(Err(failure.clone()));

        assert_eq!(rx1.await.unwrap(), Err(failure.clone()));
        assert_eq!(rx2.await.unwrap(), Err(failure));
    }

    #[tokio::test]
    async fn waiters_resume_in_fifo_order() {
        let gate = gate();
        let ticket = expect_owner(gate.admit());

        let order = Arc::new(Mutex::new(Vec::new()));
        let mut tasks = Vec::new();
        for i in 0..4 {
            let rx = expect_queued(gate.admit());
            let order = Arc::clone(&order);
            tasks.push(tokio::spawn(async move {
                rx.await.unwrap().unwrap();
                order.lock().unwrap().push(i);
            }));
        }

        // Let every task park on its receiver before the refresh settles.
        tokio::task::yield_now().await;

        ticket.settle(Ok(()));
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn gate_is_idle_after_settle() {
        let gate = gate();
        let ticket = expect_owner(gate.admit());
        let _rx = expect_queued(gate.admit());
        ticket.settle(Ok(()));
        assert!(gate.is_idle());

        // A later 401 starts a fresh cycle.
        let ticket = expect_owner(gate.admit());
        ticket.settle(Err(RefreshError {
            status: Some(403),
            detail: "nope".to_string(),
        }));
        assert!(gate.is_idle());
    }

    #[tokio::test]
    async fn dropped_ticket_releases_waiters_with_interrupted_error() {
        let gate = gate();
        let ticket = expect_owner(gate.admit());
        let rx = expect_queued(gate.admit());
        let mut ended = gate.subscribe();

        drop(ticket);

        let outcome = rx.await.unwrap();
        assert_eq!(outcome, Err(RefreshError::interrupted()));
        assert!(gate.is_idle());
        // Interrupted is not a failed refresh; the session may still be live.
        assert!(ended.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_refresh_broadcasts_session_end_once() {
        let gate = gate();
        let mut ended = gate.subscribe();

        let ticket = expect_owner(gate.admit());
        ticket.settle(Err(RefreshError {
            status: Some(401),
            detail: "expired".to_string(),
        }));

        assert_eq!(ended.try_recv().unwrap(), SessionEnded);
        assert!(ended.try_recv().is_err());

        // A successful cycle stays silent.
        let ticket = expect_owner(gate.admit());
        ticket.settle(Ok(()));
        assert!(ended.try_recv().is_err());
    }
}
