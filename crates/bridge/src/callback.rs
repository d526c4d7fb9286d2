//! Terminal notification surface for bridged requests.
//!
//! Each request resolves into exactly one of two notifications. Callers that
//! prefer awaiting over registering a callback can use [`outcome_channel`],
//! which adapts the callback surface onto a oneshot channel.

use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Callback invoked with the terminal outcome of one request.
///
/// Exactly one of the two methods fires per request, on whatever task the
/// bridge's spawned work runs on. Implementations must not assume a specific
/// thread.
pub trait AgeSignalsCallback: Send + Sync {
    /// Called with the flat JSON result on success.
    fn on_success(&self, json: &str);

    /// Called with a vendor or internal error code and message on failure.
    fn on_error(&self, code: i32, message: &str);
}

/// Terminal outcome of one bridged request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalsOutcome {
    /// The flat JSON result string.
    Success(String),
    /// An error code and message.
    Error {
        /// Vendor error code, or -100 when untyped.
        code: i32,
        /// Human-readable message.
        message: String,
    },
}

/// Creates a linked callback/receiver pair.
///
/// The returned sender implements [`AgeSignalsCallback`] and forwards the
/// first terminal notification into the receiver. A second notification,
/// which the bridge never produces, would be dropped.
#[must_use]
pub fn outcome_channel() -> (OutcomeSender, oneshot::Receiver<SignalsOutcome>) {
    let (tx, rx) = oneshot::channel();
    (
        OutcomeSender {
            tx: Mutex::new(Some(tx)),
        },
        rx,
    )
}

/// Callback adapter forwarding the outcome into a oneshot channel.
pub struct OutcomeSender {
    tx: Mutex<Option<oneshot::Sender<SignalsOutcome>>>,
}

impl std::fmt::Debug for OutcomeSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutcomeSender")
            .field("delivered", &self.tx.lock().is_none())
            .finish()
    }
}

impl OutcomeSender {
    fn deliver(&self, outcome: SignalsOutcome) {
        if let Some(tx) = self.tx.lock().take() {
            // Receiver may have been dropped; nothing left to notify then.
            let _ = tx.send(outcome);
        }
    }
}

impl AgeSignalsCallback for OutcomeSender {
    fn on_success(&self, json: &str) {
        self.deliver(SignalsOutcome::Success(json.to_string()));
    }

    fn on_error(&self, code: i32, message: &str) {
        self.deliver(SignalsOutcome::Error {
            code,
            message: message.to_string(),
        });
    }
}
