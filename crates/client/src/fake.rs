//! In-memory fake manager for tests and debug builds.
//!
//! The fake never performs I/O. It holds a single "next outcome" slot with
//! last-write-wins semantics; the configured outcome is returned for every
//! subsequent check until overwritten. Intended for single-threaded test
//! setups, so no stronger interleaving guarantee is made.

use crate::error::{AgeSignalsError, Result};
use crate::manager::AgeSignalsManager;
use crate::types::{AgeSignalsRequest, AgeSignalsResult};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Fake age signals manager returning canned outcomes.
#[derive(Debug, Default)]
pub struct FakeAgeSignalsManager {
    next: Mutex<Option<Result<AgeSignalsResult>>>,
}

impl FakeAgeSignalsManager {
    /// Creates a fake manager with no outcome configured.
    ///
    /// Until configured, checks resolve with an empty result (all fields
    /// unset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the result returned by subsequent checks.
    ///
    /// Overwrites any previously configured result or error.
    pub fn set_next_age_signals_result(&self, result: AgeSignalsResult) {
        *self.next.lock() = Some(Ok(result));
    }

    /// Installs the error returned by subsequent checks.
    ///
    /// Overwrites any previously configured result or error.
    pub fn set_next_error(&self, error: AgeSignalsError) {
        *self.next.lock() = Some(Err(error));
    }
}

#[async_trait]
impl AgeSignalsManager for FakeAgeSignalsManager {
    async fn check_age_signals(&self, _request: AgeSignalsRequest) -> Result<AgeSignalsResult> {
        self.next
            .lock()
            .clone()
            .unwrap_or_else(|| Ok(AgeSignalsResult::default()))
    }
}
