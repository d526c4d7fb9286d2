//! Capability seam over the vendor age signals service.

use crate::error::Result;
use crate::types::{AgeSignalsRequest, AgeSignalsResult};
use async_trait::async_trait;

/// A manager capable of answering age signals checks.
///
/// Two implementations ship with this crate: [`HttpAgeSignalsManager`] for the
/// real vendor service and [`FakeAgeSignalsManager`] for tests and debug
/// builds.
///
/// [`HttpAgeSignalsManager`]: crate::client::HttpAgeSignalsManager
/// [`FakeAgeSignalsManager`]: crate::fake::FakeAgeSignalsManager
#[async_trait]
pub trait AgeSignalsManager: Send + Sync {
    /// Issues a single signals check and resolves with the vendor result.
    async fn check_age_signals(&self, request: AgeSignalsRequest) -> Result<AgeSignalsResult>;
}
