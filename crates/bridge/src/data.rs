//! Typed consumer view over the bridge JSON.
//!
//! Hosts that want structured access instead of raw JSON can parse the
//! success payload back into [`AgeSignalsData`], which undoes the sentinel
//! encoding and interprets the status code table.

use crate::mapping::{MappedResult, NO_APPROVAL_DATE_MILLIS};
use age_signals_client::VerificationStatus;
use chrono::{DateTime, Utc};

/// Structured view of one successful signals check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeSignalsData {
    mapped: MappedResult,
}

impl AgeSignalsData {
    /// Parses the JSON string delivered to `on_success`.
    ///
    /// # Errors
    /// Returns an error if the string is not a well-formed bridge payload.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self {
            mapped: serde_json::from_str(json)?,
        })
    }

    /// Wraps an already-mapped record.
    #[must_use]
    pub const fn from_mapped(mapped: MappedResult) -> Self {
        Self { mapped }
    }

    /// Raw user status code, sentinel included.
    #[must_use]
    pub const fn user_status(&self) -> i32 {
        self.mapped.user_status
    }

    /// User status interpreted against the documented code table.
    #[must_use]
    pub fn status(&self) -> Option<VerificationStatus> {
        VerificationStatus::from_code(self.mapped.user_status)
    }

    /// Lower age bound, undoing the -1 sentinel.
    #[must_use]
    pub fn age_lower(&self) -> Option<i32> {
        (self.mapped.age_lower >= 0).then_some(self.mapped.age_lower)
    }

    /// Upper age bound, undoing the -1 sentinel.
    #[must_use]
    pub fn age_upper(&self) -> Option<i32> {
        (self.mapped.age_upper >= 0).then_some(self.mapped.age_upper)
    }

    /// Most recent approval date, undoing the 0 sentinel.
    #[must_use]
    pub fn approval_date(&self) -> Option<DateTime<Utc>> {
        if self.mapped.most_recent_approval_date == NO_APPROVAL_DATE_MILLIS {
            return None;
        }
        DateTime::from_timestamp_millis(self.mapped.most_recent_approval_date)
    }

    /// Install identifier, if present.
    #[must_use]
    pub fn install_id(&self) -> Option<&str> {
        self.mapped.install_id.as_deref()
    }

    /// True for either supervised state.
    #[must_use]
    pub fn is_supervised(&self) -> bool {
        self.status().is_some_and(VerificationStatus::is_supervised)
    }

    /// True when the user's age has been verified.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status() == Some(VerificationStatus::Verified)
    }

    /// True when the service could not determine a status.
    #[must_use]
    pub fn is_unverified(&self) -> bool {
        self.status() == Some(VerificationStatus::Unknown)
    }

    /// True when age signals do not apply to this user or region.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        self.status() == Some(VerificationStatus::NotApplicable)
    }
}
