//! Data models for the age signals vendor API.
//!
//! The vendor result is an optional-field record: every field may be unset,
//! meaning the signal does not apply to this user or region. Sentinel
//! substitution for hosts that want a flat record lives in the bridge crate,
//! not here.

use chrono::{DateTime, Utc};

// =============================================================================
// Verification Status
// =============================================================================

/// User verification status codes returned by the age signals service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// The user's age has been verified.
    Verified,
    /// The user is supervised by a guardian account.
    Supervised,
    /// Supervised, with a guardian approval still pending.
    SupervisedApprovalPending,
    /// Supervised, and the guardian denied approval.
    SupervisedApprovalDenied,
    /// The service could not determine a status.
    Unknown,
    /// Age signals do not apply to this user or region.
    NotApplicable,
}

impl VerificationStatus {
    /// Returns the wire integer for this status.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Verified => 0,
            Self::Supervised => 1,
            Self::SupervisedApprovalPending => 2,
            Self::SupervisedApprovalDenied => 3,
            Self::Unknown => 4,
            Self::NotApplicable => 5,
        }
    }

    /// Parses a wire integer into a status.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Verified),
            1 => Some(Self::Supervised),
            2 => Some(Self::SupervisedApprovalPending),
            3 => Some(Self::SupervisedApprovalDenied),
            4 => Some(Self::Unknown),
            5 => Some(Self::NotApplicable),
            _ => None,
        }
    }

    /// Returns true for either supervised state.
    #[must_use]
    pub const fn is_supervised(self) -> bool {
        matches!(self, Self::Supervised | Self::SupervisedApprovalPending)
    }
}

// =============================================================================
// Request
// =============================================================================

/// Request payload for an age signals check.
///
/// The current API version accepts no parameters; the type exists to keep the
/// manager seam stable if the vendor adds request fields later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeSignalsRequest {}

impl AgeSignalsRequest {
    /// Creates an empty request.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

// =============================================================================
// Result
// =============================================================================

/// A vendor age signals result.
///
/// All fields are optional; unset means the signal is not available for this
/// user. Construct with [`AgeSignalsResult::builder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeSignalsResult {
    user_status: Option<i32>,
    age_lower: Option<i32>,
    age_upper: Option<i32>,
    most_recent_approval_date: Option<DateTime<Utc>>,
    install_id: Option<String>,
}

impl AgeSignalsResult {
    /// Creates a builder with all fields unset.
    #[must_use]
    pub fn builder() -> AgeSignalsResultBuilder {
        AgeSignalsResultBuilder::default()
    }

    /// Raw user status code, if set.
    #[must_use]
    pub const fn user_status(&self) -> Option<i32> {
        self.user_status
    }

    /// User status interpreted against the documented code table.
    #[must_use]
    pub fn verification_status(&self) -> Option<VerificationStatus> {
        self.user_status.and_then(VerificationStatus::from_code)
    }

    /// Lower bound of the age estimate, if set.
    #[must_use]
    pub const fn age_lower(&self) -> Option<i32> {
        self.age_lower
    }

    /// Upper bound of the age estimate, if set.
    #[must_use]
    pub const fn age_upper(&self) -> Option<i32> {
        self.age_upper
    }

    /// Most recent guardian approval date, if set.
    #[must_use]
    pub const fn most_recent_approval_date(&self) -> Option<DateTime<Utc>> {
        self.most_recent_approval_date
    }

    /// Opaque install identifier, if set.
    #[must_use]
    pub fn install_id(&self) -> Option<&str> {
        self.install_id.as_deref()
    }
}

/// Builder for [`AgeSignalsResult`].
#[derive(Debug, Clone, Default)]
pub struct AgeSignalsResultBuilder {
    inner: AgeSignalsResult,
}

impl AgeSignalsResultBuilder {
    /// Sets the user status code.
    #[must_use]
    pub fn user_status(mut self, status: i32) -> Self {
        self.inner.user_status = Some(status);
        self
    }

    /// Sets the lower age bound.
    #[must_use]
    pub fn age_lower(mut self, age: i32) -> Self {
        self.inner.age_lower = Some(age);
        self
    }

    /// Sets the upper age bound.
    #[must_use]
    pub fn age_upper(mut self, age: i32) -> Self {
        self.inner.age_upper = Some(age);
        self
    }

    /// Sets the most recent approval date.
    #[must_use]
    pub fn most_recent_approval_date(mut self, date: DateTime<Utc>) -> Self {
        self.inner.most_recent_approval_date = Some(date);
        self
    }

    /// Sets the install identifier.
    #[must_use]
    pub fn install_id(mut self, id: impl Into<String>) -> Self {
        self.inner.install_id = Some(id.into());
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> AgeSignalsResult {
        self.inner
    }
}
