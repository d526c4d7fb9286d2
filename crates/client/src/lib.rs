//! Vendor age signals API client.
//!
//! This crate models the vendor boundary of an age verification service:
//! - [`AgeSignalsManager`] — capability trait for issuing signals checks
//! - [`HttpAgeSignalsManager`] — real manager over the vendor's JSON service
//! - [`FakeAgeSignalsManager`] — in-memory test double with canned outcomes
//! - Data models for requests, results, and the verification status table
//! - Typed errors carrying the vendor's integer error codes
//!
//! Hosts normally do not use this crate directly; the bridge crate selects a
//! manager, maps results into a flat record, and delivers callbacks.

pub mod client;
pub mod error;
pub mod fake;
pub mod manager;
pub mod types;

// Re-export main types for convenience
pub use client::{HttpAgeSignalsManager, HttpManagerConfig, CHECK_PATH};
pub use error::{AgeSignalsError, ErrorCode, Result, INTERNAL_ERROR_CODE};
pub use fake::FakeAgeSignalsManager;
pub use manager::AgeSignalsManager;
pub use types::{
    AgeSignalsRequest, AgeSignalsResult, AgeSignalsResultBuilder, VerificationStatus,
};
