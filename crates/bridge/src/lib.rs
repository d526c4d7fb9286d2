//! Host-facing bridge over the vendor age signals client.
//!
//! This crate provides:
//! - [`SignalsBridge`] — selects a real or fake manager at construction,
//!   issues one asynchronous check per request, and delivers exactly one
//!   success/error callback
//! - [`mapping`] — pure sentinel substitution from the vendor's
//!   optional-field result to the flat JSON record hosts consume
//! - [`callback`] — the terminal notification trait plus a oneshot-channel
//!   adapter for awaiting callers
//! - [`data`] — typed view parsed back from the bridge JSON
//!
//! # Example
//!
//! ```ignore
//! use age_signals_bridge::{FakeResultSpec, SignalsBridge, SignalsOutcome};
//! use age_signals_client::HttpManagerConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let bridge = SignalsBridge::new(HttpManagerConfig::default(), true).unwrap();
//!     bridge.configure_fake_result(&FakeResultSpec {
//!         user_status: 1,
//!         age_lower: 13,
//!         age_upper: 17,
//!         ..Default::default()
//!     });
//!
//!     match bridge.check().await {
//!         SignalsOutcome::Success(json) => println!("{json}"),
//!         SignalsOutcome::Error { code, message } => eprintln!("{code}: {message}"),
//!     }
//! }
//! ```

pub mod bridge;
pub mod callback;
pub mod data;
pub mod mapping;

// Re-export main types for convenience
pub use bridge::{FakeResultSpec, ManagerMode, SignalsBridge};
pub use callback::{outcome_channel, AgeSignalsCallback, OutcomeSender, SignalsOutcome};
pub use data::AgeSignalsData;
pub use mapping::{
    map_result, MappedResult, AGE_UNKNOWN, NO_APPROVAL_DATE_MILLIS, USER_STATUS_NOT_APPLICABLE,
};
