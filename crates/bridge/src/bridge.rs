//! The host-facing signals bridge.
//!
//! Selects a vendor manager at construction (real HTTP manager or in-memory
//! fake, keyed by an explicit mode tag rather than downcasting), issues one
//! asynchronous check per request, and delivers exactly one terminal callback
//! with either the flat JSON record or an error code and message.

use crate::callback::{outcome_channel, AgeSignalsCallback, SignalsOutcome};
use crate::mapping::map_result;
use age_signals_client::{
    AgeSignalsManager, AgeSignalsRequest, AgeSignalsResult, FakeAgeSignalsManager,
    HttpAgeSignalsManager, HttpManagerConfig, Result, INTERNAL_ERROR_CODE,
};
use std::sync::Arc;

/// Which kind of manager the bridge holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerMode {
    /// Real vendor manager performing service calls.
    Real,
    /// In-memory fake returning canned outcomes.
    Fake,
}

/// Canned-result specification for fake-mode bridges.
///
/// Mirrors the host-facing setter: `user_status` is always applied,
/// `age_lower`/`age_upper` only when positive, `install_id` only when
/// non-empty, `date_millis` only when positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeResultSpec {
    /// User status code; always installed on the canned result.
    pub user_status: i32,

    /// Lower age bound; ignored unless positive.
    pub age_lower: i32,

    /// Upper age bound; ignored unless positive.
    pub age_upper: i32,

    /// Install identifier; ignored unless non-empty.
    pub install_id: Option<String>,

    /// Approval date in epoch milliseconds; ignored unless positive.
    pub date_millis: i64,
}

impl FakeResultSpec {
    fn to_result(&self) -> AgeSignalsResult {
        let mut builder = AgeSignalsResult::builder().user_status(self.user_status);

        if self.age_lower > 0 {
            builder = builder.age_lower(self.age_lower);
        }
        if self.age_upper > 0 {
            builder = builder.age_upper(self.age_upper);
        }
        if let Some(id) = self.install_id.as_deref().filter(|id| !id.is_empty()) {
            builder = builder.install_id(id);
        }
        if self.date_millis > 0 {
            if let Some(date) = chrono::DateTime::from_timestamp_millis(self.date_millis) {
                builder = builder.most_recent_approval_date(date);
            }
        }

        builder.build()
    }
}

/// Bridge between a host runtime and the vendor age signals service.
///
/// The manager reference is read-only after construction; the fake's canned
/// outcome slot is the only mutable state, and only fake-mode bridges reach
/// it.
pub struct SignalsBridge {
    mode: ManagerMode,
    manager: Arc<dyn AgeSignalsManager>,
    /// Set iff `mode == ManagerMode::Fake`.
    fake: Option<Arc<FakeAgeSignalsManager>>,
}

impl std::fmt::Debug for SignalsBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalsBridge")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl SignalsBridge {
    /// Creates a bridge, selecting the manager by the `debug` flag.
    ///
    /// With `debug` false a real HTTP manager is built from `config`; with
    /// `debug` true an unconfigured fake is held instead and `config` is
    /// ignored.
    ///
    /// # Errors
    /// Returns an error only in real mode, if the HTTP manager cannot be
    /// built from `config`.
    pub fn new(config: HttpManagerConfig, debug: bool) -> Result<Self> {
        if debug {
            let fake = Arc::new(FakeAgeSignalsManager::new());
            Ok(Self {
                mode: ManagerMode::Fake,
                manager: fake.clone(),
                fake: Some(fake),
            })
        } else {
            let manager = Arc::new(HttpAgeSignalsManager::new(config)?);
            Ok(Self {
                mode: ManagerMode::Real,
                manager,
                fake: None,
            })
        }
    }

    /// Creates a real-mode bridge around an externally supplied manager.
    #[must_use]
    pub fn with_manager(manager: Arc<dyn AgeSignalsManager>) -> Self {
        Self {
            mode: ManagerMode::Real,
            manager,
            fake: None,
        }
    }

    /// Returns the bridge's manager mode.
    #[must_use]
    pub const fn mode(&self) -> ManagerMode {
        self.mode
    }

    /// Installs a canned result on the fake manager.
    ///
    /// Silently ignored unless the bridge was constructed in fake mode.
    /// Calling again overwrites the previous configuration.
    pub fn configure_fake_result(&self, spec: &FakeResultSpec) {
        match &self.fake {
            Some(fake) => fake.set_next_age_signals_result(spec.to_result()),
            None => {
                tracing::debug!("configure_fake_result ignored: bridge holds a real manager");
            }
        }
    }

    /// Issues one asynchronous signals check.
    ///
    /// Returns immediately. Exactly one of the callback's notifications fires
    /// later from a spawned task: `on_success` with the flat JSON record, or
    /// `on_error` with the vendor's typed code (or -100 when untyped) and a
    /// message. Nothing propagates back to the caller; a serialization
    /// failure on the success path also arrives as `on_error(-100, ...)`.
    ///
    /// Must be called within a tokio runtime. No cancellation, timeout, or
    /// retry is provided.
    pub fn request_age_signals<C>(&self, callback: C)
    where
        C: AgeSignalsCallback + 'static,
    {
        let manager = Arc::clone(&self.manager);

        tokio::spawn(async move {
            match manager.check_age_signals(AgeSignalsRequest::new()).await {
                Ok(result) => {
                    let mapped = map_result(&result);
                    match mapped.to_json() {
                        Ok(json) => callback.on_success(&json),
                        Err(e) => {
                            tracing::error!("serializing mapped result failed: {e}");
                            callback.on_error(
                                INTERNAL_ERROR_CODE,
                                &format!("JSON serialization failed: {e}"),
                            );
                        }
                    }
                }
                Err(e) => {
                    tracing::debug!("age signals check failed: {e}");
                    callback.on_error(
                        e.typed_code().unwrap_or(INTERNAL_ERROR_CODE),
                        &e.detail(),
                    );
                }
            }
        });
    }

    /// Awaitable form of [`request_age_signals`](Self::request_age_signals).
    pub async fn check(&self) -> SignalsOutcome {
        let (callback, rx) = outcome_channel();
        self.request_age_signals(callback);
        rx.await.unwrap_or_else(|_| SignalsOutcome::Error {
            code: INTERNAL_ERROR_CODE,
            message: "request task dropped before completing".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AgeSignalsData;
    use age_signals_client::AgeSignalsError;

    fn fake_bridge() -> SignalsBridge {
        SignalsBridge::new(HttpManagerConfig::default(), true).unwrap()
    }

    fn spec(user_status: i32) -> FakeResultSpec {
        FakeResultSpec {
            user_status,
            ..Default::default()
        }
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_debug_flag_selects_fake_mode() {
        assert_eq!(fake_bridge().mode(), ManagerMode::Fake);
    }

    #[test]
    fn test_real_mode_needs_valid_config() {
        let bridge =
            SignalsBridge::new(HttpManagerConfig::new("https://agesignals.example.com"), false)
                .unwrap();
        assert_eq!(bridge.mode(), ManagerMode::Real);

        // Empty base URL only fails real-mode construction.
        assert!(SignalsBridge::new(HttpManagerConfig::default(), false).is_err());
    }

    #[test]
    fn test_injected_manager_is_real_mode() {
        let bridge = SignalsBridge::with_manager(Arc::new(FakeAgeSignalsManager::new()));
        assert_eq!(bridge.mode(), ManagerMode::Real);
    }

    // ==================== Spec Gating Tests ====================

    #[test]
    fn test_spec_positivity_gating() {
        let full = FakeResultSpec {
            user_status: 2,
            age_lower: 13,
            age_upper: 17,
            install_id: Some("abc123".to_string()),
            date_millis: 1_700_000_000_000,
        };
        let result = full.to_result();
        assert_eq!(result.user_status(), Some(2));
        assert_eq!(result.age_lower(), Some(13));
        assert_eq!(result.age_upper(), Some(17));
        assert_eq!(result.install_id(), Some("abc123"));
        assert_eq!(
            result.most_recent_approval_date().map(|d| d.timestamp_millis()),
            Some(1_700_000_000_000)
        );

        let gated = FakeResultSpec {
            user_status: 0,
            age_lower: 0,
            age_upper: -4,
            install_id: Some(String::new()),
            date_millis: 0,
        };
        let result = gated.to_result();
        assert_eq!(result.user_status(), Some(0));
        assert_eq!(result.age_lower(), None);
        assert_eq!(result.age_upper(), None);
        assert_eq!(result.install_id(), None);
        assert_eq!(result.most_recent_approval_date(), None);
    }

    // ==================== Request Path Tests ====================

    #[tokio::test]
    async fn test_fake_flow_end_to_end() {
        let bridge = fake_bridge();
        bridge.configure_fake_result(&FakeResultSpec {
            user_status: 2,
            age_lower: 13,
            age_upper: 17,
            install_id: Some("abc123".to_string()),
            date_millis: 1_700_000_000_000,
        });

        let SignalsOutcome::Success(json) = bridge.check().await else {
            panic!("expected success");
        };
        let data = AgeSignalsData::from_json(&json).unwrap();
        assert_eq!(data.user_status(), 2);
        assert_eq!(data.age_lower(), Some(13));
        assert_eq!(data.age_upper(), Some(17));
        assert_eq!(data.install_id(), Some("abc123"));
        assert_eq!(
            data.approval_date().map(|d| d.timestamp_millis()),
            Some(1_700_000_000_000)
        );
    }

    #[tokio::test]
    async fn test_unconfigured_fake_yields_sentinels() {
        let bridge = fake_bridge();

        let SignalsOutcome::Success(json) = bridge.check().await else {
            panic!("expected success");
        };
        assert_eq!(
            json,
            r#"{"userStatus":5,"ageLower":-1,"ageUpper":-1,"mostRecentApprovalDate":0,"installId":null}"#
        );
    }

    #[tokio::test]
    async fn test_configure_overwrite_semantics() {
        let bridge = fake_bridge();
        bridge.configure_fake_result(&spec(1));
        bridge.configure_fake_result(&spec(3));

        let SignalsOutcome::Success(json) = bridge.check().await else {
            panic!("expected success");
        };
        let data = AgeSignalsData::from_json(&json).unwrap();
        assert_eq!(data.user_status(), 3);
    }

    #[tokio::test]
    async fn test_configure_ignored_in_real_mode() {
        // The mode tag gates configuration even when the held manager happens
        // to be a fake.
        let fake = Arc::new(FakeAgeSignalsManager::new());
        let bridge = SignalsBridge::with_manager(fake.clone());
        bridge.configure_fake_result(&spec(3));

        let SignalsOutcome::Success(json) = bridge.check().await else {
            panic!("expected success");
        };
        let data = AgeSignalsData::from_json(&json).unwrap();
        assert_eq!(data.user_status(), 5);
    }

    #[tokio::test]
    async fn test_typed_vendor_error_code_passes_through() {
        let fake = Arc::new(FakeAgeSignalsManager::new());
        fake.set_next_error(AgeSignalsError::api(42, "quota exhausted"));
        let bridge = SignalsBridge::with_manager(fake);

        assert_eq!(
            bridge.check().await,
            SignalsOutcome::Error {
                code: 42,
                message: "quota exhausted".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_untyped_error_defaults_to_internal_code() {
        let fake = Arc::new(FakeAgeSignalsManager::new());
        fake.set_next_error(AgeSignalsError::Network("connection reset".to_string()));
        let bridge = SignalsBridge::with_manager(fake);

        let SignalsOutcome::Error { code, message } = bridge.check().await else {
            panic!("expected error");
        };
        assert_eq!(code, INTERNAL_ERROR_CODE);
        assert!(message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_exactly_one_terminal_notification() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct Counting {
            calls: Arc<AtomicUsize>,
            done: parking_lot::Mutex<Option<tokio::sync::oneshot::Sender<()>>>,
        }

        impl AgeSignalsCallback for Counting {
            fn on_success(&self, _json: &str) {
                self.calls.fetch_add(1, Ordering::SeqCst);
                if let Some(tx) = self.done.lock().take() {
                    let _ = tx.send(());
                }
            }
            fn on_error(&self, _code: i32, _message: &str) {
                self.calls.fetch_add(1, Ordering::SeqCst);
                if let Some(tx) = self.done.lock().take() {
                    let _ = tx.send(());
                }
            }
        }

        let bridge = fake_bridge();
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = tokio::sync::oneshot::channel();
        bridge.request_age_signals(Counting {
            calls: calls.clone(),
            done: parking_lot::Mutex::new(Some(tx)),
        });

        rx.await.unwrap();
        // Give a stray second notification a chance to appear.
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sequential_requests_each_resolve() {
        let bridge = fake_bridge();
        bridge.configure_fake_result(&spec(1));
        assert!(matches!(bridge.check().await, SignalsOutcome::Success(_)));

        bridge.configure_fake_result(&spec(4));
        let SignalsOutcome::Success(json) = bridge.check().await else {
            panic!("expected success");
        };
        let data = AgeSignalsData::from_json(&json).unwrap();
        assert_eq!(data.user_status(), 4);
    }
}
