//! Sentinel substitution from the vendor's optional-field result to the flat
//! record handed to the host runtime.
//!
//! Host runtimes consuming the bridge JSON cannot express "field absent" for
//! numeric fields, so absence is encoded with reserved values instead:
//! status 5 (not applicable), age bounds -1, approval date 0. The install
//! identifier is the one field that serializes as an explicit JSON `null`.

use age_signals_client::AgeSignalsResult;
use serde::{Deserialize, Serialize};

/// Status substituted when the vendor reports no user status.
pub const USER_STATUS_NOT_APPLICABLE: i32 = 5;

/// Age bound substituted when the vendor reports no estimate.
pub const AGE_UNKNOWN: i32 = -1;

/// Approval date substituted when the vendor reports no date.
pub const NO_APPROVAL_DATE_MILLIS: i64 = 0;

/// Flat result record delivered to hosts.
///
/// Field order here fixes the JSON key order:
/// `userStatus, ageLower, ageUpper, mostRecentApprovalDate, installId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedResult {
    /// User status code, or [`USER_STATUS_NOT_APPLICABLE`].
    pub user_status: i32,

    /// Lower age bound, or [`AGE_UNKNOWN`].
    pub age_lower: i32,

    /// Upper age bound, or [`AGE_UNKNOWN`].
    pub age_upper: i32,

    /// Most recent approval date in epoch milliseconds, or
    /// [`NO_APPROVAL_DATE_MILLIS`].
    pub most_recent_approval_date: i64,

    /// Install identifier; serializes as JSON `null` when absent, never as an
    /// omitted key.
    pub install_id: Option<String>,
}

impl MappedResult {
    /// Serializes to the JSON string handed to host callbacks.
    ///
    /// # Errors
    /// Returns an error if serialization fails; the schema is fixed, so this
    /// is not expected in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Maps a vendor result into the flat record, substituting sentinels for
/// absent fields.
#[must_use]
pub fn map_result(result: &AgeSignalsResult) -> MappedResult {
    MappedResult {
        user_status: result.user_status().unwrap_or(USER_STATUS_NOT_APPLICABLE),
        age_lower: result.age_lower().unwrap_or(AGE_UNKNOWN),
        age_upper: result.age_upper().unwrap_or(AGE_UNKNOWN),
        most_recent_approval_date: result
            .most_recent_approval_date()
            .map_or(NO_APPROVAL_DATE_MILLIS, |d| d.timestamp_millis()),
        install_id: result.install_id().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    // ==================== Sentinel Tests ====================

    #[test]
    fn test_absent_user_status_maps_to_not_applicable() {
        let mapped = map_result(&AgeSignalsResult::default());
        assert_eq!(mapped.user_status, 5);
    }

    #[test]
    fn test_present_user_status_passes_through() {
        let result = AgeSignalsResult::builder().user_status(2).build();
        assert_eq!(map_result(&result).user_status, 2);
    }

    #[test]
    fn test_absent_age_bounds_map_to_unknown() {
        let mapped = map_result(&AgeSignalsResult::default());
        assert_eq!(mapped.age_lower, -1);
        assert_eq!(mapped.age_upper, -1);
    }

    #[test]
    fn test_present_age_bounds_pass_through() {
        let result = AgeSignalsResult::builder().age_lower(13).age_upper(17).build();
        let mapped = map_result(&result);
        assert_eq!(mapped.age_lower, 13);
        assert_eq!(mapped.age_upper, 17);
    }

    #[test]
    fn test_absent_date_maps_to_zero() {
        let mapped = map_result(&AgeSignalsResult::default());
        assert_eq!(mapped.most_recent_approval_date, 0);
    }

    #[test]
    fn test_present_date_maps_to_epoch_millis() {
        let date = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let result = AgeSignalsResult::builder()
            .most_recent_approval_date(date)
            .build();
        assert_eq!(map_result(&result).most_recent_approval_date, 1_700_000_000_000);
    }

    #[test]
    fn test_absent_install_id_is_none() {
        let mapped = map_result(&AgeSignalsResult::default());
        assert_eq!(mapped.install_id, None);
    }

    #[test]
    fn test_present_install_id_passes_through() {
        let result = AgeSignalsResult::builder().install_id("abc123").build();
        assert_eq!(map_result(&result).install_id.as_deref(), Some("abc123"));
    }

    // ==================== JSON Shape Tests ====================

    #[test]
    fn test_json_key_order_and_null_install_id() {
        let json = map_result(&AgeSignalsResult::default()).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"userStatus":5,"ageLower":-1,"ageUpper":-1,"mostRecentApprovalDate":0,"installId":null}"#
        );
    }

    #[test]
    fn test_json_full_result() {
        let date = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let result = AgeSignalsResult::builder()
            .user_status(1)
            .age_lower(13)
            .age_upper(15)
            .most_recent_approval_date(date)
            .install_id("abc123")
            .build();

        let json = map_result(&result).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"userStatus":1,"ageLower":13,"ageUpper":15,"mostRecentApprovalDate":1700000000000,"installId":"abc123"}"#
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mapped = MappedResult {
            user_status: 3,
            age_lower: -1,
            age_upper: 20,
            most_recent_approval_date: 12_345,
            install_id: Some("id".to_string()),
        };
        let parsed: MappedResult =
            serde_json::from_str(&mapped.to_json().unwrap()).unwrap();
        assert_eq!(parsed, mapped);
    }
}
