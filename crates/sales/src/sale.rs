use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salebook_core::{DomainError, DomainResult, SaleId};

/// Sale status lifecycle.
///
/// There is no enforced transition graph: the initial value is random and the
/// only transition reachable through an update is `* -> Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Pending,
    Completed,
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Pending,
        SaleStatus::Completed,
        SaleStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Completed => "completed",
            SaleStatus::Cancelled => "cancelled",
        }
    }
}

impl core::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleStatus {
    type Err = DomainError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaleStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::invalid_status(s))
    }
}

/// A sale record: a user, an amount and a status, plus audit metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub user_id: String,
    pub amount: f64,
    pub status: SaleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u64,
}

/// Fields accepted on creation. `None` means the caller did not supply it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateFields {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl CreateFields {
    pub fn new(user_id: impl Into<String>, amount: f64) -> Self {
        Self {
            user_id: Some(user_id.into()),
            amount: Some(amount),
        }
    }
}

/// Fields accepted on update. `None` means "no change".
///
/// The status is kept as raw text: only a case-insensitive `"pending"` is
/// honored, anything else is ignored without error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFields {
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateFields {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    /// Whether this update requests the (only permitted) move to `Pending`.
    pub fn requests_pending(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(SaleStatus::Pending.as_str()))
    }
}

impl Sale {
    /// Build a brand-new sale at version 1.
    ///
    /// Fails with `MissingFields` unless both `user_id` and `amount` are present.
    pub fn create(
        id: SaleId,
        fields: &CreateFields,
        status: SaleStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let (Some(user_id), Some(amount)) = (fields.user_id.as_ref(), fields.amount) else {
            return Err(DomainError::missing_fields("user_id or amount"));
        };

        Ok(Self {
            id,
            user_id: user_id.clone(),
            amount,
            status,
            created_at: now,
            updated_at: now,
            version: 1,
        })
    }

    /// Apply an update in place.
    ///
    /// The version is bumped and `updated_at` refreshed even when the requested
    /// status was ignored. `updated_at` never moves backwards.
    pub fn apply_update(&mut self, fields: &UpdateFields, now: DateTime<Utc>) {
        if fields.requests_pending() {
            self.status = SaleStatus::Pending;
        }

        self.updated_at = now.max(self.updated_at);
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_sale(status: SaleStatus) -> Sale {
        Sale::create(
            SaleId::new("sale-1"),
            &CreateFields::new("user-123", 5500.00),
            status,
            test_time(),
        )
        .unwrap()
    }

    #[test]
    fn create_sets_version_and_timestamps() {
        let now = test_time();
        let sale = Sale::create(
            SaleId::new("sale-1"),
            &CreateFields::new("user-123", 1234.56),
            SaleStatus::Completed,
            now,
        )
        .unwrap();

        assert_eq!(sale.user_id, "user-123");
        assert_eq!(sale.amount, 1234.56);
        assert_eq!(sale.version, 1);
        assert_eq!(sale.created_at, now);
        assert_eq!(sale.updated_at, now);
        assert_eq!(sale.status, SaleStatus::Completed);
    }

    #[test]
    fn create_requires_user_id_and_amount() {
        let missing_amount = CreateFields {
            user_id: Some("user-123".into()),
            amount: None,
        };
        let missing_user = CreateFields {
            user_id: None,
            amount: Some(10.0),
        };

        for fields in [missing_amount, missing_user, CreateFields::default()] {
            let err = Sale::create(SaleId::new("x"), &fields, SaleStatus::Pending, test_time())
                .unwrap_err();
            assert!(matches!(err, DomainError::MissingFields(_)));
        }
    }

    #[test]
    fn pending_is_matched_case_insensitively() {
        for text in ["pending", "PENDING", "Pending", "pEnDiNg"] {
            let mut sale = test_sale(SaleStatus::Cancelled);
            sale.apply_update(&UpdateFields::status(text), test_time());
            assert_eq!(sale.status, SaleStatus::Pending);
            assert_eq!(sale.version, 2);
        }
    }

    #[test]
    fn other_statuses_are_ignored_but_version_still_bumps() {
        let mut sale = test_sale(SaleStatus::Cancelled);
        let before = sale.updated_at;

        sale.apply_update(&UpdateFields::status("completed"), before + Duration::seconds(5));

        assert_eq!(sale.status, SaleStatus::Cancelled);
        assert_eq!(sale.version, 2);
        assert_eq!(sale.updated_at, before + Duration::seconds(5));
    }

    #[test]
    fn empty_update_still_bumps_version() {
        let mut sale = test_sale(SaleStatus::Completed);
        sale.apply_update(&UpdateFields::default(), test_time());
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.version, 2);
    }

    #[test]
    fn updated_at_never_moves_backwards() {
        let mut sale = test_sale(SaleStatus::Pending);
        let created = sale.created_at;

        sale.apply_update(&UpdateFields::default(), created - Duration::hours(1));

        assert_eq!(sale.updated_at, created);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Completed".parse::<SaleStatus>().unwrap(), SaleStatus::Completed);
        assert_eq!("CANCELLED".parse::<SaleStatus>().unwrap(), SaleStatus::Cancelled);
        assert!(matches!(
            "refunded".parse::<SaleStatus>(),
            Err(DomainError::InvalidStatus(_))
        ));
    }

    #[test]
    fn serializes_with_snake_case_fields_and_lowercase_status() {
        let sale = test_sale(SaleStatus::Cancelled);
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["user_id"], "user-123");
        assert_eq!(json["status"], "cancelled");
        assert_eq!(json["version"], 1);
        assert_eq!(json["id"], "sale-1");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn status_text() -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                "[a-zA-Z]{0,12}".prop_map(Some),
                Just(Some("pending".to_string())),
                Just(Some("PENDING".to_string())),
            ]
        }

        proptest! {
            /// Property: version = 1 + number of updates, and timestamps stay ordered.
            #[test]
            fn version_counts_updates(
                updates in prop::collection::vec((status_text(), -3600i64..3600), 0..32)
            ) {
                let mut sale = test_sale(SaleStatus::Completed);
                let mut last_updated = sale.updated_at;

                for (status, offset) in &updates {
                    let fields = UpdateFields { status: status.clone() };
                    sale.apply_update(&fields, last_updated + Duration::seconds(*offset));

                    prop_assert!(sale.updated_at >= last_updated);
                    prop_assert!(sale.updated_at >= sale.created_at);
                    last_updated = sale.updated_at;
                }

                prop_assert_eq!(sale.version, 1 + updates.len() as u64);
            }

            /// Property: the only reachable status change is to pending.
            #[test]
            fn status_only_moves_to_pending(status in status_text()) {
                let mut sale = test_sale(SaleStatus::Cancelled);
                let fields = UpdateFields { status };
                sale.apply_update(&fields, sale.updated_at);

                prop_assert!(matches!(sale.status, SaleStatus::Cancelled | SaleStatus::Pending));
                prop_assert_eq!(sale.status == SaleStatus::Pending, fields.requests_pending());
            }
        }
    }
}
