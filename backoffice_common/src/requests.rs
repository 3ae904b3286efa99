//! Wire types shared by the client, its tests, and any mock backend.

use crate::currency::{AssetType, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/v1/users/{userId}/deposit`.
///
/// Built fresh per call and discarded after the request completes.
/// The amount travels as a string, exactly as the operator typed it
/// after decimal validation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub asset_code: Currency,
    pub asset_type: AssetType,
    pub amount: String,
    pub description: String,
}

impl DepositRequest {
    /// The asset type is derived from the currency, never supplied.
    pub fn new(currency: Currency, amount: Decimal, description: &str) -> Self {
        Self {
            asset_code: currency,
            asset_type: currency.asset_type(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }
}

/// **One delete strategy**
///
/// The delete flow holds an ordered list of these and tries them
/// sequentially until one succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    ByEmail(String),
    ByUserId(String),
}

impl DeleteTarget {
    /// The request body this strategy sends: `{email}` or `{userId}`.
    pub fn body(&self) -> DeleteUserRequest {
        match self {
            DeleteTarget::ByEmail(email) => DeleteUserRequest {
                email: Some(email.clone()),
                user_id: None,
            },
            DeleteTarget::ByUserId(user_id) => DeleteUserRequest {
                email: None,
                user_id: Some(user_id.clone()),
            },
        }
    }
}

impl fmt::Display for DeleteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteTarget::ByEmail(email) => write!(f, "email {}", email),
            DeleteTarget::ByUserId(user_id) => write!(f, "user id {}", user_id),
        }
    }
}

/// Body of `DELETE /api/v1/users`. Exactly one field is populated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Envelope of `GET /api/v1/users/pending-review`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PendingUsersResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<PendingUser>,
}

/// One record of the pending-accounts listing. Only the id and the email
/// matter for identity resolution; everything else rides along untouched.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PendingUser {
    pub id: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_deposit_request_wire_format() {
        let payload = DepositRequest::new(
            Currency::Uyu,
            Decimal::from_str("10").unwrap(),
            "Manual deposit",
        );
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "assetCode": "UYU",
                "assetType": "fiat",
                "amount": "10",
                "description": "Manual deposit",
            })
        );
    }

    #[test]
    fn test_deposit_request_usdc_is_crypto() {
        let payload = DepositRequest::new(
            Currency::UsdC,
            Decimal::from_str("0.5").unwrap(),
            "Manual deposit",
        );

        assert_eq!(payload.asset_type, AssetType::Crypto);
        assert_eq!(payload.amount, "0.5");
    }

    #[rstest]
    #[case::by_email(
        DeleteTarget::ByEmail("a@x.com".to_string()),
        serde_json::json!({"email": "a@x.com"})
    )]
    #[case::by_user_id(
        DeleteTarget::ByUserId("u-1".to_string()),
        serde_json::json!({"userId": "u-1"})
    )]
    fn test_delete_target_bodies(
        #[case] target: DeleteTarget,
        #[case] expected: serde_json::Value,
    ) {
        assert_eq!(serde_json::to_value(target.body()).unwrap(), expected);
    }

    #[test]
    fn test_pending_listing_tolerates_extra_fields() {
        let envelope: PendingUsersResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "data": [
                {"id": "u-9", "email": "a@x.com", "firstName": "Ana", "kycLevel": 2},
            ],
        }))
        .unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, "u-9");
        assert_eq!(envelope.data[0].email, "a@x.com");
    }

    #[test]
    fn test_pending_listing_data_defaults_to_empty() {
        let envelope: PendingUsersResponse =
            serde_json::from_value(serde_json::json!({"success": false})).unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
    }
}
