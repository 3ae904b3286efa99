//! Identity resolution for the deposit-by-email flow.

use crate::client::BackendClient;
use backoffice_common::errors::BackofficeError;
use backoffice_common::token::decode_token_claims;

/// **Resolve an opaque user id for `email`**
///
/// Two sources, tried in order; the first that yields an id wins:
///
/// 1. The bearer token's subject claim. A token that does not decode is
///    logged and skipped, never fatal.
/// 2. The pending-accounts listing, scanned for a record whose email
///    equals the target.
///
/// Neither source succeeding is [`BackofficeError::IdentityUnresolved`],
/// and no mutating call is attempted.
pub async fn resolve_user_id(
    client: &BackendClient,
    email: &str,
    token: &str,
) -> Result<String, BackofficeError> {
    match decode_token_claims(token) {
        Ok(claims) => {
            log::info!(
                "Resolved user id {} from the token's subject claim",
                claims.sub
            );
            return Ok(claims.sub);
        }
        Err(err) => {
            log::warn!("Token does not decode; falling back to lookup: {}", err);
        }
    }

    let pending = client.pending_users(token).await?;

    match pending.into_iter().find(|user| user.email == email) {
        Some(user) => {
            log::info!(
                "Resolved user id {} from the pending-accounts listing",
                user.id
            );
            Ok(user.id)
        }
        None => Err(BackofficeError::identity_unresolved(email)),
    }
}
