//! The backend request executor: one network request per operation,
//! classified into success or failure. No retries.

use backoffice_common::errors::BackofficeError;
use backoffice_common::requests::{DeleteTarget, DepositRequest, PendingUser, PendingUsersResponse};
use reqwest::{Client, Response, Url};
use serde_json::Value;

/// **HTTP client for the user-account backend**
///
/// Holds the base URL it was constructed with, so every flow can be
/// pointed at a different backend (or a mock) per invocation.
pub struct BackendClient {
    http: Client,
    base_url: Url,
    strict: bool,
}

impl BackendClient {
    /// `strict` governs the pending-accounts lookup only: lenient mode
    /// treats its failures as "nothing found", strict mode propagates them.
    pub fn new(base_url: Url, strict: bool) -> Self {
        Self {
            http: Client::new(),
            base_url,
            strict,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// **Deposit funds to a user account**
    ///
    /// Issues one authenticated `POST /api/v1/users/{userId}/deposit` with
    /// the given payload and returns the backend's response body.
    pub async fn deposit(
        &self,
        user_id: &str,
        payload: &DepositRequest,
        token: &str,
    ) -> Result<Value, BackofficeError> {
        let url = self
            .base_url
            .join(&format!("api/v1/users/{}/deposit", user_id))
            .map_err(BackofficeError::network)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(BackofficeError::network)?;

        classify(response).await
    }

    /// **Fetch the pending-accounts listing**
    ///
    /// Authenticated `GET /api/v1/users/pending-review`. In lenient mode a
    /// transport failure, a non-2xx status or a failure envelope all yield
    /// an empty listing, matching the original tooling's behavior; strict
    /// mode propagates them instead.
    pub async fn pending_users(&self, token: &str) -> Result<Vec<PendingUser>, BackofficeError> {
        let url = self
            .base_url
            .join("api/v1/users/pending-review")
            .map_err(BackofficeError::network)?;

        let response = match self.http.get(url).bearer_auth(token).send().await {
            Ok(response) => response,
            Err(err) if !self.strict => {
                log::warn!("Pending-accounts lookup failed: {}", err);
                return Ok(Vec::new());
            }
            Err(err) => return Err(BackofficeError::network(err)),
        };

        let status = response.status();
        if !status.is_success() {
            if self.strict {
                let body = response.text().await.unwrap_or_default();
                return Err(BackofficeError::backend_request_failed(
                    status.as_u16(),
                    &body,
                ));
            }
            log::warn!("Pending-accounts lookup returned status {}", status);
            return Ok(Vec::new());
        }

        let envelope: PendingUsersResponse = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) if !self.strict => {
                log::warn!("Pending-accounts listing was not parseable: {}", err);
                return Ok(Vec::new());
            }
            Err(err) => return Err(BackofficeError::network(err)),
        };

        if !envelope.success {
            if self.strict {
                return Err(BackofficeError::backend_request_failed(
                    status.as_u16(),
                    "pending-accounts listing reported success: false",
                ));
            }
            log::warn!("Pending-accounts listing reported failure");
            return Ok(Vec::new());
        }

        Ok(envelope.data)
    }

    /// **Delete a user account**
    ///
    /// Issues `DELETE /api/v1/users` with each target strategy in order
    /// until one succeeds. A response that indicates failure moves on to
    /// the next strategy; a transport error is terminal.
    pub async fn delete_user(&self, targets: &[DeleteTarget]) -> Result<Value, BackofficeError> {
        let url = self
            .base_url
            .join("api/v1/users")
            .map_err(BackofficeError::network)?;

        let mut last_failure = None;

        for target in targets {
            log::info!("Attempting to delete the user by {}", target);

            let response = self
                .http
                .delete(url.clone())
                .json(&target.body())
                .send()
                .await
                .map_err(BackofficeError::network)?;

            match classify(response).await {
                Ok(value) => return Ok(value),
                Err(err @ BackofficeError::BackendRequestFailed { .. }) => {
                    log::warn!("Delete by {} failed: {}", target, err);
                    last_failure = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_failure
            .unwrap_or_else(|| BackofficeError::identity_unresolved("no delete target given")))
    }
}

/// **Classify one backend response**
///
/// A non-2xx status, or a body whose `success` flag is explicitly `false`,
/// is a failed operation. Everything else passes the body through as an
/// opaque JSON value for reporting; a non-JSON body is passed through as a
/// string.
async fn classify(response: Response) -> Result<Value, BackofficeError> {
    let status = response.status();
    let body = response.text().await.map_err(BackofficeError::network)?;
    let value: Value =
        serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body.clone()));

    if !status.is_success() || value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(BackofficeError::backend_request_failed(
            status.as_u16(),
            &body,
        ));
    }

    Ok(value)
}
