//! gRPC client for the Lumen identity service
//!
//! This module provides a client for the identity service via gRPC using
//! the generated proto types. Sign-in failures arrive as statuses carrying
//! a human-readable message and are classified into [`SignInError`] here,
//! so the rest of the app never inspects backend strings.

use crate::state::Session;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::SignInError;
use super::traits::IdentityService;

// Include the generated proto types
pub mod proto {
    tonic::include_proto!("lumen");
}

use proto::lumen_identity_client::LumenIdentityClient;

/// Default identity service address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50051";

/// Client for the Lumen identity service
pub struct IdentityClient {
    /// The gRPC client
    client: Option<LumenIdentityClient<tonic::transport::Channel>>,
    /// The service address
    address: String,
}

impl IdentityClient {
    /// Create a new identity client.
    ///
    /// The address comes from `LUMEN_IDENTITY_ADDRESS`, then the config
    /// file, then the localhost default. An unreachable service is not an
    /// error here; connection is retried on the next call.
    pub async fn new(configured_address: Option<String>) -> Result<Self> {
        let address = std::env::var("LUMEN_IDENTITY_ADDRESS")
            .ok()
            .or(configured_address)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        // Try to connect to the identity service
        let client = match LumenIdentityClient::connect(address.clone()).await {
            Ok(client) => Some(client),
            Err(_) => None,
        };

        Ok(Self { client, address })
    }

    /// Ensure connection is established
    async fn ensure_connected(
        &mut self,
    ) -> Result<&mut LumenIdentityClient<tonic::transport::Channel>, SignInError> {
        if self.client.is_none() {
            self.client = Some(
                LumenIdentityClient::connect(self.address.clone())
                    .await
                    .map_err(|e| {
                        SignInError::Unexpected(format!(
                            "failed to connect to identity service: {e}"
                        ))
                    })?,
            );
        }
        self.client
            .as_mut()
            .ok_or_else(|| SignInError::Unexpected("client not connected".to_string()))
    }
}

#[async_trait]
impl IdentityService for IdentityClient {
    /// Check if the identity service is reachable
    async fn check_connection(&self) -> bool {
        self.client.is_some()
    }

    /// Exchange credentials for an authenticated session
    async fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, SignInError> {
        let client = self.ensure_connected().await?;

        let request = tonic::Request::new(proto::SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        });

        let response = client
            .sign_in(request)
            .await
            .map_err(|status| SignInError::from_status(&status))?;

        let session = response
            .into_inner()
            .session
            .ok_or_else(|| SignInError::Unexpected("response carried no session".to_string()))?;

        parse_session(session)
    }
}

/// Convert a proto session into the domain type.
///
/// A payload that does not parse is an unexpected failure: the screen shows
/// the generic retry text while the parse error goes to the log.
fn parse_session(session: proto::Session) -> Result<Session, SignInError> {
    let user_id = Uuid::parse_str(&session.user_id)
        .map_err(|e| SignInError::Unexpected(format!("malformed user id: {e}")))?;

    let expires_at = DateTime::parse_from_rfc3339(&session.expires_at)
        .map_err(|e| SignInError::Unexpected(format!("malformed expiry timestamp: {e}")))?
        .with_timezone(&Utc);

    Ok(Session {
        access_token: session.access_token,
        user_id,
        email: session.email,
        expires_at,
    })
}
