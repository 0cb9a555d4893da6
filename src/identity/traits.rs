//! Trait abstraction for the identity client to enable mocking in tests

use crate::state::Session;
use async_trait::async_trait;

use super::error::SignInError;

/// Trait for identity service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Check if the identity service is reachable
    async fn check_connection(&self) -> bool;

    /// Exchange credentials for an authenticated session
    async fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, SignInError>;
}
