//! Application state definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::forms::SignInForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignIn,
    Home,
}

/// Authenticated session issued by the identity service
///
/// Opaque to the client: the token is carried, never inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Identity
    pub session: Option<Session>,
    pub identity_connected: bool,

    // Sign-in form
    pub sign_in: SignInForm,
}
