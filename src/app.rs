//! Application state and core logic

use crate::config::TuiConfig;
use crate::identity::{IdentityClient, IdentityService};
use crate::state::{AppState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Identity service client
    identity: Box<dyn IdentityService>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let identity = IdentityClient::new(config.identity_address).await?;

        let state = AppState {
            identity_connected: identity.check_connection().await,
            ..AppState::default()
        };

        Ok(Self {
            state,
            identity: Box::new(identity),
            quit: false,
        })
    }

    /// Create an App backed by an injected identity service
    #[cfg(test)]
    fn with_identity(identity: Box<dyn IdentityService>) -> Self {
        Self {
            state: AppState::default(),
            identity,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a new view, keeping the current one in history
    #[allow(dead_code)]
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Navigate to a new view, replacing history so `go_back` cannot
    /// return to the current screen
    pub fn navigate_replace(&mut self, view: View) {
        self.state.view_history.clear();
        self.state.current_view = view;
    }

    /// Go back to the previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::SignIn => self.handle_sign_in_key(key).await,
            View::Home => self.handle_home_key(key),
        }
        Ok(())
    }

    /// Handle keys on the sign-in screen
    async fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.sign_in.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.sign_in.prev_field(),
            KeyCode::Enter => self.submit_sign_in().await,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) => self.state.sign_in.active_field_mut().push_char(c),
            KeyCode::Backspace => self.state.sign_in.active_field_mut().pop_char(),
            _ => {}
        }
    }

    /// Handle keys on the home screen
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Run one sign-in attempt.
    ///
    /// `begin_submit` rejects duplicate triggers while a request is
    /// outstanding and local validation failures, so at most one request is
    /// in flight and nothing reaches the network for an incomplete form.
    /// `submitting` returns to false on every path.
    async fn submit_sign_in(&mut self) {
        if !self.state.sign_in.begin_submit() {
            return;
        }

        let email = self.state.sign_in.email.as_text().to_string();
        let password = self.state.sign_in.password.as_text().to_string();

        match self.identity.sign_in(&email, &password).await {
            Ok(session) => {
                self.state.sign_in.succeed();
                self.state.session = Some(session);
                self.navigate_replace(View::Home);
            }
            Err(err) => {
                if err.is_unexpected() {
                    tracing::error!("sign-in failed: {err}");
                }
                self.state.sign_in.fail(err.user_message());
            }
        }
    }
}
