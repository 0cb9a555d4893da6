//! Sign-in form state machine

use super::field::FormField;

/// Local validation message; shown without touching the network
pub const INCOMPLETE_MESSAGE: &str = "Please enter both email and password";

/// Sign-in form state
///
/// Tracks the field values, the in-flight flag and the error line for the
/// sign-in screen. Transitions happen on discrete events: field edits,
/// `begin_submit` when the user triggers submission, and `succeed`/`fail`
/// when the response arrives. At most one request is outstanding at a time;
/// the submit control is inert while `submitting` is true.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    /// Error line under the form; at most one message at a time
    pub error: Option<String>,
    /// True while a sign-in request is outstanding
    pub submitting: bool,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            error: None,
            submitting: false,
        }
    }

    pub fn field_count(&self) -> usize {
        2 // email, password
    }

    /// Move to the next field (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }

    /// Both fields filled in. Exact emptiness check; whitespace-only input
    /// counts as filled.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Whether the submit control is actionable
    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    /// Start a submission attempt.
    ///
    /// Returns true when a request should be issued. A duplicate trigger
    /// while a request is outstanding is rejected without touching state.
    /// Any previous error is cleared before the attempt is evaluated, so a
    /// stale message never survives into a new attempt.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        self.error = None;

        if !self.is_complete() {
            self.error = Some(INCOMPLETE_MESSAGE.to_string());
            return false;
        }

        self.submitting = true;
        true
    }

    /// Record a successful response. Field values are left untouched; the
    /// screen is expected to be replaced.
    pub fn succeed(&mut self) {
        self.submitting = false;
    }

    /// Record a failed response with its user-facing message. The entered
    /// field values are retained for correction.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignInForm {
        let mut form = SignInForm::new();
        for c in "user@example.com".chars() {
            form.email.push_char(c);
        }
        for c in "hunter2".chars() {
            form.password.push_char(c);
        }
        form
    }

    mod field_navigation {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignInForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.email.name, "email");
            assert_eq!(form.password.name, "password");
            assert!(form.error.is_none());
            assert!(!form.submitting);
        }

        #[test]
        fn test_default_equals_new() {
            let new = SignInForm::new();
            let default = SignInForm::default();
            assert_eq!(new.active_field_index, default.active_field_index);
            assert_eq!(new.field_count(), default.field_count());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SignInForm::new();
            form.next_field();
            assert_eq!(form.active_field_index, 1);
            form.next_field();
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = SignInForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 1); // Wrapped to last
        }

        #[test]
        fn test_active_field_mut_follows_index() {
            let mut form = SignInForm::new();
            form.active_field_mut().push_char('a');
            assert_eq!(form.email.as_text(), "a");

            form.next_field();
            form.active_field_mut().push_char('b');
            assert_eq!(form.password.as_text(), "b");
        }

        #[test]
        fn test_password_displays_masked() {
            let form = filled_form();
            assert_eq!(form.password.as_text(), "hunter2");
            assert_eq!(form.password.display_value(), "•••••••");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_empty_form_is_incomplete() {
            let form = SignInForm::new();
            assert!(!form.is_complete());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_email_only_is_incomplete() {
            let mut form = SignInForm::new();
            form.email.push_char('a');
            assert!(!form.is_complete());
        }

        #[test]
        fn test_password_only_is_incomplete() {
            let mut form = SignInForm::new();
            form.password.push_char('x');
            assert!(!form.is_complete());
        }

        #[test]
        fn test_filled_form_is_complete() {
            let form = filled_form();
            assert!(form.is_complete());
            assert!(form.can_submit());
        }

        #[test]
        fn test_whitespace_only_counts_as_filled() {
            // Emptiness is exact; values are not trimmed
            let mut form = SignInForm::new();
            form.email.push_char(' ');
            form.password.push_char(' ');
            assert!(form.is_complete());
        }
    }

    mod submission_lifecycle {
        use super::*;

        #[test]
        fn test_begin_submit_rejects_incomplete_form() {
            let mut form = SignInForm::new();
            assert!(!form.begin_submit());
            assert_eq!(form.error.as_deref(), Some(INCOMPLETE_MESSAGE));
            assert!(!form.submitting);
        }

        #[test]
        fn test_begin_submit_starts_request() {
            let mut form = filled_form();
            assert!(form.begin_submit());
            assert!(form.submitting);
            assert!(form.error.is_none());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_begin_submit_rejects_duplicate_trigger() {
            let mut form = filled_form();
            assert!(form.begin_submit());
            // Second trigger while the request is outstanding is a no-op
            assert!(!form.begin_submit());
            assert!(form.submitting);
            assert!(form.error.is_none());
        }

        #[test]
        fn test_begin_submit_clears_previous_error() {
            let mut form = filled_form();
            form.fail("Invalid email or password");
            assert!(form.begin_submit());
            assert!(form.error.is_none());
        }

        #[test]
        fn test_failed_validation_replaces_previous_error() {
            let mut form = SignInForm::new();
            form.email.push_char('a');
            form.password.push_char('x');
            form.fail("Invalid email or password");

            // New attempt with a now-empty password fails validation but
            // still replaces the stale message
            form.password.clear();
            assert!(!form.begin_submit());
            assert_eq!(form.error.as_deref(), Some(INCOMPLETE_MESSAGE));
        }

        #[test]
        fn test_succeed_resets_submitting() {
            let mut form = filled_form();
            form.begin_submit();
            form.succeed();
            assert!(!form.submitting);
            assert!(form.error.is_none());
        }

        #[test]
        fn test_fail_resets_submitting_and_sets_error() {
            let mut form = filled_form();
            form.begin_submit();
            form.fail("Email not confirmed");
            assert!(!form.submitting);
            assert_eq!(form.error.as_deref(), Some("Email not confirmed"));
        }

        #[test]
        fn test_fail_retains_field_values() {
            let mut form = filled_form();
            form.begin_submit();
            form.fail("Invalid email or password");
            assert_eq!(form.email.as_text(), "user@example.com");
            assert_eq!(form.password.as_text(), "hunter2");
        }
    }
}
