//! Screen-local form state and pre-submission validation.
//!
//! Validation here is UX only: it catches obvious mistakes before a round
//! trip, but the service re-validates everything and its rejections are
//! surfaced verbatim. Passing these checks is never treated as
//! authorization.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::util::national_id;

const MIN_PASSWORD_LEN: usize = 8;
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Login input state. Destroyed on unmount or successful submission.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Check the form before submission.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err("All fields are required".to_owned());
        }
        Ok(())
    }
}

/// Signup input state. `national_id` holds the human-formatted display
/// form while the user types; validation strips it back to canonical.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub password: String,
    pub confirm_password: String,
}

/// A validated signup, with the national ID already in canonical form —
/// the only shape allowed to leave the client boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub password: String,
}

impl SignupForm {
    /// Reformat raw national-ID keyboard input into the display form.
    pub fn set_national_id(&mut self, raw: &str) {
        self.national_id = national_id::format_input(raw);
    }

    /// Check the form and normalize it for submission. First failure wins,
    /// in the order the fields appear on screen.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<SignupSubmission, String> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.national_id.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("All fields are required".to_owned());
        }

        let canonical = national_id::strip(&self.national_id);
        if !national_id::is_canonical(&canonical) {
            return Err("National ID must be 12 digits".to_owned());
        }

        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_owned());
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters".to_owned());
        }
        if !self.password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err("Password must contain at least one lowercase letter".to_owned());
        }
        if !self.password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err("Password must contain at least one uppercase letter".to_owned());
        }
        if !self.password.chars().any(|c| c.is_ascii_digit()) {
            return Err("Password must contain at least one number".to_owned());
        }
        if !self.password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
            return Err("Password must contain at least one symbol".to_owned());
        }

        Ok(SignupSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            national_id: canonical,
            password: self.password.clone(),
        })
    }
}
