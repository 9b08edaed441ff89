//! Login form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` by the login form. Inputs edit `credentials`;
//! `begin_submission` flips `submission` and hands out the pair to send, and
//! `finish_submission` runs when that request's outcome has been handled.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::auth::credentials::Credentials;

/// Whether the form has been submitted. There is no way back to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitted,
}

#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub credentials: Credentials,
    pub submission: SubmissionState,
    /// Requests dispatched whose outcome has not come back yet.
    pub in_flight: usize,
}

impl LoginState {
    /// Mark the form submitted and return a snapshot of the credentials.
    ///
    /// Repeat calls are allowed; each returns a fresh snapshot.
    pub fn begin_submission(&mut self) -> Credentials {
        self.submission = SubmissionState::Submitted;
        self.in_flight += 1;
        self.credentials.clone()
    }

    /// Record that one dispatched request has completed. `submission` stays
    /// `Submitted`.
    pub fn finish_submission(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Text for the status line under the form.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.submission {
            SubmissionState::Submitted if self.in_flight > 0 => Some("Signing in..."),
            _ => None,
        }
    }
}
