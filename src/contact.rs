use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::diagnostics::{Diagnostics, LogLevel};
use crate::relay::EmailRelay;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let message = required("message", message)?;

        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(value.to_string())
}

fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

/// Submit control state. `Sent` holds until a deadline, then a tick reverts
/// it to `Idle`. Only one submission may be in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitState {
    status: SubmitStatus,
    in_flight: bool,
    sent_until_ms: Option<f64>,
    sent_window_ms: f64,
}

impl SubmitState {
    pub fn new(sent_window_ms: u64) -> Self {
        Self {
            status: SubmitStatus::Idle,
            in_flight: false,
            sent_until_ms: None,
            sent_window_ms: sent_window_ms as f64,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn sent_until_ms(&self) -> Option<f64> {
        self.sent_until_ms
    }

    /// Returns `false` when a submission is already in flight and this one
    /// should be dropped.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self, outcome: SubmitOutcome, now_ms: f64) {
        self.in_flight = false;
        if outcome == SubmitOutcome::Sent {
            self.status = SubmitStatus::Sent;
            self.sent_until_ms = Some(now_ms + self.sent_window_ms);
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.sent_until_ms {
            Some(deadline) if now_ms >= deadline => {
                self.status = SubmitStatus::Idle;
                self.sent_until_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sent => "Message Sent!",
        }
    }
}

pub async fn deliver(
    relay: &dyn EmailRelay,
    payload: &ContactPayload,
    diagnostics: &Diagnostics,
) -> SubmitOutcome {
    match relay.send(payload).await {
        Ok(()) => {
            diagnostics.event(LogLevel::Info, "contact.sent", json!({}));
            SubmitOutcome::Sent
        }
        Err(error) => {
            diagnostics.event(
                LogLevel::Error,
                "contact.relay_failed",
                json!({ "error": error.to_string() }),
            );
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct RecordingRelay {
        fail: bool,
        sent: RefCell<Vec<ContactPayload>>,
    }

    impl RecordingRelay {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailRelay for RecordingRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(payload.clone());
            if self.fail {
                Err(RelayError::Transport("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload::new("Jane Doe", "jane@example.com", "Let's talk.").expect("valid payload")
    }

    #[test]
    fn payload_fields_are_trimmed_and_required() {
        let payload = ContactPayload::new("  Jane ", " jane@example.com", "Hi\n").expect("valid");
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.email, "jane@example.com");
        assert_eq!(payload.message, "Hi");

        assert_eq!(
            ContactPayload::new(" ", "jane@example.com", "Hi"),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactPayload::new("Jane", "jane@example.com", ""),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c"] {
            assert_eq!(
                ContactPayload::new("Jane", email, "Hi"),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn sent_indicator_reverts_after_window() {
        let mut state = SubmitState::new(3_000);
        assert!(state.begin());
        state.finish(SubmitOutcome::Sent, 1_000.0);
        assert_eq!(state.button_label(), "Message Sent!");

        assert!(!state.tick(3_999.0));
        assert_eq!(state.status(), SubmitStatus::Sent);
        assert!(state.tick(4_000.0));
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.button_label(), "Send Message");
    }

    #[test]
    fn later_success_extends_the_window() {
        let mut state = SubmitState::new(3_000);
        state.begin();
        state.finish(SubmitOutcome::Sent, 0.0);
        state.begin();
        state.finish(SubmitOutcome::Sent, 2_000.0);

        assert!(!state.tick(3_000.0));
        assert!(state.tick(5_000.0));
    }

    #[test]
    fn failure_leaves_idle_state_untouched() {
        let mut state = SubmitState::new(3_000);
        state.begin();
        state.finish(SubmitOutcome::Failed, 500.0);

        assert_eq!(state.status(), SubmitStatus::Idle);
        assert!(!state.is_in_flight());
        assert_eq!(state.sent_until_ms(), None);
    }

    #[test]
    fn second_submission_is_dropped_while_in_flight() {
        let mut state = SubmitState::new(3_000);

        assert!(state.begin());
        assert!(!state.begin());
        state.finish(SubmitOutcome::Failed, 0.0);
        assert!(state.begin());
    }

    #[tokio::test]
    async fn delivery_reports_relay_success() {
        let relay = RecordingRelay::new(false);
        let diagnostics = Diagnostics::new(LogLevel::Error);

        let outcome = deliver(&relay, &payload(), &diagnostics).await;
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.sent.borrow().as_slice(), &[payload()]);
    }

    #[tokio::test]
    async fn delivery_swallows_relay_failure() {
        let relay = RecordingRelay::new(true);
        let diagnostics = Diagnostics::new(LogLevel::Error);
        let mut state = SubmitState::new(3_000);

        assert!(state.begin());
        let outcome = deliver(&relay, &payload(), &diagnostics).await;
        state.finish(outcome, 100.0);

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(state.status(), SubmitStatus::Idle);
        assert_eq!(state.button_label(), "Send Message");
    }
}
