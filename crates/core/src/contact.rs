//! Contact form submission flow.
//!
//! There is no real backend: the shipped submitter waits for a configured delay and
//! reports success. The form keeps at most one status message, which expires after
//! `formMessageTtlMs`.

use std::future::Future;

use thiserror::Error;

/// Label shown on the submit button while a submission is in flight.
pub const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

pub const SUCCESS_TEXT: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILURE_TEXT: &str = "Failed to send message. Please try again.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("form submission failed: {0}")]
    Submission(String),
}

/// Name/value pairs taken from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub fields: Vec<(String, String)>,
}

#[allow(async_fn_in_trait)]
pub trait ContactSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Stand-in submitter: sleeps for `delay_ms` and succeeds.
///
/// `sleep` is supplied by the host (a timer promise in the browser, tokio natively).
pub struct SimulatedSubmitter<F> {
    delay_ms: u64,
    sleep: F,
}

impl<F, Fut> SimulatedSubmitter<F>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = ()>,
{
    pub fn new(delay_ms: u64, sleep: F) -> Self {
        Self { delay_ms, sleep }
    }
}

impl<F, Fut> ContactSubmitter for SimulatedSubmitter<F>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = ()>,
{
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::debug!(fields = submission.fields.len(), "simulating contact form submission");
        (self.sleep)(self.delay_ms).await;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Status message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Identifies this message for its expiry timer.
    pub token: u64,
}

impl FormMessage {
    pub fn class_name(&self) -> String {
        format!("form-message form-message-{}", self.kind.as_str())
    }

    pub fn css_text(&self) -> String {
        let (background, border, color) = match self.kind {
            MessageKind::Success => ("rgba(34, 197, 94, 0.1)", "rgba(34, 197, 94, 0.3)", "#22c55e"),
            MessageKind::Error => ("rgba(239, 68, 68, 0.1)", "rgba(239, 68, 68, 0.3)", "#ef4444"),
        };
        format!(
            "padding: 1rem; margin-top: 1rem; border-radius: 10px; background: {background}; border: 1px solid {border}; color: {color};"
        )
    }
}

/// Submission state of one contact form.
#[derive(Debug, Default)]
pub struct ContactForm {
    sending: bool,
    message: Option<FormMessage>,
    next_token: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_sending(&self) -> bool {
        self.sending
    }

    #[cfg(test)]
    fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Enter the sending state. Returns `false` if a submission is already running.
    pub fn begin(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    /// Leave the sending state with the submission outcome.
    ///
    /// The returned message replaces any previous one.
    pub fn finish(&mut self, outcome: Result<(), ContactError>) -> FormMessage {
        self.sending = false;
        let (kind, text) = match outcome {
            Ok(()) => (MessageKind::Success, SUCCESS_TEXT),
            Err(error) => {
                tracing::error!(%error, "Form submission error");
                (MessageKind::Error, FAILURE_TEXT)
            }
        };
        self.next_token += 1;
        let message = FormMessage {
            kind,
            text: text.to_string(),
            token: self.next_token,
        };
        self.message = Some(message.clone());
        message
    }

    /// Drop the message identified by `token`, if it is still the current one.
    pub fn expire(&mut self, token: u64) -> bool {
        if self.message.as_ref().is_some_and(|m| m.token == token) {
            self.message = None;
            true
        } else {
            false
        }
    }
}
