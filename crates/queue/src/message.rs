//! The envelope carried between dispatcher and consumer.

use serde::{Deserialize, Serialize};

/// Minimal job reference handed to the transport and reconstructed on the
/// consumer side.
///
/// The ticket is an opaque correlation string here — whether it is a UUID is
/// the job manager's concern, not the pipeline's.
///
/// Immutable once constructed; equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    job_type: String,
    ticket: String,
    /// Opaque correlation token for result delivery, if the submitter wants one.
    callback: Option<String>,
}

impl Message {
    pub fn new(job_type: impl Into<String>, ticket: impl Into<String>) -> Self {
        Self {
            job_type: job_type.into(),
            ticket: ticket.into(),
            callback: None,
        }
    }

    pub fn with_callback(
        job_type: impl Into<String>,
        ticket: impl Into<String>,
        callback: impl Into<String>,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            ticket: ticket.into(),
            callback: Some(callback.into()),
        }
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn ticket(&self) -> &str {
        &self.ticket
    }

    pub fn callback(&self) -> Option<&str> {
        self.callback.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            Message::new("mailer", "ticket_1"),
            Message::new("mailer", "ticket_1")
        );
        assert_ne!(
            Message::new("mailer", "ticket_1"),
            Message::new("report", "ticket_1")
        );
        assert_ne!(
            Message::new("mailer", "ticket_1"),
            Message::with_callback("mailer", "ticket_1", "cb_1")
        );
        assert_ne!(
            Message::new("mailer", "ticket_1"),
            Message::new("mailer", "ticket_2")
        );
    }
}
