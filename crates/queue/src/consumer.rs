//! The worker side of the pipeline.

use thiserror::Error;

use crate::manager::{JobManager, ManagerError};
use crate::message::Message;
use crate::transport::Delivery;

/// Failure during [`Consumer::process`].
#[derive(Debug, Error)]
pub enum ConsumeError {
    /// The delivery is malformed: blank type, a body that is not a keyed map,
    /// or a missing/non-string ticket.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The manager failed; propagated unchanged.
    #[error(transparent)]
    Manager(#[from] ManagerError),
}

impl ConsumeError {
    fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Validates inbound deliveries and hands them to the job manager.
///
/// All validation happens strictly before the manager call: a rejected
/// delivery leaves the manager uninvoked, and a valid one reaches it exactly
/// once. Manager failures are not caught here — redelivery is the transport's
/// policy.
#[derive(Debug)]
pub struct Consumer<M> {
    manager: M,
}

impl<M> Consumer<M> {
    pub fn new(manager: M) -> Self {
        Self { manager }
    }
}

impl<M> Consumer<M>
where
    M: JobManager,
{
    /// Reconstruct a [`Message`] from a raw delivery and forward it.
    ///
    /// The ticket is mandatory: a delivery without one cannot be correlated to
    /// a job and is rejected rather than forwarded ticketless. Its shape is
    /// not inspected beyond being a string — the manager owns ticket semantics.
    pub fn process(&self, delivery: &Delivery) -> Result<(), ConsumeError> {
        let job_type = delivery.message_type();
        if job_type.trim().is_empty() {
            return Err(ConsumeError::invalid("delivery has no job type"));
        }

        let body = delivery
            .body()
            .as_object()
            .ok_or_else(|| ConsumeError::invalid("delivery body is not a keyed map"))?;

        let ticket = body
            .get("ticket")
            .ok_or_else(|| ConsumeError::invalid("delivery body has no ticket"))?
            .as_str()
            .ok_or_else(|| ConsumeError::invalid("ticket is not a string"))?;

        let message = match body.get("callback").and_then(|v| v.as_str()) {
            Some(callback) => Message::with_callback(job_type, ticket, callback),
            None => Message::new(job_type, ticket),
        };

        tracing::debug!(
            job_type = message.job_type(),
            ticket = %message.ticket(),
            "consuming job message"
        );

        self.manager.on_message(&message)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::topic_for;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Records every message instead of executing anything.
    #[derive(Debug, Default)]
    struct RecordingManager {
        received: Mutex<Vec<Message>>,
    }

    impl RecordingManager {
        fn received(&self) -> Vec<Message> {
            self.received.lock().unwrap().clone()
        }
    }

    impl JobManager for RecordingManager {
        fn on_message(&self, message: &Message) -> Result<(), ManagerError> {
            self.received.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    /// Rejects every message.
    #[derive(Debug, Default)]
    struct RejectingManager;

    impl JobManager for RejectingManager {
        fn on_message(&self, message: &Message) -> Result<(), ManagerError> {
            Err(ManagerError::Rejected(format!(
                "no such job: {}",
                message.ticket()
            )))
        }
    }

    #[test]
    fn valid_deliveries_reach_the_manager_exactly_once() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let delivery = Delivery::new(topic_for("mailer"), json!({ "ticket": "ticket_1" }));
        consumer.process(&delivery).unwrap();

        assert_eq!(manager.received(), vec![Message::new("mailer", "ticket_1")]);
    }

    #[test]
    fn bare_type_topics_are_accepted() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let delivery = Delivery::new("typeA", json!({ "ticket": "ticket_1" }));
        consumer.process(&delivery).unwrap();

        assert_eq!(manager.received(), vec![Message::new("typeA", "ticket_1")]);
    }

    #[test]
    fn tickets_are_opaque_strings_not_inspected_by_the_pipeline() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        // Anything the manager handed out comes back untouched, UUID or not.
        for ticket in ["ticket_2", "018f-uuid-ish", "7"] {
            let delivery = Delivery::new("typeB", json!({ "ticket": ticket }));
            consumer.process(&delivery).unwrap();
        }

        let received = manager.received();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0].ticket(), "ticket_2");
        assert_eq!(received[2].ticket(), "7");
    }

    #[test]
    fn callback_tokens_are_carried_when_present() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let delivery = Delivery::new(
            topic_for("mailer"),
            json!({ "ticket": "ticket_1", "callback": "cb_1" }),
        );
        consumer.process(&delivery).unwrap();

        assert_eq!(
            manager.received(),
            vec![Message::with_callback("mailer", "ticket_1", "cb_1")]
        );
    }

    #[test]
    fn empty_bodies_are_rejected_before_the_manager() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let err = consumer
            .process(&Delivery::new("foobar", json!({})))
            .unwrap_err();

        assert!(matches!(err, ConsumeError::InvalidArgument(_)));
        assert!(manager.received().is_empty());
    }

    #[test]
    fn sequence_bodies_are_rejected_before_the_manager() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let err = consumer
            .process(&Delivery::new("foobar", json!(["foobar"])))
            .unwrap_err();

        assert!(matches!(err, ConsumeError::InvalidArgument(_)));
        assert!(manager.received().is_empty());
    }

    #[test]
    fn blank_types_are_rejected() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let delivery = Delivery::new("", json!({ "ticket": "ticket_1" }));
        let err = consumer.process(&delivery).unwrap_err();

        assert!(matches!(err, ConsumeError::InvalidArgument(_)));
        assert!(manager.received().is_empty());
    }

    #[test]
    fn non_string_tickets_are_rejected() {
        let manager = Arc::new(RecordingManager::default());
        let consumer = Consumer::new(Arc::clone(&manager));

        let err = consumer
            .process(&Delivery::new("mailer", json!({ "ticket": 42 })))
            .unwrap_err();

        assert!(matches!(err, ConsumeError::InvalidArgument(_)));
        assert!(manager.received().is_empty());
    }

    #[test]
    fn manager_errors_propagate_unchanged() {
        let consumer = Consumer::new(RejectingManager);

        let delivery = Delivery::new(topic_for("mailer"), json!({ "ticket": "ticket_1" }));
        let err = consumer.process(&delivery).unwrap_err();

        assert!(matches!(err, ConsumeError::Manager(ManagerError::Rejected(_))));
    }
}
