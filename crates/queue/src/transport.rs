//! Transport abstraction (mechanics only).
//!
//! The transport is the pluggable queueing backend that carries job references
//! from the dispatcher to the workers. This module makes minimal assumptions:
//!
//! - **Backend-agnostic**: in-memory channels, a broker, a database queue —
//!   anything that can deliver a keyed payload to a named queue.
//! - **At-least-once delivery**: a delivery may arrive more than once; the job
//!   manager must treat repeated deliveries for the same ticket safely.
//! - **Durability is the backend's problem**: the pipeline performs no retry,
//!   backoff, or redelivery of its own.
//!
//! One capability trait with concrete implementations selected at startup —
//! not an inheritance-style adapter hierarchy.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Topic prefix prepended to the job type on publish.
///
/// The topic carries the job type structurally, so the payload body never
/// repeats it.
pub const TOPIC_PREFIX: &str = "jobwire.job.";

/// Build the publish topic for a job type.
pub fn topic_for(job_type: &str) -> String {
    format!("{TOPIC_PREFIX}{job_type}")
}

/// Failure raised by the transport backend.
///
/// The pipeline propagates these unchanged; retry policy belongs to the
/// backend or the caller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The queue name is not known to the backend.
    #[error("unknown queue: {0}")]
    UnknownQueue(String),

    /// The backend refused or failed to accept the message.
    #[error("publish failed: {0}")]
    Publish(String),

    /// Backend-specific failure, passed through verbatim.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// The wire payload: exactly `{"ticket": <string>}`.
///
/// The ticket rides through the transport as an opaque string; only the job
/// manager knows (or cares) what shape it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub ticket: String,
}

impl JobRef {
    pub fn new(ticket: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
        }
    }
}

/// An inbound transport event, as handed to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    topic: String,
    body: JsonValue,
}

impl Delivery {
    pub fn new(topic: impl Into<String>, body: JsonValue) -> Self {
        Self {
            topic: topic.into(),
            body,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The job type encoded in the topic.
    ///
    /// Strips [`TOPIC_PREFIX`] when present; backends that already deliver
    /// bare type names pass through unchanged.
    pub fn message_type(&self) -> &str {
        self.topic.strip_prefix(TOPIC_PREFIX).unwrap_or(&self.topic)
    }

    pub fn body(&self) -> &JsonValue {
        &self.body
    }
}

/// Capability interface for queue backends.
///
/// `publish` is synchronous from the dispatcher's point of view: either the
/// backend has accepted the message for delivery, or it returns an error. Any
/// timeout or cancellation is the backend's own.
pub trait Transport: Send + Sync {
    /// Publish a job reference to the named queue under the given topic.
    ///
    /// Must support at least one named default queue. Publishing to a queue
    /// the backend does not know is a transport-level failure.
    fn publish(&self, queue: &str, topic: &str, payload: &JobRef) -> Result<(), TransportError>;
}

impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    fn publish(&self, queue: &str, topic: &str, payload: &JobRef) -> Result<(), TransportError> {
        (**self).publish(queue, topic, payload)
    }
}

/// A receive handle on one named queue.
///
/// Designed for single-threaded consumption: one worker drains one
/// subscription, handling one delivery at a time.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<Delivery>,
}

impl Subscription {
    pub fn new(receiver: Receiver<Delivery>) -> Self {
        Self { receiver }
    }

    /// Block until the next delivery is available.
    pub fn recv(&self) -> Result<Delivery, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a delivery without blocking.
    pub fn try_recv(&self) -> Result<Delivery, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a delivery.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<Delivery, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_ref_serializes_to_a_ticket_keyed_map() {
        let payload = serde_json::to_value(JobRef::new("ticket_1")).unwrap();

        assert_eq!(payload, json!({ "ticket": "ticket_1" }));
    }

    #[test]
    fn message_type_strips_the_topic_prefix() {
        let delivery = Delivery::new(topic_for("mailer"), json!({}));
        assert_eq!(delivery.message_type(), "mailer");

        // Bare type names pass through for backends that do not prefix.
        let bare = Delivery::new("mailer", json!({}));
        assert_eq!(bare.message_type(), "mailer");
    }
}
