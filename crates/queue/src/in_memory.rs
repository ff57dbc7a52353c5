//! In-memory transport for tests/dev.

use std::collections::HashMap;
use std::sync::{Mutex, mpsc};

use crate::transport::{Delivery, JobRef, Subscription, Transport, TransportError};

/// In-memory queue backend.
///
/// - No IO / no async
/// - Best-effort fan-out per queue
/// - At-least-once acceptable (managers must be idempotent-tolerant)
///
/// Queues are declared up front; publishing to an undeclared queue fails with
/// [`TransportError::UnknownQueue`], matching real backends that reject
/// unknown destinations.
#[derive(Debug)]
pub struct InMemoryTransport {
    queues: Mutex<HashMap<String, Vec<mpsc::Sender<Delivery>>>>,
}

impl InMemoryTransport {
    /// Create a backend knowing only the given default queue.
    pub fn new(default_queue: impl Into<String>) -> Self {
        Self::with_queues([default_queue.into()])
    }

    /// Create a backend with a fixed set of named queues.
    pub fn with_queues<I, S>(queues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queues = queues
            .into_iter()
            .map(|name| (name.into(), Vec::new()))
            .collect();
        Self {
            queues: Mutex::new(queues),
        }
    }

    /// Subscribe to one named queue.
    pub fn subscribe(&self, queue: &str) -> Result<Subscription, TransportError> {
        let mut queues = self
            .queues
            .lock()
            .map_err(|_| TransportError::Publish("subscriber registry poisoned".to_owned()))?;

        let senders = queues
            .get_mut(queue)
            .ok_or_else(|| TransportError::UnknownQueue(queue.to_owned()))?;

        let (tx, rx) = mpsc::channel();
        senders.push(tx);

        Ok(Subscription::new(rx))
    }
}

impl Transport for InMemoryTransport {
    fn publish(&self, queue: &str, topic: &str, payload: &JobRef) -> Result<(), TransportError> {
        let delivery = Delivery::new(topic, serde_json::to_value(payload).map_err(|e| {
            TransportError::Publish(format!("payload serialization failed: {e}"))
        })?);

        let mut queues = self
            .queues
            .lock()
            .map_err(|_| TransportError::Publish("subscriber registry poisoned".to_owned()))?;

        let senders = queues
            .get_mut(queue)
            .ok_or_else(|| TransportError::UnknownQueue(queue.to_owned()))?;

        // Drop any dead subscribers while publishing.
        senders.retain(|tx| tx.send(delivery.clone()).is_ok());

        Ok(())
    }
}
