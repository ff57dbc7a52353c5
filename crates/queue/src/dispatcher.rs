//! The producer side of the pipeline.

use std::sync::Arc;

use thiserror::Error;

use crate::message::Message;
use crate::registry::{JobTypeRegistry, UnknownJobType};
use crate::transport::{JobRef, Transport, TransportError, topic_for};

/// Failure during [`Dispatcher::produce`].
#[derive(Debug, Error)]
pub enum ProduceError {
    /// The message's type is not registered.
    #[error(transparent)]
    UnknownJobType(#[from] UnknownJobType),

    /// The transport failed; propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Routes messages to their destination queue and publishes them.
///
/// Stateless between calls beyond the registry it depends on; safe to call
/// from any number of threads concurrently. On failure nothing has been
/// published and no state has changed — retry policy belongs to the transport
/// or the caller, not here.
#[derive(Debug)]
pub struct Dispatcher<T> {
    registry: Arc<JobTypeRegistry>,
    transport: T,
}

impl<T> Dispatcher<T> {
    pub fn new(registry: Arc<JobTypeRegistry>, transport: T) -> Self {
        Self {
            registry,
            transport,
        }
    }
}

impl<T> Dispatcher<T>
where
    T: Transport,
{
    /// Publish a job reference to the queue its type routes to.
    ///
    /// Resolves the type through the registry (fails with
    /// [`ProduceError::UnknownJobType`] if absent), then publishes exactly
    /// `{"ticket": ...}` under the type's topic. Whether the resolved queue
    /// actually exists is the transport's concern, not pre-validated here.
    pub fn produce(&self, message: &Message) -> Result<(), ProduceError> {
        self.registry.get(message.job_type())?;
        let queue = self.registry.queue_for(message.job_type());

        tracing::debug!(
            job_type = message.job_type(),
            ticket = message.ticket(),
            queue,
            "producing job message"
        );

        self.transport.publish(
            queue,
            &topic_for(message.job_type()),
            &JobRef::new(message.ticket()),
        )?;

        Ok(())
    }
}
