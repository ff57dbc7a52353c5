//! The job manager contract.
//!
//! The manager is the consumer's sole collaborator. It owns job execution,
//! persistence, and the status state machine; this crate only defines the
//! interface it calls.

use std::sync::Arc;

use thiserror::Error;

use crate::message::Message;

/// Failure raised by the job manager, passed through verbatim — the pipeline
/// never swallows it.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The manager refused the message (e.g. unknown ticket, illegal state).
    #[error("message rejected: {0}")]
    Rejected(String),

    /// Manager-specific failure, passed through verbatim.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Receives validated messages from the consumer.
///
/// The transport provides at-least-once delivery and the pipeline does not
/// deduplicate, so implementations must treat repeated calls for the same
/// ticket safely.
pub trait JobManager: Send + Sync {
    fn on_message(&self, message: &Message) -> Result<(), ManagerError>;
}

impl<M> JobManager for Arc<M>
where
    M: JobManager + ?Sized,
{
    fn on_message(&self, message: &Message) -> Result<(), ManagerError> {
        (**self).on_message(message)
    }
}
