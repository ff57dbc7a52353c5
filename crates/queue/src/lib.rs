//! `jobwire-queue` — the job dispatch/consume pipeline.
//!
//! Clients submit typed jobs; the dispatcher resolves each job type to a named
//! queue through the [`JobTypeRegistry`] and publishes a minimal job reference
//! over the [`Transport`]. On the worker side the [`Consumer`] validates the
//! inbound delivery, reconstructs the [`Message`], and hands it to the
//! [`JobManager`] exactly once.
//!
//! ```text
//! caller → Dispatcher::produce(Message) → registry lookup → Transport::publish
//!                                                                 ↓ (delivery)
//! JobManager::on_message(Message) ← Consumer::process(Delivery) ←─┘
//! ```
//!
//! Collaborators are passed explicitly at construction; there is no container
//! or service locator. The registry is populated once at startup (see
//! [`QueueConfig`]) and shared read-only behind an `Arc` afterwards.

pub mod config;
pub mod consumer;
pub mod dispatcher;
pub mod in_memory;
pub mod manager;
pub mod message;
pub mod registry;
pub mod transport;

pub use config::QueueConfig;
pub use consumer::{ConsumeError, Consumer};
pub use dispatcher::{Dispatcher, ProduceError};
pub use in_memory::InMemoryTransport;
pub use manager::{JobManager, ManagerError};
pub use message::Message;
pub use registry::{JobType, JobTypeRegistry, UnknownJobType};
pub use transport::{
    Delivery, JobRef, Subscription, TOPIC_PREFIX, Transport, TransportError, topic_for,
};
