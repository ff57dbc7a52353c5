//! `jobwire-core` — domain foundation for the job pipeline.
//!
//! This crate contains **pure domain** value types (no infrastructure concerns):
//! the job record, its lifecycle status, the ticket correlation key, and owned
//! schedule associations.

pub mod error;
pub mod job;
pub mod schedule;
pub mod status;
pub mod ticket;

pub use error::{DomainError, DomainResult};
pub use job::Job;
pub use schedule::Schedule;
pub use status::Status;
pub use ticket::Ticket;
