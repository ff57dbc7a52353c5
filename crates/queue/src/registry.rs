//! Job type → queue routing table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::QueueConfig;

/// Lookup miss: the type was never registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown job type: {0}")]
pub struct UnknownJobType(pub String);

/// A registered job type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobType {
    name: String,
    /// Destination queue; `None` falls back to the registry default.
    queue: Option<String>,
}

impl JobType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: None,
        }
    }

    pub fn with_queue(name: impl Into<String>, queue: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: Some(queue.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }
}

/// Maps job type names to their destination queues.
///
/// Population and traffic are two disjoint phases: `register` takes `&mut self`
/// and happens at startup, after which the registry is shared read-only
/// (typically behind an `Arc`) and needs no locking under concurrent lookups.
#[derive(Debug, Clone)]
pub struct JobTypeRegistry {
    types: HashMap<String, JobType>,
    default_queue: String,
}

impl JobTypeRegistry {
    /// Create an empty registry with the process-wide fallback queue.
    pub fn new(default_queue: impl Into<String>) -> Self {
        Self {
            types: HashMap::new(),
            default_queue: default_queue.into(),
        }
    }

    /// Build a registry from the flat configuration surface.
    pub fn from_config(config: &QueueConfig) -> Self {
        let mut registry = Self::new(config.default_queue.clone());
        for (name, queue) in &config.queues {
            registry.register(JobType::with_queue(name.clone(), queue.clone()));
        }
        registry
    }

    /// Store a mapping. Re-registering the same name overwrites silently —
    /// last write wins.
    pub fn register(&mut self, job_type: JobType) {
        self.types.insert(job_type.name().to_owned(), job_type);
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Result<&JobType, UnknownJobType> {
        self.types
            .get(name)
            .ok_or_else(|| UnknownJobType(name.to_owned()))
    }

    /// The queue a type routes to: its configured queue, else the default.
    ///
    /// Unregistered names also resolve to the default queue; dispatch rejects
    /// them earlier via [`JobTypeRegistry::get`].
    pub fn queue_for(&self, name: &str) -> &str {
        self.types
            .get(name)
            .and_then(|jt| jt.queue())
            .unwrap_or(&self.default_queue)
    }

    pub fn default_queue(&self) -> &str {
        &self.default_queue
    }
}
