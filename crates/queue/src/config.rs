//! Flat configuration surface for the queue layer.
//!
//! Loading is the caller's concern: deserialize with any serde format and hand
//! the struct to [`JobTypeRegistry::from_config`](crate::JobTypeRegistry::from_config)
//! before traffic starts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Queue routing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Fallback queue for types without an explicit mapping.
    pub default_queue: String,
    /// Per-type queue overrides: job type name → queue name.
    pub queues: BTreeMap<String, String>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            default_queue: "default".to_owned(),
            queues: BTreeMap::new(),
        }
    }
}
