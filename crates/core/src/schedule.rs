//! Schedule association records.
//!
//! Schedule *evaluation* (calendar math, recurrence rules) belongs to an
//! external scheduler; the job side only owns the association.

use serde::{Deserialize, Serialize};

/// A recurrence rule attached to a job.
///
/// Value object: compared by value, removal from a job is by equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rule kind, e.g. `"cron"`.
    kind: String,
    /// Rule expression in the kind's own syntax, e.g. `"*/5 * * * *"`.
    expression: String,
}

impl Schedule {
    pub fn new(kind: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            expression: expression.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}
