//! Ticket: the correlation key between dispatch and consumption.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier of a job instance.
///
/// Tickets are assigned by the job manager when a job is persisted — never by
/// the job itself. Until then a job carries no ticket at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(Uuid);

impl Ticket {
    /// Create a new ticket.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing tickets explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for Ticket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for Ticket {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<Ticket> for Uuid {
    fn from(value: Ticket) -> Self {
        value.0
    }
}

impl FromStr for Ticket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_ticket(format!("{s}: {e}")))?;
        Ok(Self(uuid))
    }
}
