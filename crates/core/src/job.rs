//! The job record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};
use crate::schedule::Schedule;
use crate::status::Status;
use crate::ticket::Ticket;

/// A unit of work routed through the queue pipeline.
///
/// The job manager owns creation, persistence and state transitions; the
/// dispatch/consume pipeline only ever reads `job_type` and `ticket` to build
/// a queue message and never mutates a job directly.
///
/// `parameters` and `response` are opaque to this crate — their shape is
/// defined by the job type's business logic.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Assigned by the manager on persistence; `None` until then.
    #[serde(default)]
    ticket: Option<Ticket>,
    job_type: String,
    status: Status,
    #[serde(default)]
    parameters: JsonValue,
    /// Worker-reported execution duration in milliseconds, set once on completion.
    #[serde(default)]
    processing_time: Option<u64>,
    created_at: DateTime<Utc>,
    /// Set when the job reaches a terminal state.
    #[serde(default)]
    terminated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    response: Option<JsonValue>,
    /// A job may be the execution target of any number of schedules.
    #[serde(default)]
    schedules: Vec<Schedule>,
}

impl Job {
    /// Create a new, not-yet-persisted job in `planned` state.
    ///
    /// The job type must be non-blank; whether it is *known* is checked later
    /// against the type registry at dispatch time.
    pub fn new(job_type: impl Into<String>, parameters: JsonValue) -> DomainResult<Self> {
        let job_type = job_type.into();
        if job_type.trim().is_empty() {
            return Err(DomainError::validation("job type must not be blank"));
        }

        Ok(Self {
            ticket: None,
            job_type,
            status: Status::Planned,
            parameters,
            processing_time: None,
            created_at: Utc::now(),
            terminated_at: None,
            response: None,
            schedules: Vec::new(),
        })
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    /// Assign the ticket. Manager-owned; called once on persistence.
    pub fn assign_ticket(&mut self, ticket: Ticket) {
        self.ticket = Some(ticket);
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Replace the status with an already-validated value.
    ///
    /// Transition legality is enforced by the manager, not here.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn parameters(&self) -> &JsonValue {
        &self.parameters
    }

    pub fn set_parameters(&mut self, parameters: JsonValue) {
        self.parameters = parameters;
    }

    pub fn response(&self) -> Option<&JsonValue> {
        self.response.as_ref()
    }

    pub fn set_response(&mut self, response: Option<JsonValue>) {
        self.response = response;
    }

    pub fn processing_time(&self) -> Option<u64> {
        self.processing_time
    }

    pub fn set_processing_time(&mut self, milliseconds: u64) {
        self.processing_time = Some(milliseconds);
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn terminated_at(&self) -> Option<DateTime<Utc>> {
        self.terminated_at
    }

    pub fn set_terminated_at(&mut self, at: DateTime<Utc>) {
        self.terminated_at = Some(at);
    }

    /// Wall-clock time between creation and termination.
    ///
    /// For a job still in flight this is the time elapsed so far. Never
    /// negative as long as `created_at <= now`.
    pub fn execution_time(&self) -> chrono::Duration {
        let end = self.terminated_at.unwrap_or_else(Utc::now);
        end - self.created_at
    }

    pub fn has_schedules(&self) -> bool {
        !self.schedules.is_empty()
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn add_schedule(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Remove all schedules equal to the given one.
    pub fn remove_schedule(&mut self, schedule: &Schedule) {
        self.schedules.retain(|s| s != schedule);
    }

    pub fn clear_schedules(&mut self) {
        self.schedules.clear();
    }
}

/// A clone is a **new** job, never a duplicate of an existing record: the
/// ticket is cleared so the manager assigns a fresh one on persistence.
impl Clone for Job {
    fn clone(&self) -> Self {
        Self {
            ticket: None,
            job_type: self.job_type.clone(),
            status: self.status,
            parameters: self.parameters.clone(),
            processing_time: self.processing_time,
            created_at: self.created_at,
            terminated_at: self.terminated_at,
            response: self.response.clone(),
            schedules: self.schedules.clone(),
        }
    }
}

impl core::fmt::Display for Job {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.ticket {
            Some(ticket) => core::fmt::Display::fmt(&ticket, f),
            None => Ok(()),
        }
    }
}
