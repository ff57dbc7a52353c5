//! Job lifecycle status.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifecycle status of a job.
///
/// The intended graph (driven by the external job manager, not enforced here):
///
/// ```text
/// planned → enqueued → processing → {completed | failed | canceled}
///    └→ slack → enqueued                       (deferred/scheduled jobs)
/// ```
///
/// `Status` is a validated value carrier: constructing one from a raw string
/// goes through [`Status::from_str`], so an in-memory `Status` always holds a
/// member of the closed set. Transition legality is the manager's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Created, not yet handed to the transport.
    Planned,
    /// Deferred: waiting for its schedule before it may be enqueued.
    Slack,
    /// Accepted by the transport, waiting for a worker.
    Enqueued,
    /// Picked up by a worker.
    Processing,
    /// Finished successfully.
    Completed,
    /// Canceled on request; only reachable from non-terminal states.
    Canceled,
    /// Finished with an error.
    Failed,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Planned,
        Status::Slack,
        Status::Enqueued,
        Status::Processing,
        Status::Completed,
        Status::Canceled,
        Status::Failed,
    ];

    /// Canonical string for persistence/serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::Slack => "slack",
            Status::Enqueued => "enqueued",
            Status::Processing => "processing",
            Status::Completed => "completed",
            Status::Canceled => "canceled",
            Status::Failed => "failed",
        }
    }

    /// True for states from which no further transition is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Canceled | Status::Failed)
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DomainError;

    /// Case-sensitive exact match against the closed set.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "planned" => Ok(Status::Planned),
            "slack" => Ok(Status::Slack),
            "enqueued" => Ok(Status::Enqueued),
            "processing" => Ok(Status::Processing),
            "completed" => Ok(Status::Completed),
            "canceled" => Ok(Status::Canceled),
            "failed" => Ok(Status::Failed),
            other => Err(DomainError::invalid_value(format!(
                "unrecognized status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_member_of_the_closed_set() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "bogus".parse::<Status>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!("Completed".parse::<Status>().is_err());
        assert!("COMPLETED".parse::<Status>().is_err());
    }

    #[test]
    fn serde_uses_the_canonical_strings() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn terminal_states() {
        assert!(Status::Completed.is_terminal());
        assert!(Status::Canceled.is_terminal());
        assert!(Status::Failed.is_terminal());
        assert!(!Status::Planned.is_terminal());
        assert!(!Status::Slack.is_terminal());
        assert!(!Status::Enqueued.is_terminal());
        assert!(!Status::Processing.is_terminal());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any string outside the closed set fails to parse.
            #[test]
            fn strangers_fail_parse(raw in "[a-zA-Z_]{1,16}") {
                let in_set = Status::ALL.iter().any(|s| s.as_str() == raw);
                prop_assert_eq!(raw.parse::<Status>().is_ok(), in_set);
            }
        }
    }
}
