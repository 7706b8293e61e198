//! Moderation status state machine.
//!
//! Every entity starts `Pending`. The only transitions are
//! `Pending -> Approved` and `Pending -> Rejected`; both targets are terminal.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Moderation state of a user account or listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    /// Awaiting a moderator decision
    #[default]
    Pending,
    /// Accepted by a moderator
    Approved,
    /// Refused by a moderator
    Rejected,
}

impl ModerationStatus {
    /// Lowercase name used in filters, logs and serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Applies `decision` to this status.
    ///
    /// Returns `None` when the status is terminal; callers turn that into
    /// [`Error::NotActionable`] with the entity context they hold.
    #[must_use]
    pub const fn transition(self, decision: Decision) -> Option<Self> {
        match self {
            Self::Pending => Some(decision.target_status()),
            Self::Approved | Self::Rejected => None,
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(Error::Parse {
                what: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// A moderator's verdict on a pending entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Move to `Approved`
    Approve,
    /// Move to `Rejected`
    Reject,
}

impl Decision {
    /// The status an entity ends up in after this decision.
    #[must_use]
    pub const fn target_status(self) -> ModerationStatus {
        match self {
            Self::Approve => ModerationStatus::Approved,
            Self::Reject => ModerationStatus::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approve => f.write_str("approve"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for Decision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            _ => Err(Error::Parse {
                what: "decision",
                value: s.to_string(),
            }),
        }
    }
}

/// Status selector used by the moderation views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every status
    #[default]
    All,
    /// Only pending entities
    Pending,
    /// Only approved entities
    Approved,
    /// Only rejected entities
    Rejected,
}

impl StatusFilter {
    /// Whether an entity with `status` passes this filter.
    #[must_use]
    pub const fn matches(self, status: ModerationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(status, ModerationStatus::Pending),
            Self::Approved => matches!(status, ModerationStatus::Approved),
            Self::Rejected => matches!(status, ModerationStatus::Rejected),
        }
    }
}

impl From<ModerationStatus> for StatusFilter {
    fn from(status: ModerationStatus) -> Self {
        match status {
            ModerationStatus::Pending => Self::Pending,
            ModerationStatus::Approved => Self::Approved,
            ModerationStatus::Rejected => Self::Rejected,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<ModerationStatus>()
            .map(Self::from)
            .map_err(|_| Error::Parse {
                what: "status filter",
                value: s.to_string(),
            })
    }
}
