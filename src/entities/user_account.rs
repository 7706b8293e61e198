//! User account entity - a registered marketplace member awaiting or past review.

use super::{Moderatable, ModerationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as seen by the admin panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Unique identifier for the account
    pub id: i64,
    /// Public handle (letters, digits and underscores)
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Moderation state
    pub status: ModerationStatus,
    /// Registration time
    pub registered_at: DateTime<Utc>,
}

impl Moderatable for UserAccount {
    const KIND: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> ModerationStatus {
        self.status
    }

    fn with_status(&self, status: ModerationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.email.as_str()]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
