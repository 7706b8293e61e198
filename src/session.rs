//! Sessions and the moderation capability.
//!
//! Moderation commands take a [`Moderator`] explicitly. The only way to get one
//! is from an admin [`Session`], so code that lacks the capability cannot call
//! them at all.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Role attached to a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular marketplace member
    #[default]
    Member,
    /// Marketplace administrator
    Admin,
}

/// A signed-in user, as handed over by the identity service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Username of the signed-in user
    pub username: String,
    /// Email of the signed-in user
    pub email: String,
    /// Granted role
    #[serde(default)]
    pub role: Role,
}

impl Session {
    /// Creates a session for `username` with `role`.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            role,
        }
    }

    /// Whether this session may moderate.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Obtains the moderation capability.
    ///
    /// # Errors
    /// Returns [`Error::Unauthorized`] for non-admin sessions.
    pub fn moderator(&self) -> Result<Moderator> {
        if !self.is_admin() {
            warn!("Session '{}' requested moderation rights", self.username);
            return Err(Error::Unauthorized {
                username: self.username.clone(),
            });
        }
        Ok(Moderator {
            username: self.username.clone(),
        })
    }
}

/// Proof that the holder may approve or reject entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moderator {
    username: String,
}

impl Moderator {
    /// Username of the acting moderator, recorded in logs
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_admin_gets_moderator() {
        let session = Session::new("admin", "admin@rewear.test", Role::Admin);
        let moderator = session.moderator().unwrap();
        assert_eq!(moderator.username(), "admin");
    }

    #[test]
    fn test_member_is_unauthorized() {
        let session = Session::new("user3", "user3@example.com", Role::Member);
        let err = session.moderator().unwrap_err();
        assert!(matches!(err, Error::Unauthorized { ref username } if username == "user3"));
    }

    #[test]
    fn test_role_defaults_to_member_when_absent() {
        let session: Session =
            serde_json::from_str(r#"{"username":"demo","email":"demo@example.com"}"#).unwrap();
        assert_eq!(session.role, Role::Member);
        assert!(!session.is_admin());
    }
}
