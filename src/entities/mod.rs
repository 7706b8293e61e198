//! Entity module - the things a moderator reviews.
//! User accounts and listing items share the same moderation shape: a stable id,
//! a status, a creation timestamp and an ordered set of searchable text fields.

pub mod listing_item;
pub mod status;
pub mod user_account;

use chrono::{DateTime, Utc};

pub use listing_item::ListingItem;
pub use status::{Decision, ModerationStatus, StatusFilter};
pub use user_account::UserAccount;

/// An entity subject to moderation.
///
/// Implementors are plain values; a status change produces a new value via
/// [`Moderatable::with_status`] rather than mutating shared state.
pub trait Moderatable: Clone {
    /// Label used in notices, logs and errors (e.g. "User", "Item")
    const KIND: &'static str;

    /// Unique, stable identifier
    fn id(&self) -> i64;

    /// Current moderation status
    fn status(&self) -> ModerationStatus;

    /// Copy of `self` with `status` replaced
    #[must_use]
    fn with_status(&self, status: ModerationStatus) -> Self;

    /// Attributes matched by free-text search, in display order
    fn searchable_fields(&self) -> Vec<&str>;

    /// When the entity was registered or listed
    fn created_at(&self) -> DateTime<Utc>;
}
