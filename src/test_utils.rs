//! Shared test utilities for the moderation engine.
//!
//! This module provides fixture builders for users and listings with sensible
//! defaults, plus a tracing initialiser that writes through the test harness.

use crate::entities::{ListingItem, ModerationStatus, UserAccount};
use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are ignored.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Fixed reference instant so fixtures are deterministic.
#[allow(clippy::unwrap_used)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).single().unwrap()
}

/// Creates a test user with sensible defaults.
///
/// # Defaults
/// * `username`: `user{id}`
/// * `email`: `user{id}@example.com`
/// * `registered_at`: `id` days before [`fixed_now`]
pub fn make_user(id: i64, status: ModerationStatus) -> UserAccount {
    UserAccount {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        status,
        registered_at: fixed_now() - Duration::days(id),
    }
}

/// Creates a test listing with sensible defaults.
///
/// # Defaults
/// * `title`: `Item {id}`
/// * `owner`: `user{id}`
/// * `listed_at`: `id` hours before [`fixed_now`]
pub fn make_item(id: i64, category: &str, status: ModerationStatus) -> ListingItem {
    ListingItem {
        id,
        title: format!("Item {id}"),
        category: category.to_string(),
        owner: format!("user{id}"),
        status,
        listed_at: fixed_now() - Duration::hours(id),
        description: None,
        size: None,
        condition: None,
        tags: Vec::new(),
    }
}

/// Creates a test listing with a custom title and owner.
pub fn make_custom_item(
    id: i64,
    title: &str,
    category: &str,
    owner: &str,
    status: ModerationStatus,
) -> ListingItem {
    ListingItem {
        title: title.to_string(),
        owner: owner.to_string(),
        ..make_item(id, category, status)
    }
}
