//! Reference data set for the admin shell and for tests.
//!
//! Mirrors the marketplace's demo content: 25 registered users where every
//! third one is still pending, and 30 listings cycling through categories and
//! statuses. Timestamps are whole-day offsets before `now`, so the data is
//! reproducible for a fixed `now`.

use crate::entities::{ListingItem, ModerationStatus, UserAccount};
use chrono::{DateTime, Duration, Utc};

/// Number of users in the reference set
pub const REFERENCE_USER_COUNT: i64 = 25;
/// Number of listings in the reference set
pub const REFERENCE_ITEM_COUNT: i64 = 30;

const CATEGORIES: [&str; 4] = ["Shirts", "Pants", "Jackets", "Shoes"];
const ITEM_STATUSES: [ModerationStatus; 3] = [
    ModerationStatus::Pending,
    ModerationStatus::Approved,
    ModerationStatus::Rejected,
];

/// Builds the reference users, ids `1..=25`.
#[must_use]
pub fn reference_users(now: DateTime<Utc>) -> Vec<UserAccount> {
    (0..REFERENCE_USER_COUNT)
        .map(|idx| {
            let id = idx + 1;
            UserAccount {
                id,
                username: format!("user{id}"),
                email: format!("user{id}@example.com"),
                status: if idx % 3 == 0 {
                    ModerationStatus::Pending
                } else {
                    ModerationStatus::Approved
                },
                registered_at: now - Duration::days((idx * 11) % 30),
            }
        })
        .collect()
}

/// Builds the reference listings, ids `1..=30`.
#[must_use]
pub fn reference_items(now: DateTime<Utc>) -> Vec<ListingItem> {
    (0..REFERENCE_ITEM_COUNT)
        .zip(CATEGORIES.iter().cycle())
        .zip(ITEM_STATUSES.iter().cycle())
        .map(|((idx, category), status)| {
            let id = idx + 1;
            ListingItem {
                id,
                title: format!("Item {id}"),
                category: (*category).to_string(),
                owner: format!("user{}", (idx * 7) % REFERENCE_USER_COUNT + 1),
                status: *status,
                listed_at: now - Duration::days((idx * 13) % 30),
                description: None,
                size: None,
                condition: None,
                tags: Vec::new(),
            }
        })
        .collect()
}
