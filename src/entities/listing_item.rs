//! Listing item entity - a garment offered for exchange.
//!
//! The moderation view only needs title, category, owner and listing time.
//! The remaining fields come from the submission form and are optional so
//! listings imported from elsewhere still deserialize.

use super::{Moderatable, ModerationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listed item as seen by the admin panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    /// Unique identifier for the listing
    pub id: i64,
    /// Short title shown in listings
    pub title: String,
    /// Clothing category (e.g. "Jackets")
    pub category: String,
    /// Username of the member who listed the item
    pub owner: String,
    /// Moderation state
    pub status: ModerationStatus,
    /// Listing time
    pub listed_at: DateTime<Utc>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Garment size (XS..XXXL or "other")
    #[serde(default)]
    pub size: Option<String>,
    /// Wear condition (e.g. "Like New")
    #[serde(default)]
    pub condition: Option<String>,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Moderatable for ListingItem {
    const KIND: &'static str = "Item";

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
        vec![
            self.title.as_str(),
            self.owner.as_str(),
            self.category.as_str(),
        ]
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.listed_at
    }
}
