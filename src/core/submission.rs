//! Registration and listing submission.
//!
//! Both forms are validated here and produce a new entity in the `Pending`
//! state, ready for the moderation queue. Id allocation and persistence belong
//! to the external API; callers pass the id it assigned.

use crate::{
    entities::{ListingItem, ModerationStatus, UserAccount},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

const USERNAME_LEN: (usize, usize) = (3, 20);
const PASSWORD_MIN_LEN: usize = 6;
const TITLE_LEN: (usize, usize) = (3, 100);
const DESCRIPTION_LEN: (usize, usize) = (10, 1000);
/// Maximum number of photos per listing
pub const MAX_LISTING_IMAGES: usize = 5;
const GENDERS: [&str; 3] = ["male", "female", "prefer_not_to_say"];

/// Registration form contents
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    /// Contact email
    pub email: String,
    /// Requested username
    pub username: String,
    /// Chosen password; checked but never stored here
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
    /// `male`, `female` or `prefer_not_to_say`
    pub gender: String,
}

/// Listing form contents
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    /// Listing title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Clothing category
    pub category: String,
    /// Garment size
    pub size: String,
    /// Wear condition
    pub condition: String,
    /// Comma-separated tags; may be empty
    #[serde(default)]
    pub tags: String,
    /// Number of photos attached
    #[serde(default)]
    pub image_count: usize,
}

fn invalid(field: &'static str, message: impl Into<String>) -> Error {
    Error::Validation {
        field,
        message: message.into(),
    }
}

fn required<'a>(field: &'static str, label: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, format!("{label} is required")));
    }
    Ok(trimmed)
}

fn check_length(
    field: &'static str,
    label: &str,
    value: &str,
    (min, max): (usize, usize),
) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(invalid(
            field,
            format!("{label} must be at least {min} characters"),
        ));
    }
    if len > max {
        return Err(invalid(
            field,
            format!("{label} must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

/// Validates a registration and creates the pending account.
///
/// # Errors
/// Returns [`Error::Validation`] naming the first offending field.
pub fn register_user(form: &NewRegistration, id: i64, now: DateTime<Utc>) -> Result<UserAccount> {
    let email = required("email", "Email", &form.email)?;
    if !is_plausible_email(email) {
        return Err(invalid("email", "Invalid email format"));
    }

    required("username", "Username", &form.username)?;
    let username = form.username.as_str();
    check_length("username", "Username", username, USERNAME_LEN)?;
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid(
            "username",
            "Username can only contain letters, numbers and underscores",
        ));
    }

    if form.password.is_empty() {
        return Err(invalid("password", "Password is required"));
    }
    if form.password.chars().count() < PASSWORD_MIN_LEN {
        return Err(invalid(
            "password",
            format!("Password must be at least {PASSWORD_MIN_LEN} characters"),
        ));
    }
    if form.confirm_password.is_empty() {
        return Err(invalid("confirm_password", "Confirm password is required"));
    }
    if form.confirm_password != form.password {
        return Err(invalid("confirm_password", "Passwords must match"));
    }

    let gender = required("gender", "Gender", &form.gender)?;
    if !GENDERS.contains(&gender) {
        return Err(invalid("gender", "Please select a valid option"));
    }

    debug!("Registration accepted for {}", username);
    Ok(UserAccount {
        id,
        username: username.to_string(),
        email: email.to_string(),
        status: ModerationStatus::Pending,
        registered_at: now,
    })
}

/// Validates a listing form and creates the pending listing for `owner`.
///
/// # Errors
/// Returns [`Error::Validation`] naming the first offending field.
pub fn submit_listing(
    form: &NewListing,
    owner: &str,
    id: i64,
    now: DateTime<Utc>,
) -> Result<ListingItem> {
    let title = required("title", "Title", &form.title)?;
    check_length("title", "Title", title, TITLE_LEN)?;

    let description = required("description", "Description", &form.description)?;
    check_length("description", "Description", description, DESCRIPTION_LEN)?;

    let category = required("category", "Category", &form.category)?;
    let size = required("size", "Size", &form.size)?;
    let condition = required("condition", "Condition", &form.condition)?;

    if form.image_count == 0 {
        return Err(invalid("images", "Please upload at least one image"));
    }
    if form.image_count > MAX_LISTING_IMAGES {
        return Err(invalid(
            "images",
            format!("You can only upload up to {MAX_LISTING_IMAGES} images"),
        ));
    }

    let tags = form
        .tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Listing '{}' accepted from {}", title, owner);
    Ok(ListingItem {
        id,
        title: title.to_string(),
        category: category.to_string(),
        owner: owner.to_string(),
        status: ModerationStatus::Pending,
        listed_at: now,
        description: Some(description.to_string()),
        size: Some(size.to_string()),
        condition: Some(condition.to_string()),
        tags,
    })
}
