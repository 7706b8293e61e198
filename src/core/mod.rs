//! Core business logic - framework-agnostic moderation operations.
//!
//! Query and decision functions are pure over in-memory snapshots; the panel
//! and notice board hold the admin shell's state around them.

/// Moderation decisions (approve / reject)
pub mod moderation;
/// Transient confirmation notices
pub mod notice;
/// Admin panel state: per-entity tables, tabs and notices
pub mod panel;
/// Search, status filtering and pagination
pub mod query;
/// Reference users and listings
pub mod seed;
/// Registration and listing submission
pub mod submission;
