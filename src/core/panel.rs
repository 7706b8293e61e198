//! Admin moderation panel state.
//!
//! A [`ModerationPanel`] owns one snapshot collection plus the query applied to
//! it; the visible rows are always derived on demand. [`AdminPanel`] groups the
//! user and listing panels with the shared notice board.

use crate::{
    config::ModerationConfig,
    core::{
        moderation::{apply_decision, confirmation_message},
        notice::{Notice, NoticeBoard},
        query::{self, ModerationQuery, Page, StatusCounts},
    },
    entities::{Decision, ListingItem, Moderatable, StatusFilter, UserAccount},
    errors::Result,
    session::Moderator,
};
use tracing::{debug, info};

/// Search, filter, paging and decisions over one kind of entity.
#[derive(Debug, Clone)]
pub struct ModerationPanel<T> {
    entities: Vec<T>,
    query: ModerationQuery,
}

impl<T: Moderatable> ModerationPanel<T> {
    /// Wraps a fetched snapshot.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidQuery`] if `page_size` is zero.
    pub fn new(entities: Vec<T>, page_size: usize) -> Result<Self> {
        Ok(Self {
            entities,
            query: ModerationQuery::new(page_size)?,
        })
    }

    /// The full current snapshot
    #[must_use]
    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    /// The query currently applied
    #[must_use]
    pub const fn query(&self) -> &ModerationQuery {
        &self.query
    }

    /// Replaces the snapshot after a fresh fetch. The query is kept.
    pub fn replace_entities(&mut self, entities: Vec<T>) {
        debug!("{} panel reloaded with {} rows", T::KIND, entities.len());
        self.entities = entities;
    }

    /// Sets the search term (back to page 1).
    pub fn search(&mut self, term: impl Into<String>) {
        self.query.set_search_term(term);
    }

    /// Sets the status filter (back to page 1).
    pub fn filter_status(&mut self, status_filter: StatusFilter) {
        self.query.set_status_filter(status_filter);
    }

    /// Moves to another page.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidQuery`] if `page` is zero.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        self.query.go_to_page(page)
    }

    /// Rows to display for the current query.
    #[must_use]
    pub fn view(&self) -> Page<&T> {
        query::view(&self.entities, &self.query)
    }

    /// Per-status totals over the whole snapshot.
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        query::status_counts(&self.entities)
    }

    /// Approves or rejects entity `id` and returns the confirmation text.
    ///
    /// The snapshot is replaced only when the decision succeeds.
    ///
    /// # Errors
    /// Propagates [`apply_decision`] errors; the snapshot is left as it was.
    pub fn decide(&mut self, moderator: &Moderator, id: i64, decision: Decision) -> Result<String> {
        let updated = apply_decision(&self.entities, id, decision)?;
        self.entities = updated;
        info!(
            moderator = moderator.username(),
            "{} {} {}",
            T::KIND,
            id,
            decision.target_status()
        );
        Ok(confirmation_message(T::KIND, decision))
    }
}

/// Sections of the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    /// User account moderation
    #[default]
    Users,
    /// Listing moderation
    Listings,
    /// Swap orders; not moderated yet
    Orders,
}

/// The whole admin panel: both moderation tables and the notice board.
#[derive(Debug)]
pub struct AdminPanel {
    users: ModerationPanel<UserAccount>,
    listings: ModerationPanel<ListingItem>,
    active_tab: AdminTab,
    notices: NoticeBoard,
}

impl AdminPanel {
    /// Builds the panel from fetched snapshots and configuration.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidQuery`] if the configured page size is zero.
    pub fn new(
        users: Vec<UserAccount>,
        listings: Vec<ListingItem>,
        config: &ModerationConfig,
    ) -> Result<Self> {
        Ok(Self {
            users: ModerationPanel::new(users, config.page_size)?,
            listings: ModerationPanel::new(listings, config.page_size)?,
            active_tab: AdminTab::default(),
            notices: NoticeBoard::new(config.notice_duration()),
        })
    }

    /// Currently selected section
    #[must_use]
    pub const fn active_tab(&self) -> AdminTab {
        self.active_tab
    }

    /// Switches section.
    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    /// User moderation table
    #[must_use]
    pub const fn users(&self) -> &ModerationPanel<UserAccount> {
        &self.users
    }

    /// Mutable user moderation table, for search and paging
    pub fn users_mut(&mut self) -> &mut ModerationPanel<UserAccount> {
        &mut self.users
    }

    /// Listing moderation table
    #[must_use]
    pub const fn listings(&self) -> &ModerationPanel<ListingItem> {
        &self.listings
    }

    /// Mutable listing moderation table, for search and paging
    pub fn listings_mut(&mut self) -> &mut ModerationPanel<ListingItem> {
        &mut self.listings
    }

    /// Shared confirmation notice board
    #[must_use]
    pub const fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Decides on a user account and posts the confirmation notice.
    ///
    /// # Errors
    /// Propagates decision errors; no notice is posted in that case.
    pub async fn decide_user(
        &mut self,
        moderator: &Moderator,
        id: i64,
        decision: Decision,
    ) -> Result<Notice> {
        let message = self.users.decide(moderator, id, decision)?;
        Ok(self.notices.post(message).await)
    }

    /// Decides on a listing and posts the confirmation notice.
    ///
    /// # Errors
    /// Propagates decision errors; no notice is posted in that case.
    pub async fn decide_listing(
        &mut self,
        moderator: &Moderator,
        id: i64,
        decision: Decision,
    ) -> Result<Notice> {
        let message = self.listings.decide(moderator, id, decision)?;
        Ok(self.notices.post(message).await)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::seed,
        entities::ModerationStatus,
        errors::Error,
        session::{Role, Session},
        test_utils::{fixed_now, make_user},
    };
    use std::time::Duration;

    fn admin() -> Moderator {
        Session::new("admin", "admin@rewear.test", Role::Admin)
            .moderator()
            .unwrap()
    }

    fn panel() -> AdminPanel {
        AdminPanel::new(
            seed::reference_users(fixed_now()),
            seed::reference_items(fixed_now()),
            &ModerationConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_pending_users_view() {
        let mut panel = panel();
        panel.users_mut().go_to_page(2).unwrap();
        panel.users_mut().filter_status(StatusFilter::Pending);

        let page = panel.users().view();
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_decide_updates_snapshot_and_view() {
        let moderator = admin();
        let mut users = ModerationPanel::new(seed::reference_users(fixed_now()), 10).unwrap();
        users.filter_status(StatusFilter::Pending);

        let message = users.decide(&moderator, 1, Decision::Approve).unwrap();
        assert_eq!(message, "User approved successfully!");
        assert_eq!(users.view().total_matches, 8);
        assert_eq!(users.counts().pending, 8);
        assert_eq!(users.entities()[0].status, ModerationStatus::Approved);
    }

    #[test]
    fn test_failed_decide_keeps_snapshot() {
        let moderator = admin();
        let mut listings = ModerationPanel::new(seed::reference_items(fixed_now()), 10).unwrap();
        let before = listings.entities().to_vec();

        // item 2 is approved in the reference set
        let err = listings.decide(&moderator, 2, Decision::Reject).unwrap_err();
        assert!(matches!(err, Error::NotActionable { kind: "Item", id: 2, .. }));
        assert_eq!(listings.entities(), before.as_slice());
    }

    #[test]
    fn test_replace_entities_keeps_query() {
        let mut users = ModerationPanel::new(seed::reference_users(fixed_now()), 10).unwrap();
        users.search("user2");
        users.replace_entities(vec![make_user(2, ModerationStatus::Pending)]);
        assert_eq!(users.query().search_term(), "user2");
        assert_eq!(users.view().items.len(), 1);
    }

    #[test]
    fn test_tab_selection() {
        let mut panel = panel();
        assert_eq!(panel.active_tab(), AdminTab::Users);
        panel.select_tab(AdminTab::Orders);
        assert_eq!(panel.active_tab(), AdminTab::Orders);
    }

    #[tokio::test(start_paused = true)]
    async fn test_decide_listing_posts_notice_that_expires() {
        let moderator = admin();
        let mut panel = panel();

        let notice = panel
            .decide_listing(&moderator, 1, Decision::Reject)
            .await
            .unwrap();
        assert_eq!(notice.message, "Item rejected successfully!");
        assert_eq!(panel.notices().current().await.unwrap().id, notice.id);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(panel.notices().current().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_decision_posts_no_notice() {
        let moderator = admin();
        let mut panel = panel();
        let result = panel.decide_user(&moderator, 2, Decision::Approve).await;
        assert!(result.is_err());
        assert!(panel.notices().current().await.is_none());
    }
}
