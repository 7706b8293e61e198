use dotenvy::dotenv;
use rewear_moderation::{
    config,
    core::{panel::AdminPanel, seed},
    entities::{Decision, StatusFilter},
    errors::Result,
    session::{Role, Session},
};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the moderation configuration
    let app_config = config::load_app_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(
        "Page size {}, notices shown for {}s",
        app_config.moderation.page_size, app_config.moderation.notice_duration_secs
    );

    // 4. Snapshot the reference data set
    let now = chrono::Utc::now();
    let mut panel = AdminPanel::new(
        seed::reference_users(now),
        seed::reference_items(now),
        &app_config.moderation,
    )?;

    let session = Session::new("admin", "admin@rewear.local", Role::Admin);
    run_review(&mut panel, &session).await
}

#[instrument(skip(panel, session), fields(moderator = %session.username))]
async fn run_review(panel: &mut AdminPanel, session: &Session) -> Result<()> {
    let moderator = session.moderator()?;

    let counts = panel.users().counts();
    info!(
        "Users: {} pending, {} approved, {} rejected",
        counts.pending, counts.approved, counts.rejected
    );

    panel.users_mut().filter_status(StatusFilter::Pending);
    let page = panel.users().view();
    info!(
        "Pending users page {}/{} ({} matches)",
        page.page, page.total_pages, page.total_matches
    );
    for user in &page.items {
        info!("  #{} {} <{}>", user.id, user.username, user.email);
    }

    let Some(first_id) = page.items.first().map(|user| user.id) else {
        info!("No users found matching your criteria.");
        return Ok(());
    };

    let notice = panel
        .decide_user(&moderator, first_id, Decision::Approve)
        .await?;
    info!("Shown: {}", notice.message);

    // A second decision on the same user is refused and leaves the data as is
    if let Err(e) = panel
        .decide_user(&moderator, first_id, Decision::Reject)
        .await
    {
        info!("Refused: {}", e);
    }

    panel.listings_mut().search("jacket");
    let jackets = panel.listings().view();
    info!("{} listings match 'jacket'", jackets.total_matches);

    tokio::time::sleep(panel.notices().display_for() + Duration::from_millis(100)).await;
    if panel.notices().current().await.is_none() {
        info!("Notice cleared");
    }
    Ok(())
}
