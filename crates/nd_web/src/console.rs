//! Screen assembly shared by the HTML pages and the JSON API.

use nd_core::dashboard::DashboardSummary;
use nd_core::pipeline::{ContentBoard, PostAction};
use nd_core::{ConsoleStorage, ContentStore, DashboardFeed, ItemId, Notice, Post, Result};
use serde::Serialize;
use tracing::info;

pub async fn dashboard(storage: &dyn ConsoleStorage) -> Result<DashboardSummary> {
    Ok(DashboardSummary {
        stats: storage.stats().await?,
        services: storage.services().await?,
        activity: storage.recent_activity().await?,
        next_post: storage.list_posts().await?.into_iter().next(),
    })
}

pub async fn content_board(storage: &dyn ConsoleStorage) -> Result<ContentBoard> {
    Ok(ContentBoard::new(
        storage.list_articles().await?,
        storage.list_posts().await?,
        storage.list_published().await?,
        storage.processing_success().await?,
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionAccepted {
    pub action: PostAction,
    pub post_id: ItemId,
    pub notice: Notice,
}

/// Publishing, editing and deleting drafts are recorded but not carried out.
pub async fn request_post_action(storage: &dyn ConsoleStorage, id: ItemId, action: PostAction) -> Result<ActionAccepted> {
    let post: Post = storage.get_post(id).await?;
    info!("📮 {} post {} ({})", action.verb(), post.id, post.title);
    Ok(ActionAccepted {
        action,
        post_id: post.id,
        notice: Notice::new(
            format!("{} requested", action.verb()),
            format!("\"{}\" was queued; nothing has changed yet.", post.title),
        ),
    })
}

pub async fn request_processing(storage: &dyn ConsoleStorage) -> Result<Notice> {
    let pending = storage.list_articles().await?.len();
    info!("⚙️ Force processing requested for {} new articles", pending);
    Ok(Notice::new(
        "Processing requested",
        format!("{} new articles were queued for processing.", pending),
    ))
}
