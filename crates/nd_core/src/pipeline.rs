use serde::Serialize;

use crate::types::{Article, Post, PublishedPost};

/// Kanban columns, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    New,
    Draft,
    Published,
}

impl PipelineStage {
    pub const ORDER: [PipelineStage; 3] = [PipelineStage::New, PipelineStage::Draft, PipelineStage::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::New => "new",
            PipelineStage::Draft => "draft",
            PipelineStage::Published => "published",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PipelineStage::New => "New Articles",
            PipelineStage::Draft => "Ready to Publish",
            PipelineStage::Published => "Published",
        }
    }

    pub fn badge(&self, count: usize) -> String {
        match self {
            PipelineStage::New => format!("{} items", count),
            PipelineStage::Draft => format!("{} drafts", count),
            PipelineStage::Published => format!("{} today", count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanColumn<T> {
    pub stage: PipelineStage,
    pub title: &'static str,
    pub badge: String,
    pub items: Vec<T>,
}

impl<T> KanbanColumn<T> {
    pub fn new(stage: PipelineStage, items: Vec<T>) -> Self {
        Self {
            stage,
            title: stage.title(),
            badge: stage.badge(items.len()),
            items,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub new_articles: usize,
    pub ready_to_publish: usize,
    pub published_today: usize,
    pub processing_success: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBoard {
    pub stats: PipelineStats,
    pub new: KanbanColumn<Article>,
    pub ready: KanbanColumn<Post>,
    pub published: KanbanColumn<PublishedPost>,
}

impl ContentBoard {
    pub fn new(
        articles: Vec<Article>,
        posts: Vec<Post>,
        published: Vec<PublishedPost>,
        processing_success: u8,
    ) -> Self {
        let stats = PipelineStats {
            new_articles: articles.len(),
            ready_to_publish: posts.len(),
            published_today: published.len(),
            processing_success,
        };
        Self {
            stats,
            new: KanbanColumn::new(PipelineStage::New, articles),
            ready: KanbanColumn::new(PipelineStage::Draft, posts),
            published: KanbanColumn::new(PipelineStage::Published, published),
        }
    }
}

/// How a draft will look once posted to the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPreview {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

impl From<&Post> for PostPreview {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            image: post.image.clone(),
        }
    }
}

/// Requests the console accepts on a draft without acting on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostAction {
    Publish,
    Edit,
    Delete,
}

impl PostAction {
    pub fn verb(&self) -> &'static str {
        match self {
            PostAction::Publish => "Publishing",
            PostAction::Edit => "Editing",
            PostAction::Delete => "Deleting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArticleStatus, Engagement};

    fn article(id: u64) -> Article {
        Article {
            id,
            title: format!("Article {}", id),
            source: "TechCrunch".to_string(),
            status: ArticleStatus::New,
            timestamp: "5 minutes ago".to_string(),
            content: "...".to_string(),
        }
    }

    #[test]
    fn test_board_badges_and_stats() {
        let published = vec![PublishedPost {
            id: 1,
            title: "Quantum".to_string(),
            published_at: "2 hours ago".to_string(),
            engagement: Engagement { views: 1, likes: 2, shares: 3 },
        }];
        let board = ContentBoard::new(vec![article(1), article(2), article(3)], vec![], published, 94);

        assert_eq!(board.new.badge, "3 items");
        assert_eq!(board.ready.badge, "0 drafts");
        assert_eq!(board.published.badge, "1 today");
        assert_eq!(board.new.title, "New Articles");
        assert_eq!(board.stats.new_articles, 3);
        assert_eq!(board.stats.ready_to_publish, 0);
        assert_eq!(board.stats.published_today, 1);
        assert_eq!(board.stats.processing_success, 94);
    }

    #[test]
    fn test_stage_order_follows_pipeline() {
        let titles: Vec<_> = PipelineStage::ORDER.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["New Articles", "Ready to Publish", "Published"]);
    }
}
