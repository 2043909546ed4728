use async_trait::async_trait;

use crate::dashboard::{ActivityEntry, ServiceStatus, StatTile};
use crate::types::{
    AiSettings, Article, GeneralSettings, ItemId, NewScoringRule, Post, PublishedPost, RuleId, ScheduleSettings,
    ScoringRule, Settings, Source, SourceDraft, SourceId,
};
use crate::Result;

#[async_trait]
pub trait SourceStore: Send + Sync {
    /// All sources in insertion order
    async fn list_sources(&self) -> Result<Vec<Source>>;

    async fn get_source(&self, id: SourceId) -> Result<Source>;

    /// Append a new source with a fresh id
    async fn add_source(&self, draft: SourceDraft) -> Result<Source>;

    async fn update_source(&self, id: SourceId, draft: SourceDraft) -> Result<Source>;

    /// Flip the active flag of one source
    async fn toggle_source(&self, id: SourceId) -> Result<Source>;

    /// Remove one source, returning what was removed
    async fn delete_source(&self, id: SourceId) -> Result<Source>;
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_articles(&self) -> Result<Vec<Article>>;

    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn list_published(&self) -> Result<Vec<PublishedPost>>;

    async fn get_post(&self, id: ItemId) -> Result<Post>;

    /// Share of processed articles that made it through, in percent
    async fn processing_success(&self) -> Result<u8>;
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn settings(&self) -> Result<Settings>;

    async fn save_general(&self, general: GeneralSettings) -> Result<Settings>;

    async fn save_ai(&self, ai: AiSettings) -> Result<Settings>;

    async fn save_schedule(&self, schedule: ScheduleSettings) -> Result<Settings>;

    async fn list_rules(&self) -> Result<Vec<ScoringRule>>;

    async fn add_rule(&self, rule: NewScoringRule) -> Result<ScoringRule>;

    async fn delete_rule(&self, id: RuleId) -> Result<ScoringRule>;
}

#[async_trait]
pub trait DashboardFeed: Send + Sync {
    async fn stats(&self) -> Result<Vec<StatTile>>;

    async fn services(&self) -> Result<Vec<ServiceStatus>>;

    async fn recent_activity(&self) -> Result<Vec<ActivityEntry>>;
}

/// Everything the console reads and writes.
pub trait ConsoleStorage: SourceStore + ContentStore + SettingsStore + DashboardFeed {}

impl<T> ConsoleStorage for T where T: SourceStore + ContentStore + SettingsStore + DashboardFeed {}
