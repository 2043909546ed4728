use async_trait::async_trait;
use nd_core::dashboard::{ActivityEntry, ServiceStatus, StatTile};
use nd_core::{
    AiSettings, Article, ContentStore, DashboardFeed, Error, GeneralSettings, ItemId, NewScoringRule, Post,
    PublishedPost, Result, RuleId, ScheduleSettings, ScoringRule, Settings, SettingsStore, Source, SourceDraft,
    SourceId, SourceStore,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::{seed, StorageBackend};

/// Console state behind the lock. Ids are handed out from per-collection
/// counters and never reused.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    sources: Vec<Source>,
    articles: Vec<Article>,
    posts: Vec<Post>,
    published: Vec<PublishedPost>,
    rules: Vec<ScoringRule>,
    settings: Settings,
    stats: Vec<StatTile>,
    services: Vec<ServiceStatus>,
    activity: Vec<ActivityEntry>,
    processing_success: u8,
    next_source_id: SourceId,
    next_rule_id: RuleId,
}

impl MemoryStore {
    pub fn seeded() -> Result<Self> {
        let sources = seed::sources();
        let rules = seed::scoring_rules();
        Ok(Self {
            next_source_id: sources.iter().map(|s| s.id).max().unwrap_or(0) + 1,
            next_rule_id: rules.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            sources,
            articles: seed::articles(),
            posts: seed::posts(),
            published: seed::published(),
            rules,
            settings: seed::settings()?,
            stats: seed::stats(),
            services: seed::services(),
            activity: seed::recent_activity(),
            processing_success: seed::PROCESSING_SUCCESS,
        })
    }

    fn source_mut(&mut self, id: SourceId) -> Result<&mut Source> {
        self.sources
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("source {}", id)))
    }

    pub fn add_source(&mut self, draft: SourceDraft) -> Result<Source> {
        let draft = draft.validate()?;
        let source = Source::from_draft(self.next_source_id, draft);
        self.next_source_id += 1;
        self.sources.push(source.clone());
        Ok(source)
    }

    pub fn update_source(&mut self, id: SourceId, draft: SourceDraft) -> Result<Source> {
        let draft = draft.validate()?;
        let source = self.source_mut(id)?;
        source.apply(draft);
        Ok(source.clone())
    }

    pub fn toggle_source(&mut self, id: SourceId) -> Result<Source> {
        let source = self.source_mut(id)?;
        source.is_active = !source.is_active;
        Ok(source.clone())
    }

    pub fn delete_source(&mut self, id: SourceId) -> Result<Source> {
        let index = self
            .sources
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("source {}", id)))?;
        Ok(self.sources.remove(index))
    }

    pub fn add_rule(&mut self, rule: NewScoringRule) -> Result<ScoringRule> {
        let rule = rule.validate()?;
        let rule = ScoringRule {
            id: self.next_rule_id,
            keyword: rule.keyword,
            weight: rule.weight,
        };
        self.next_rule_id += 1;
        self.rules.push(rule.clone());
        Ok(rule)
    }

    pub fn delete_rule(&mut self, id: RuleId) -> Result<ScoringRule> {
        let index = self
            .rules
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("scoring rule {}", id)))?;
        Ok(self.rules.remove(index))
    }
}

pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    fn name() -> &'static str {
        "memory"
    }

    fn get_error_message() -> &'static str {
        "Memory storage should always be available"
    }

    async fn new() -> Result<Self> {
        let store = MemoryStore::seeded()?;
        info!(
            "🌱 Seeded memory storage with {} sources, {} drafts and {} scoring rules",
            store.sources.len(),
            store.posts.len(),
            store.rules.len()
        );
        Ok(Self::with_store(store))
    }
}

#[async_trait]
impl SourceStore for MemoryStorage {
    async fn list_sources(&self) -> Result<Vec<Source>> {
        Ok(self.store.read().await.sources.clone())
    }

    async fn get_source(&self, id: SourceId) -> Result<Source> {
        let store = self.store.read().await;
        store
            .sources
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("source {}", id)))
    }

    async fn add_source(&self, draft: SourceDraft) -> Result<Source> {
        let mut store = self.store.write().await;
        store.add_source(draft)
    }

    async fn update_source(&self, id: SourceId, draft: SourceDraft) -> Result<Source> {
        let mut store = self.store.write().await;
        store.update_source(id, draft)
    }

    async fn toggle_source(&self, id: SourceId) -> Result<Source> {
        let mut store = self.store.write().await;
        store.toggle_source(id)
    }

    async fn delete_source(&self, id: SourceId) -> Result<Source> {
        let mut store = self.store.write().await;
        store.delete_source(id)
    }
}

#[async_trait]
impl ContentStore for MemoryStorage {
    async fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.store.read().await.articles.clone())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.store.read().await.posts.clone())
    }

    async fn list_published(&self) -> Result<Vec<PublishedPost>> {
        Ok(self.store.read().await.published.clone())
    }

    async fn get_post(&self, id: ItemId) -> Result<Post> {
        let store = self.store.read().await;
        store
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("post {}", id)))
    }

    async fn processing_success(&self) -> Result<u8> {
        Ok(self.store.read().await.processing_success)
    }
}

#[async_trait]
impl SettingsStore for MemoryStorage {
    async fn settings(&self) -> Result<Settings> {
        Ok(self.store.read().await.settings.clone())
    }

    async fn save_general(&self, general: GeneralSettings) -> Result<Settings> {
        let mut store = self.store.write().await;
        store.settings.general = general;
        Ok(store.settings.clone())
    }

    async fn save_ai(&self, ai: AiSettings) -> Result<Settings> {
        let mut store = self.store.write().await;
        store.settings.ai = ai;
        Ok(store.settings.clone())
    }

    async fn save_schedule(&self, schedule: ScheduleSettings) -> Result<Settings> {
        let mut store = self.store.write().await;
        store.settings.schedule = schedule;
        Ok(store.settings.clone())
    }

    async fn list_rules(&self) -> Result<Vec<ScoringRule>> {
        Ok(self.store.read().await.rules.clone())
    }

    async fn add_rule(&self, rule: NewScoringRule) -> Result<ScoringRule> {
        let mut store = self.store.write().await;
        store.add_rule(rule)
    }

    async fn delete_rule(&self, id: RuleId) -> Result<ScoringRule> {
        let mut store = self.store.write().await;
        store.delete_rule(id)
    }
}

#[async_trait]
impl DashboardFeed for MemoryStorage {
    async fn stats(&self) -> Result<Vec<StatTile>> {
        Ok(self.store.read().await.stats.clone())
    }

    async fn services(&self) -> Result<Vec<ServiceStatus>> {
        Ok(self.store.read().await.services.clone())
    }

    async fn recent_activity(&self) -> Result<Vec<ActivityEntry>> {
        Ok(self.store.read().await.activity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::{LlmProvider, SourceKind};

    async fn storage() -> MemoryStorage {
        <MemoryStorage as StorageBackend>::new().await.unwrap()
    }

    #[tokio::test]
    async fn test_seeded_storage() {
        let storage = storage().await;
        assert_eq!(storage.list_sources().await.unwrap().len(), 4);
        assert_eq!(storage.list_articles().await.unwrap().len(), 2);
        assert_eq!(storage.list_posts().await.unwrap().len(), 2);
        assert_eq!(storage.list_published().await.unwrap().len(), 2);
        assert_eq!(storage.list_rules().await.unwrap().len(), 5);
        assert_eq!(storage.processing_success().await.unwrap(), 94);
    }

    #[tokio::test]
    async fn test_toggle_flips_only_that_source() {
        let storage = storage().await;
        let before = storage.list_sources().await.unwrap();

        let toggled = storage.toggle_source(3).await.unwrap();
        assert!(toggled.is_active);

        let after = storage.list_sources().await.unwrap();
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == 3 {
                assert_eq!(old.is_active, !new.is_active);
                assert_eq!(Source { is_active: old.is_active, ..new.clone() }, *old);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn test_add_source_appends_one_active_record() {
        let storage = storage().await;
        let before = storage.list_sources().await.unwrap();

        let added = storage
            .add_source(SourceDraft::new("Ars Technica", "https://arstechnica.com/feed/", SourceKind::Rss))
            .await
            .unwrap();

        let after = storage.list_sources().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&added));
        assert!(added.is_active);
        assert_eq!(added.article_count, 0);
        assert!(before.iter().all(|s| s.id != added.id));
    }

    #[tokio::test]
    async fn test_add_source_requires_fields() {
        let storage = storage().await;
        let result = storage.add_source(SourceDraft::new("", "https://x", SourceKind::Rss)).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(storage.list_sources().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_source_removes_exactly_one() {
        let storage = storage().await;
        let removed = storage.delete_source(2).await.unwrap();
        assert_eq!(removed.name, "AI News Channel");

        let ids: Vec<_> = storage.list_sources().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        assert!(matches!(storage.delete_source(2).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let storage = storage().await;
        let first = storage
            .add_source(SourceDraft::new("A", "https://a", SourceKind::Website))
            .await
            .unwrap();
        storage.delete_source(first.id).await.unwrap();
        let second = storage
            .add_source(SourceDraft::new("B", "https://b", SourceKind::Website))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_update_source_merges_fields() {
        let storage = storage().await;
        let updated = storage
            .update_source(1, SourceDraft::new("TC", "https://techcrunch.com/rss", SourceKind::Website))
            .await
            .unwrap();
        assert_eq!(updated.name, "TC");
        assert_eq!(updated.article_count, 156);
        assert!(updated.is_active);
        assert_eq!(storage.get_source(1).await.unwrap(), updated);

        let missing = storage.update_source(99, SourceDraft::new("x", "y", SourceKind::Rss)).await;
        assert!(matches!(missing, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_rule_keeps_values_and_unique_id() {
        let storage = storage().await;
        let rule = storage
            .add_rule(NewScoringRule { keyword: "quantum computing".to_string(), weight: 5 })
            .await
            .unwrap();
        assert_eq!(rule.keyword, "quantum computing");
        assert_eq!(rule.weight, 5);

        let rules = storage.list_rules().await.unwrap();
        assert_eq!(rules.len(), 6);
        assert_eq!(rules.iter().filter(|r| r.id == rule.id).count(), 1);
    }

    #[tokio::test]
    async fn test_delete_rule() {
        let storage = storage().await;
        let removed = storage.delete_rule(5).await.unwrap();
        assert_eq!(removed.keyword, "robotics");
        assert!(storage.list_rules().await.unwrap().iter().all(|r| r.id != 5));
        assert!(storage.delete_rule(5).await.is_err());
    }

    #[tokio::test]
    async fn test_saving_a_section_leaves_the_others() {
        let storage = storage().await;
        let before = storage.settings().await.unwrap();

        let mut ai = before.ai.clone();
        ai.primary_llm = LlmProvider::Claude;
        let after = storage.save_ai(ai).await.unwrap();

        assert_eq!(after.ai.primary_llm, LlmProvider::Claude);
        assert_eq!(after.general, before.general);
        assert_eq!(after.schedule, before.schedule);
        assert_eq!(storage.settings().await.unwrap(), after);
    }

    #[tokio::test]
    async fn test_get_post() {
        let storage = storage().await;
        assert!(storage.get_post(1).await.unwrap().title.contains("AI Breakthrough"));
        assert!(matches!(storage.get_post(7).await, Err(Error::NotFound(_))));
    }
}
