use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schedule::{PublishTime, ScraperInterval};
use crate::{Error, Result};

pub type SourceId = u64;
pub type ItemId = u64;
pub type RuleId = u64;

/// How a source is ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Rss,
    Telegram,
    Website,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Rss, SourceKind::Telegram, SourceKind::Website];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Rss => "rss",
            SourceKind::Telegram => "telegram",
            SourceKind::Website => "website",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Rss => "RSS Feed",
            SourceKind::Telegram => "Telegram Channel",
            SourceKind::Website => "Website Scraper",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rss" => Ok(SourceKind::Rss),
            "telegram" => Ok(SourceKind::Telegram),
            "website" => Ok(SourceKind::Website),
            other => Err(Error::Validation(format!("Unknown source type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub url: String,
    pub kind: SourceKind,
    pub is_active: bool,
    pub last_sync: String,
    pub article_count: u32,
}

impl Source {
    /// A freshly added source starts active and has never synced.
    pub fn from_draft(id: SourceId, draft: SourceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            url: draft.url,
            kind: draft.kind,
            is_active: true,
            last_sync: "Never".to_string(),
            article_count: 0,
        }
    }

    /// Merge edited form fields, keeping identity, activity and counters.
    pub fn apply(&mut self, draft: SourceDraft) {
        self.name = draft.name;
        self.url = draft.url;
        self.kind = draft.kind;
    }
}

/// Fields captured by the add/edit source dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDraft {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub kind: SourceKind,
}

impl SourceDraft {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }

    /// Trims the fields and enforces the required ones.
    pub fn validate(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        let url = self.url.trim().to_string();
        if name.is_empty() {
            return Err(Error::required("Source name"));
        }
        if url.is_empty() {
            return Err(Error::required("URL"));
        }
        Ok(Self { name, url, kind: self.kind })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceStats {
    pub total: usize,
    pub active: usize,
    pub articles: u64,
}

impl SourceStats {
    pub fn from_sources(sources: &[Source]) -> Self {
        Self {
            total: sources.len(),
            active: sources.iter().filter(|s| s.is_active).count(),
            articles: sources.iter().map(|s| u64::from(s.article_count)).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ItemId,
    pub title: String,
    pub source: String,
    pub status: ArticleStatus,
    pub timestamp: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    pub source: String,
    pub status: PostStatus,
    pub timestamp: String,
    pub scheduled_for: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPost {
    pub id: ItemId,
    pub title: String,
    pub published_at: String,
    pub engagement: Engagement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub id: RuleId,
    pub keyword: String,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScoringRule {
    pub keyword: String,
    pub weight: i64,
}

impl NewScoringRule {
    pub fn validate(self) -> Result<Self> {
        let keyword = self.keyword.trim().to_string();
        if keyword.is_empty() {
            return Err(Error::required("Keyword"));
        }
        Ok(Self { keyword, weight: self.weight })
    }
}

/// Raw scoring rule inputs as typed into the form; the weight is still text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringRuleForm {
    pub keyword: String,
    pub weight: String,
}

impl TryFrom<ScoringRuleForm> for NewScoringRule {
    type Error = Error;

    fn try_from(form: ScoringRuleForm) -> Result<Self> {
        let weight = form.weight.trim();
        if weight.is_empty() {
            return Err(Error::required("Weight"));
        }
        let weight = weight
            .parse::<i64>()
            .map_err(|_| Error::Validation(format!("Weight must be an integer, got {:?}", weight)))?;
        NewScoringRule { keyword: form.keyword, weight }.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "claude")]
    Claude,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 3] = [LlmProvider::OpenAi, LlmProvider::Gemini, LlmProvider::Claude];

    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Gemini => "gemini",
            LlmProvider::Claude => "claude",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "OpenAI GPT-4",
            LlmProvider::Gemini => "Google Gemini Pro",
            LlmProvider::Claude => "Anthropic Claude",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LlmProvider::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| Error::Validation(format!("Unknown LLM provider: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub telegram_token: String,
    pub channel_id: String,
    pub openai_key: String,
    pub gemini_key: String,
    pub stability_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSettings {
    pub primary_llm: LlmProvider,
    pub fallback_llm: LlmProvider,
    pub digest_prompt: String,
    pub image_prompt: String,
}

/// The AI tab as the browser posts it; providers arrive as raw select values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiSettingsForm {
    #[serde(default)]
    pub primary_llm: String,
    #[serde(default)]
    pub fallback_llm: String,
    #[serde(default)]
    pub digest_prompt: String,
    #[serde(default)]
    pub image_prompt: String,
}

impl TryFrom<AiSettingsForm> for AiSettings {
    type Error = Error;

    fn try_from(form: AiSettingsForm) -> Result<Self> {
        Ok(AiSettings {
            primary_llm: form.primary_llm.parse()?,
            fallback_llm: form.fallback_llm.parse()?,
            digest_prompt: form.digest_prompt,
            image_prompt: form.image_prompt,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub scraper_interval: ScraperInterval,
    pub publish_time: PublishTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub ai: AiSettings,
    pub schedule: ScheduleSettings,
}
