//! Mock records the console boots with. Everything here is placeholder data.

use nd_core::dashboard::{ActivityEntry, ActivityStatus, ServiceState, ServiceStatus, StatTile, Trend};
use nd_core::schedule::{PublishTime, ScraperInterval};
use nd_core::{
    AiSettings, Article, ArticleStatus, Engagement, GeneralSettings, LlmProvider, Post, PostStatus, PublishedPost,
    Result, ScheduleSettings, ScoringRule, Settings, Source, SourceKind,
};

pub const PROCESSING_SUCCESS: u8 = 94;

const DIGEST_PROMPT: &str = "You are an AI news aggregator. Transform the following articles into engaging, informative posts for a Telegram channel focused on AI and technology news.

Guidelines:
- Use emojis to make posts visually appealing
- Keep posts concise but informative (max 500 characters)
- Include relevant hashtags
- Maintain a professional yet engaging tone
- Focus on the most important aspects of each story";

const IMAGE_PROMPT: &str = "Create a modern, tech-focused illustration for this AI/technology news article. Use a clean, professional style with blue and purple gradients. The image should be visually appealing for social media.";

fn source(id: u64, name: &str, url: &str, kind: SourceKind, is_active: bool, last_sync: &str, article_count: u32) -> Source {
    Source {
        id,
        name: name.to_string(),
        url: url.to_string(),
        kind,
        is_active,
        last_sync: last_sync.to_string(),
        article_count,
    }
}

pub fn sources() -> Vec<Source> {
    vec![
        source(1, "TechCrunch", "https://techcrunch.com/feed/", SourceKind::Rss, true, "2 minutes ago", 156),
        source(2, "AI News Channel", "https://t.me/ainewschannel", SourceKind::Telegram, true, "5 minutes ago", 89),
        source(
            3,
            "BBC Technology",
            "https://feeds.bbci.co.uk/news/technology/rss.xml",
            SourceKind::Rss,
            false,
            "2 hours ago",
            234,
        ),
        source(4, "The Verge", "https://www.theverge.com/rss/index.xml", SourceKind::Rss, true, "10 minutes ago", 78),
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "OpenAI Announces GPT-5 with Revolutionary Capabilities".to_string(),
            source: "TechCrunch".to_string(),
            status: ArticleStatus::New,
            timestamp: "5 minutes ago".to_string(),
            content: "OpenAI has unveiled GPT-5, marking a significant leap forward in artificial intelligence..."
                .to_string(),
        },
        Article {
            id: 2,
            title: "Meta's New AR Glasses Hit the Market".to_string(),
            source: "The Verge".to_string(),
            status: ArticleStatus::New,
            timestamp: "12 minutes ago".to_string(),
            content: "Meta has officially launched their highly anticipated AR glasses, promising to revolutionize..."
                .to_string(),
        },
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "🤖 AI Breakthrough: New Language Model Achieves Human-Level Performance".to_string(),
            content: "Researchers have developed a revolutionary AI system that demonstrates unprecedented capabilities in natural language understanding and generation.

The new model shows remarkable improvements in:
• Complex reasoning tasks (+40% accuracy)
• Multilingual comprehension (95+ languages)
• Creative content generation
• Code writing and debugging

This breakthrough could transform industries from education to healthcare, opening new possibilities for human-AI collaboration.

#AI #MachineLearning #Technology #Innovation"
                .to_string(),
            source: "AI Research Labs".to_string(),
            status: PostStatus::Draft,
            timestamp: "30 minutes ago".to_string(),
            scheduled_for: "Today, 14:00".to_string(),
            image: Some("https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=400&q=80".to_string()),
        },
        Post {
            id: 2,
            title: "🚀 Space Tech Update: Mars Mission Gets Major Funding Boost".to_string(),
            content: "Breaking: NASA announces $2.5B additional funding for the upcoming Mars mission, accelerating timeline by 18 months.

Key developments:
• Advanced propulsion systems ready for testing
• New life detection instruments deployed
• International partnerships strengthened
• Crew selection process begins next month

This historic mission aims to establish the first permanent human presence on Mars by 2030.

#Space #Mars #NASA #Exploration #Future"
                .to_string(),
            source: "Space News Network".to_string(),
            status: PostStatus::Draft,
            timestamp: "1 hour ago".to_string(),
            scheduled_for: "Tomorrow, 09:00".to_string(),
            image: Some("https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=400&q=80".to_string()),
        },
    ]
}

pub fn published() -> Vec<PublishedPost> {
    vec![
        PublishedPost {
            id: 1,
            title: "🔬 Quantum Computing Milestone: 1000-Qubit Processor Achieved".to_string(),
            published_at: "2 hours ago".to_string(),
            engagement: Engagement { views: 1250, likes: 89, shares: 23 },
        },
        PublishedPost {
            id: 2,
            title: "🌱 Green Tech Revolution: Solar Efficiency Breaks 30% Barrier".to_string(),
            published_at: "6 hours ago".to_string(),
            engagement: Engagement { views: 2100, likes: 156, shares: 45 },
        },
    ]
}

pub fn scoring_rules() -> Vec<ScoringRule> {
    [
        ("artificial intelligence", 10),
        ("machine learning", 8),
        ("neural network", 7),
        ("deep learning", 9),
        ("robotics", 6),
    ]
    .into_iter()
    .zip(1..)
    .map(|((keyword, weight), id)| ScoringRule {
        id,
        keyword: keyword.to_string(),
        weight,
    })
    .collect()
}

pub fn settings() -> Result<Settings> {
    Ok(Settings {
        general: GeneralSettings {
            telegram_token: "1234567890:ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
            channel_id: "@ai_news_channel".to_string(),
            openai_key: "sk-...".to_string(),
            gemini_key: "AIza...".to_string(),
            stability_key: "sk-...".to_string(),
        },
        ai: AiSettings {
            primary_llm: LlmProvider::OpenAi,
            fallback_llm: LlmProvider::Gemini,
            digest_prompt: DIGEST_PROMPT.to_string(),
            image_prompt: IMAGE_PROMPT.to_string(),
        },
        schedule: ScheduleSettings {
            scraper_interval: ScraperInterval::try_from(2u8)?,
            publish_time: "09:00".parse::<PublishTime>()?,
        },
    })
}

fn stat(title: &str, value: &str, change: &str, trend: Trend) -> StatTile {
    StatTile {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    }
}

pub fn stats() -> Vec<StatTile> {
    vec![
        stat("Posts Generated Today", "24", "+12%", Trend::Up),
        stat("Active Sources", "15", "+2", Trend::Up),
        stat("Errors (24h)", "2", "-5", Trend::Down),
        stat("Processing Time", "1.2s", "-0.3s", Trend::Down),
    ]
}

pub fn services() -> Vec<ServiceStatus> {
    [
        ("AI Content Generator", ServiceState::Online, "2 minutes ago"),
        ("News Scraper", ServiceState::Online, "30 seconds ago"),
        ("Content Publisher", ServiceState::Warning, "15 minutes ago"),
        ("Database", ServiceState::Online, "1 minute ago"),
    ]
    .into_iter()
    .map(|(name, status, last_active)| ServiceStatus {
        name: name.to_string(),
        status,
        last_active: last_active.to_string(),
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    [
        ("Generated new post", "TechCrunch", "2 min ago", ActivityStatus::Success),
        ("Scraped articles", "Multiple sources", "5 min ago", ActivityStatus::Success),
        ("Published post", "Telegram Channel", "8 min ago", ActivityStatus::Success),
        ("Failed to process", "BBC News", "12 min ago", ActivityStatus::Error),
        ("Updated source config", "Settings", "1 hour ago", ActivityStatus::Info),
    ]
    .into_iter()
    .map(|(action, source, time, status)| ActivityEntry {
        action: action.to_string(),
        source: source.to_string(),
        time: time.to_string(),
        status,
    })
    .collect()
}
