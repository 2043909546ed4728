use nd_core::schedule::{ScheduleSummary, ScraperInterval};
use nd_core::{LlmProvider, ScoringRule, Settings};
use serde::Deserialize;

use super::{escape, page_header, post_button};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    General,
    Ai,
    Scoring,
    Schedule,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [SettingsTab::General, SettingsTab::Ai, SettingsTab::Scoring, SettingsTab::Schedule];

    pub fn slug(&self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::Ai => "ai",
            SettingsTab::Scoring => "scoring",
            SettingsTab::Schedule => "schedule",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Ai => "AI & Prompts",
            SettingsTab::Scoring => "Scoring",
            SettingsTab::Schedule => "Schedule",
        }
    }
}

fn text_input(id: &str, label: &str, value: &str, secret: bool) -> String {
    format!(
        "<label for=\"{id}\">{label}</label><input id=\"{id}\" name=\"{id}\" type=\"{kind}\" value=\"{value}\">\n",
        id = id,
        label = escape(label),
        kind = if secret { "password" } else { "text" },
        value = escape(value)
    )
}

fn llm_select(id: &str, label: &str, selected: LlmProvider) -> String {
    let options: String = LlmProvider::ALL
        .iter()
        .map(|p| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                p.as_str(),
                if *p == selected { " selected" } else { "" },
                p.label()
            )
        })
        .collect();
    format!("<label for=\"{id}\">{label}</label><select id=\"{id}\" name=\"{id}\">{options}</select>\n")
}

fn general_tab(settings: &Settings) -> String {
    let g = &settings.general;
    format!(
        "<h2>General Configuration</h2><p>Configure API keys and basic system settings.</p>
<form method=\"post\" action=\"/settings/general\">
{}{}{}{}{}<button type=\"submit\">Save General Settings</button></form>",
        text_input("telegram_token", "Telegram Bot Token", &g.telegram_token, true),
        text_input("channel_id", "Telegram Channel ID", &g.channel_id, false),
        text_input("openai_key", "OpenAI API Key", &g.openai_key, true),
        text_input("gemini_key", "Gemini API Key", &g.gemini_key, true),
        text_input("stability_key", "Stability AI Key", &g.stability_key, true),
    )
}

fn ai_tab(settings: &Settings) -> String {
    let ai = &settings.ai;
    format!(
        "<h2>AI Model Configuration</h2><p>Configure AI models and customize prompts for content generation.</p>
<form method=\"post\" action=\"/settings/ai\">
{}{}<label for=\"digest_prompt\">Content Generation Prompt</label><textarea id=\"digest_prompt\" name=\"digest_prompt\" rows=\"8\">{}</textarea>
<label for=\"image_prompt\">Image Generation Prompt</label><textarea id=\"image_prompt\" name=\"image_prompt\" rows=\"5\">{}</textarea>
<button type=\"submit\">Save AI Settings</button></form>",
        llm_select("primary_llm", "Primary LLM", ai.primary_llm),
        llm_select("fallback_llm", "Fallback LLM", ai.fallback_llm),
        escape(&ai.digest_prompt),
        escape(&ai.image_prompt),
    )
}

fn scoring_tab(rules: &[ScoringRule]) -> String {
    let mut html = String::from(
        "<h2>Content Scoring Rules</h2><p>Define keywords and their weights to prioritize content based on relevance.</p>
<form method=\"post\" action=\"/settings/scoring\">
<input name=\"keyword\" placeholder=\"Keyword (e.g., artificial intelligence)\">
<input name=\"weight\" type=\"number\" placeholder=\"Weight\">
<button type=\"submit\">Add Rule</button></form>\n<ul class=\"rules\">\n",
    );
    for rule in rules {
        html.push_str(&format!(
            "<li id=\"rule-{}\">{} <span class=\"badge\">Weight: {}</span> {}</li>\n",
            rule.id,
            escape(&rule.keyword),
            rule.weight,
            post_button(&format!("/settings/scoring/{}/delete", rule.id), "Delete")
        ));
    }
    html.push_str("</ul>");
    html
}

fn schedule_tab(settings: &Settings, summary: &ScheduleSummary) -> String {
    let schedule = &settings.schedule;
    let options: String = ScraperInterval::CHOICES
        .iter()
        .filter_map(|hours| ScraperInterval::try_from(*hours).ok())
        .map(|interval| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                interval.hours(),
                if interval == schedule.scraper_interval { " selected" } else { "" },
                interval.label()
            )
        })
        .collect();
    format!(
        "<h2>Automation Schedule</h2><p>Configure when your system should automatically scrape and publish content.</p>
<form method=\"post\" action=\"/settings/schedule\">
<label for=\"scraper_interval\">Scraper Interval (hours)</label><select id=\"scraper_interval\" name=\"scraper_interval\">{}</select>
<label for=\"publish_time\">Daily Publish Time</label><input id=\"publish_time\" name=\"publish_time\" type=\"time\" value=\"{}\">
<ul class=\"summary\"><li>Content scraping: {}</li><li>Next scrape: {}</li><li>Daily publication: {}</li><li>Next publication: {}</li></ul>
<button type=\"submit\">Save Schedule</button></form>",
        options,
        schedule.publish_time,
        escape(&summary.scraping),
        escape(&summary.next_scrape),
        escape(&summary.publication),
        escape(&summary.next_publication),
    )
}

pub fn render(settings: &Settings, rules: &[ScoringRule], summary: &ScheduleSummary, tab: SettingsTab) -> String {
    let mut html = page_header("Settings", "Configure your AI news aggregation system.");
    html.push_str("<nav class=\"tabs\">");
    for t in SettingsTab::ALL {
        html.push_str(&format!(
            "<a class=\"{}\" href=\"/settings?tab={}\">{}</a>",
            if t == tab { "tab active" } else { "tab" },
            t.slug(),
            escape(t.label())
        ));
    }
    html.push_str("</nav>\n<section class=\"card\">\n");
    html.push_str(&match tab {
        SettingsTab::General => general_tab(settings),
        SettingsTab::Ai => ai_tab(settings),
        SettingsTab::Scoring => scoring_tab(rules),
        SettingsTab::Schedule => schedule_tab(settings, summary),
    });
    html.push_str("\n</section>");
    html
}
