use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use nd_core::pipeline::{PostAction, PostPreview};
use nd_core::schedule::ScheduleForm;
use nd_core::session::{LoginForm, Session, HOME_ROUTE};
use nd_core::{
    AiSettings, AiSettingsForm, ContentStore, Error, GeneralSettings, ItemId, NewScoringRule, Notice, Result, RuleId,
    ScheduleSettings, ScoringRuleForm, SettingsStore, SourceDraft, SourceId, SourceStore,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::console;
use crate::error::PageError;
use crate::extract::PageForm;
use crate::views::{self, settings::SettingsTab};
use crate::AppState;

type PageResult = std::result::Result<Html<String>, PageError>;
type FormResult = std::result::Result<Redirect, PageError>;

async fn screen(state: &AppState, title: &str, path: &str, content: String) -> Html<String> {
    let sidebar = state.sidebar_view(path).await;
    let notice = state.take_flash().await;
    Html(views::layout(title, &sidebar, path, notice.as_ref(), &content))
}

/// Flash the outcome of a form post and send the browser back to `back`.
/// Bad input becomes a toast; anything else is an error page.
async fn settle<T>(state: &AppState, result: Result<T>, notice: impl FnOnce(&T) -> Notice, back: &str) -> FormResult {
    match result {
        Ok(value) => state.flash(notice(&value)).await,
        Err(Error::Validation(msg)) => state.flash(Notice::new("Please check the form", msg)).await,
        Err(e) => return Err(PageError(e)),
    }
    Ok(Redirect::to(back))
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> PageResult {
    let summary = console::dashboard(state.storage.as_ref()).await?;
    Ok(screen(&state, "Dashboard", "/", views::dashboard::render(&summary)).await)
}

pub async fn login_page() -> Html<String> {
    Html(views::standalone("Sign in", &views::login::render("", None)))
}

pub async fn login_submit(State(state): State<Arc<AppState>>, PageForm(form): PageForm<LoginForm>) -> Response {
    match form.sign_in() {
        Ok(session) => {
            info!("🔓 Signed in as {:?}", session);
            state.sign_in(session).await;
            Redirect::to(HOME_ROUTE).into_response()
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::standalone("Sign in", &views::login::render(&form.email, Some(&e.to_string())))),
        )
            .into_response(),
    }
}

pub async fn login_guest(State(state): State<Arc<AppState>>) -> Redirect {
    info!("👀 Continuing as guest");
    state.sign_in(Session::Guest).await;
    Redirect::to(HOME_ROUTE)
}

#[derive(Debug, Deserialize)]
pub struct ReturnTo {
    #[serde(default)]
    return_to: String,
}

/// Only same-site absolute paths made of visible ASCII are followed.
fn safe_return(path: &str) -> &str {
    let local = path.starts_with('/') && !matches!(path.as_bytes().get(1), Some(b'/' | b'\\'));
    if local && path.bytes().all(|b| b.is_ascii_graphic()) {
        path
    } else {
        HOME_ROUTE
    }
}

pub async fn toggle_sidebar(State(state): State<Arc<AppState>>, PageForm(form): PageForm<ReturnTo>) -> Redirect {
    state.toggle_sidebar().await;
    Redirect::to(safe_return(&form.return_to))
}

pub async fn sources(State(state): State<Arc<AppState>>) -> PageResult {
    let sources = state.storage.list_sources().await?;
    Ok(screen(&state, "Sources", "/sources", views::sources::render(&sources)).await)
}

pub async fn edit_source(State(state): State<Arc<AppState>>, Path(id): Path<SourceId>) -> PageResult {
    let source = state.storage.get_source(id).await?;
    let path = format!("/sources/{}/edit", id);
    Ok(screen(&state, "Edit Source", &path, views::sources::source_form(Some(&source))).await)
}

pub async fn add_source(State(state): State<Arc<AppState>>, PageForm(draft): PageForm<SourceDraft>) -> FormResult {
    let result = state.storage.add_source(draft).await;
    settle(&state, result, |s| Notice::source_added(&s.name), "/sources").await
}

pub async fn update_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SourceId>,
    PageForm(draft): PageForm<SourceDraft>,
) -> FormResult {
    let result = state.storage.update_source(id, draft).await;
    settle(&state, result, |s| Notice::source_updated(&s.name), "/sources").await
}

pub async fn toggle_source(State(state): State<Arc<AppState>>, Path(id): Path<SourceId>) -> FormResult {
    let result = state.storage.toggle_source(id).await;
    settle(&state, result, |s| Notice::source_toggled(&s.name, s.is_active), "/sources").await
}

pub async fn delete_source(State(state): State<Arc<AppState>>, Path(id): Path<SourceId>) -> FormResult {
    let result = state.storage.delete_source(id).await;
    settle(&state, result, |s| Notice::source_deleted(&s.name), "/sources").await
}

pub async fn content(State(state): State<Arc<AppState>>) -> PageResult {
    let board = console::content_board(state.storage.as_ref()).await?;
    Ok(screen(&state, "Content", "/content", views::content::render(&board)).await)
}

pub async fn preview_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> PageResult {
    let post = state.storage.get_post(id).await?;
    let path = format!("/content/posts/{}/preview", id);
    let content = views::content::render_preview(&PostPreview::from(&post));
    Ok(screen(&state, "Post Preview", &path, content).await)
}

async fn post_action(state: &AppState, id: ItemId, action: PostAction) -> FormResult {
    let result = console::request_post_action(state.storage.as_ref(), id, action).await;
    settle(state, result, |accepted| accepted.notice.clone(), "/content").await
}

pub async fn publish_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> FormResult {
    post_action(&state, id, PostAction::Publish).await
}

pub async fn edit_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> FormResult {
    post_action(&state, id, PostAction::Edit).await
}

pub async fn delete_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> FormResult {
    post_action(&state, id, PostAction::Delete).await
}

pub async fn force_process(State(state): State<Arc<AppState>>) -> FormResult {
    let result = console::request_processing(state.storage.as_ref()).await;
    settle(&state, result, Notice::clone, "/content").await
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    #[serde(default)]
    tab: SettingsTab,
}

pub async fn settings(State(state): State<Arc<AppState>>, Query(query): Query<SettingsQuery>) -> PageResult {
    let settings = state.storage.settings().await?;
    let rules = state.storage.list_rules().await?;
    let summary = settings.schedule.summary(Local::now().naive_local());
    let content = views::settings::render(&settings, &rules, &summary, query.tab);
    Ok(screen(&state, "Settings", "/settings", content).await)
}

pub async fn save_general(State(state): State<Arc<AppState>>, PageForm(general): PageForm<GeneralSettings>) -> FormResult {
    let result = state.storage.save_general(general).await;
    settle(&state, result, |_| Notice::general_saved(), "/settings?tab=general").await
}

pub async fn save_ai(State(state): State<Arc<AppState>>, PageForm(form): PageForm<AiSettingsForm>) -> FormResult {
    let result = match AiSettings::try_from(form) {
        Ok(ai) => state.storage.save_ai(ai).await,
        Err(e) => Err(e),
    };
    settle(&state, result, |_| Notice::ai_saved(), "/settings?tab=ai").await
}

pub async fn save_schedule(State(state): State<Arc<AppState>>, PageForm(form): PageForm<ScheduleForm>) -> FormResult {
    let result = match ScheduleSettings::try_from(form) {
        Ok(schedule) => state.storage.save_schedule(schedule).await,
        Err(e) => Err(e),
    };
    settle(&state, result, |_| Notice::schedule_saved(), "/settings?tab=schedule").await
}

pub async fn add_rule(State(state): State<Arc<AppState>>, PageForm(form): PageForm<ScoringRuleForm>) -> FormResult {
    let result = match NewScoringRule::try_from(form) {
        Ok(rule) => state.storage.add_rule(rule).await,
        Err(e) => Err(e),
    };
    settle(&state, result, |_| Notice::rule_added(), "/settings?tab=scoring").await
}

pub async fn delete_rule(State(state): State<Arc<AppState>>, Path(id): Path<RuleId>) -> FormResult {
    let result = state.storage.delete_rule(id).await;
    settle(&state, result, |_| Notice::rule_deleted(), "/settings?tab=scoring").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_rejects_offsite_targets() {
        assert_eq!(safe_return("/sources"), "/sources");
        assert_eq!(safe_return("//evil.example"), "/");
        assert_eq!(safe_return("https://evil.example"), "/");
        assert_eq!(safe_return(""), "/");
        assert_eq!(safe_return("/\\evil.example"), "/");
        assert_eq!(safe_return("/a\nb"), "/");
        assert_eq!(safe_return("/a b"), "/");
        assert_eq!(safe_return("/settings?tab=ai"), "/settings?tab=ai");
    }
}
