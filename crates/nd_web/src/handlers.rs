use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use nd_core::dashboard::DashboardSummary;
use nd_core::navigation::SidebarState;
use nd_core::pipeline::{ContentBoard, PostAction, PostPreview};
use nd_core::schedule::ScheduleSummary;
use nd_core::session::{LoginForm, Session, HOME_ROUTE};
use nd_core::{
    AiSettings, ContentStore, GeneralSettings, ItemId, NewScoringRule, Notice, Notified, RuleId, ScheduleSettings,
    ScoringRule, Settings, SettingsStore, Source, SourceDraft, SourceId, SourceStats, SourceStore,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::console::{self, ActionAccepted};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;
type WithStatus<T> = std::result::Result<(StatusCode, Json<T>), ApiError>;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<DashboardSummary> {
    Ok(Json(console::dashboard(state.storage.as_ref()).await?))
}

pub async fn list_sources(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Source>> {
    Ok(Json(state.storage.list_sources().await?))
}

pub async fn source_stats(State(state): State<Arc<AppState>>) -> ApiResult<SourceStats> {
    let sources = state.storage.list_sources().await?;
    Ok(Json(SourceStats::from_sources(&sources)))
}

pub async fn create_source(
    State(state): State<Arc<AppState>>,
    ApiJson(draft): ApiJson<SourceDraft>,
) -> WithStatus<Notified<Source>> {
    let source = state.storage.add_source(draft).await?;
    info!("🛰️ Added source {} ({})", source.name, source.url);
    let notice = Notice::source_added(&source.name);
    Ok((StatusCode::CREATED, Json(Notified::new(source, notice))))
}

pub async fn update_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SourceId>,
    ApiJson(draft): ApiJson<SourceDraft>,
) -> ApiResult<Notified<Source>> {
    let source = state.storage.update_source(id, draft).await?;
    info!("✏️ Updated source {}", source.id);
    let notice = Notice::source_updated(&source.name);
    Ok(Json(Notified::new(source, notice)))
}

pub async fn toggle_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SourceId>,
) -> ApiResult<Notified<Source>> {
    let source = state.storage.toggle_source(id).await?;
    info!("🔁 Source {} is now {}", source.id, if source.is_active { "active" } else { "inactive" });
    let notice = Notice::source_toggled(&source.name, source.is_active);
    Ok(Json(Notified::new(source, notice)))
}

pub async fn delete_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<SourceId>,
) -> ApiResult<Notified<Source>> {
    let source = state.storage.delete_source(id).await?;
    info!("🗑️ Deleted source {}", source.id);
    let notice = Notice::source_deleted(&source.name);
    Ok(Json(Notified::new(source, notice)))
}

pub async fn get_content(State(state): State<Arc<AppState>>) -> ApiResult<ContentBoard> {
    Ok(Json(console::content_board(state.storage.as_ref()).await?))
}

pub async fn preview_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ItemId>,
) -> ApiResult<PostPreview> {
    let post = state.storage.get_post(id).await?;
    Ok(Json(PostPreview::from(&post)))
}

async fn accept(state: &AppState, id: ItemId, action: PostAction) -> WithStatus<ActionAccepted> {
    let accepted = console::request_post_action(state.storage.as_ref(), id, action).await?;
    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

pub async fn publish_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> WithStatus<ActionAccepted> {
    accept(&state, id, PostAction::Publish).await
}

pub async fn edit_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> WithStatus<ActionAccepted> {
    accept(&state, id, PostAction::Edit).await
}

pub async fn delete_post(State(state): State<Arc<AppState>>, Path(id): Path<ItemId>) -> WithStatus<ActionAccepted> {
    accept(&state, id, PostAction::Delete).await
}

pub async fn force_process(State(state): State<Arc<AppState>>) -> WithStatus<Notice> {
    let notice = console::request_processing(state.storage.as_ref()).await?;
    Ok((StatusCode::ACCEPTED, Json(notice)))
}

pub async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Settings> {
    Ok(Json(state.storage.settings().await?))
}

pub async fn save_general(
    State(state): State<Arc<AppState>>,
    ApiJson(general): ApiJson<GeneralSettings>,
) -> ApiResult<Notified<Settings>> {
    let settings = state.storage.save_general(general).await?;
    info!("🔑 General settings saved");
    Ok(Json(Notified::new(settings, Notice::general_saved())))
}

pub async fn save_ai(
    State(state): State<Arc<AppState>>,
    ApiJson(ai): ApiJson<AiSettings>,
) -> ApiResult<Notified<Settings>> {
    let settings = state.storage.save_ai(ai).await?;
    info!("🧠 AI settings saved (primary {})", settings.ai.primary_llm.as_str());
    Ok(Json(Notified::new(settings, Notice::ai_saved())))
}

pub async fn save_schedule(
    State(state): State<Arc<AppState>>,
    ApiJson(schedule): ApiJson<ScheduleSettings>,
) -> ApiResult<Notified<Settings>> {
    let settings = state.storage.save_schedule(schedule).await?;
    info!(
        "⏰ Schedule saved: every {}h, publish at {}",
        settings.schedule.scraper_interval.hours(),
        settings.schedule.publish_time
    );
    Ok(Json(Notified::new(settings, Notice::schedule_saved())))
}

pub async fn schedule_summary(State(state): State<Arc<AppState>>) -> ApiResult<ScheduleSummary> {
    let settings = state.storage.settings().await?;
    Ok(Json(settings.schedule.summary(Local::now().naive_local())))
}

pub async fn list_rules(State(state): State<Arc<AppState>>) -> ApiResult<Vec<ScoringRule>> {
    Ok(Json(state.storage.list_rules().await?))
}

pub async fn create_rule(
    State(state): State<Arc<AppState>>,
    ApiJson(rule): ApiJson<NewScoringRule>,
) -> WithStatus<Notified<ScoringRule>> {
    let rule = state.storage.add_rule(rule).await?;
    info!("🎯 Added scoring rule {:?} with weight {}", rule.keyword, rule.weight);
    Ok((StatusCode::CREATED, Json(Notified::new(rule, Notice::rule_added()))))
}

pub async fn delete_rule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RuleId>,
) -> ApiResult<Notified<ScoringRule>> {
    let rule = state.storage.delete_rule(id).await?;
    info!("🗑️ Deleted scoring rule {}", rule.id);
    Ok(Json(Notified::new(rule, Notice::rule_deleted())))
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session: Session,
    pub read_only: bool,
    pub sidebar: SidebarState,
}

pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionView> {
    let ui = state.ui.read().await;
    Json(SessionView {
        session: ui.session.clone(),
        read_only: ui.session.is_read_only(),
        sidebar: ui.sidebar,
    })
}

#[derive(Debug, Serialize)]
pub struct SignedIn {
    pub session: Session,
    pub redirect: &'static str,
}

pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    ApiJson(form): ApiJson<LoginForm>,
) -> ApiResult<SignedIn> {
    let session = form.sign_in()?;
    info!("🔓 Signed in as {:?}", session);
    state.sign_in(session.clone()).await;
    Ok(Json(SignedIn { session, redirect: HOME_ROUTE }))
}

pub async fn sign_in_guest(State(state): State<Arc<AppState>>) -> Json<SignedIn> {
    info!("👀 Continuing as guest");
    state.sign_in(Session::Guest).await;
    Json(SignedIn { session: Session::Guest, redirect: HOME_ROUTE })
}

pub async fn toggle_sidebar(State(state): State<Arc<AppState>>) -> Json<SidebarState> {
    Json(state.toggle_sidebar().await)
}
