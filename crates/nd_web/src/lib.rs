use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod console;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod pages;
pub mod state;
pub mod views;

pub use state::AppState;

/// One console route, for `nd routes` and the docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn route(method: &'static str, path: &'static str, description: &'static str) -> RouteInfo {
    RouteInfo { method, path, description }
}

pub const ROUTES: &[RouteInfo] = &[
    route("GET", "/", "Dashboard"),
    route("GET", "/login", "Sign-in screen"),
    route("POST", "/login", "Sign in with any non-empty email and password"),
    route("POST", "/login/guest", "Continue as guest (read-only)"),
    route("POST", "/sidebar/toggle", "Collapse or expand the sidebar"),
    route("GET", "/sources", "Source management"),
    route("POST", "/sources", "Add a source"),
    route("GET", "/sources/:id/edit", "Edit source dialog"),
    route("POST", "/sources/:id", "Update a source"),
    route("POST", "/sources/:id/toggle", "Flip a source's active flag"),
    route("POST", "/sources/:id/delete", "Delete a source"),
    route("GET", "/content", "Content pipeline board"),
    route("GET", "/content/posts/:id/preview", "Draft preview"),
    route("POST", "/content/posts/:id/publish", "Request publication (logged only)"),
    route("POST", "/content/posts/:id/edit", "Request an edit (logged only)"),
    route("POST", "/content/posts/:id/delete", "Request deletion (logged only)"),
    route("POST", "/content/process", "Force article processing (logged only)"),
    route("GET", "/settings", "Settings tabs (?tab=general|ai|scoring|schedule)"),
    route("POST", "/settings/general", "Save API keys"),
    route("POST", "/settings/ai", "Save models and prompts"),
    route("POST", "/settings/schedule", "Save automation schedule"),
    route("POST", "/settings/scoring", "Add a scoring rule"),
    route("POST", "/settings/scoring/:id/delete", "Delete a scoring rule"),
    route("GET", "/api/dashboard", "Dashboard summary"),
    route("GET", "/api/sources", "List sources"),
    route("POST", "/api/sources", "Add a source"),
    route("GET", "/api/sources/stats", "Source totals"),
    route("PUT", "/api/sources/:id", "Update a source"),
    route("DELETE", "/api/sources/:id", "Delete a source"),
    route("POST", "/api/sources/:id/toggle", "Flip a source's active flag"),
    route("GET", "/api/content", "Kanban board"),
    route("GET", "/api/content/posts/:id/preview", "Draft preview"),
    route("POST", "/api/content/posts/:id/publish", "Request publication"),
    route("POST", "/api/content/posts/:id/edit", "Request an edit"),
    route("DELETE", "/api/content/posts/:id", "Request deletion"),
    route("POST", "/api/content/process", "Force article processing"),
    route("GET", "/api/settings", "All settings"),
    route("PUT", "/api/settings/general", "Replace API keys"),
    route("PUT", "/api/settings/ai", "Replace models and prompts"),
    route("PUT", "/api/settings/schedule", "Replace automation schedule"),
    route("GET", "/api/settings/schedule/summary", "Schedule as seen now"),
    route("GET", "/api/scoring-rules", "List scoring rules"),
    route("POST", "/api/scoring-rules", "Add a scoring rule"),
    route("DELETE", "/api/scoring-rules/:id", "Delete a scoring rule"),
    route("GET", "/api/session", "Current session and sidebar state"),
    route("POST", "/api/session", "Sign in"),
    route("POST", "/api/session/guest", "Continue as guest"),
    route("POST", "/api/sidebar/toggle", "Collapse or expand the sidebar"),
    route("GET", "/healthz", "Liveness probe"),
];

fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(pages::dashboard))
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/login/guest", post(pages::login_guest))
        .route("/sidebar/toggle", post(pages::toggle_sidebar))
        .route("/sources", get(pages::sources).post(pages::add_source))
        .route("/sources/:id", post(pages::update_source))
        .route("/sources/:id/edit", get(pages::edit_source))
        .route("/sources/:id/toggle", post(pages::toggle_source))
        .route("/sources/:id/delete", post(pages::delete_source))
        .route("/content", get(pages::content))
        .route("/content/process", post(pages::force_process))
        .route("/content/posts/:id/preview", get(pages::preview_post))
        .route("/content/posts/:id/publish", post(pages::publish_post))
        .route("/content/posts/:id/edit", post(pages::edit_post))
        .route("/content/posts/:id/delete", post(pages::delete_post))
        .route("/settings", get(pages::settings))
        .route("/settings/general", post(pages::save_general))
        .route("/settings/ai", post(pages::save_ai))
        .route("/settings/schedule", post(pages::save_schedule))
        .route("/settings/scoring", post(pages::add_rule))
        .route("/settings/scoring/:id/delete", post(pages::delete_rule))
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/sources", get(handlers::list_sources).post(handlers::create_source))
        .route("/api/sources/stats", get(handlers::source_stats))
        .route("/api/sources/:id", put(handlers::update_source).delete(handlers::delete_source))
        .route("/api/sources/:id/toggle", post(handlers::toggle_source))
        .route("/api/content", get(handlers::get_content))
        .route("/api/content/process", post(handlers::force_process))
        .route("/api/content/posts/:id", axum::routing::delete(handlers::delete_post))
        .route("/api/content/posts/:id/preview", get(handlers::preview_post))
        .route("/api/content/posts/:id/publish", post(handlers::publish_post))
        .route("/api/content/posts/:id/edit", post(handlers::edit_post))
        .route("/api/settings", get(handlers::get_settings))
        .route("/api/settings/general", put(handlers::save_general))
        .route("/api/settings/ai", put(handlers::save_ai))
        .route("/api/settings/schedule", put(handlers::save_schedule))
        .route("/api/settings/schedule/summary", get(handlers::schedule_summary))
        .route("/api/scoring-rules", get(handlers::list_rules).post(handlers::create_rule))
        .route("/api/scoring-rules/:id", axum::routing::delete(handlers::delete_rule))
        .route("/api/session", get(handlers::get_session).post(handlers::sign_in))
        .route("/api/session/guest", post(handlers::sign_in_guest))
        .route("/api/sidebar/toggle", post(handlers::toggle_sidebar))
        .route("/healthz", get(handlers::healthz))
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .merge(page_routes())
        .merge(api_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState, ROUTES};
    pub use nd_core::{Error, Result};
}
