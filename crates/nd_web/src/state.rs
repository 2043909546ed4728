use nd_core::navigation::{SidebarState, SidebarView};
use nd_core::session::Session;
use nd_core::{ConsoleStorage, Notice};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Per-console view state that is not part of the stored data.
/// One instance is shared by every client of the process.
#[derive(Debug, Default)]
pub struct UiState {
    pub sidebar: SidebarState,
    pub session: Session,
    /// Shown once on the next rendered page.
    pub flash: Option<Notice>,
}

pub struct AppState {
    pub storage: Arc<dyn ConsoleStorage>,
    pub ui: RwLock<UiState>,
}

impl AppState {
    pub fn new(storage: Arc<dyn ConsoleStorage>) -> Self {
        Self {
            storage,
            ui: RwLock::new(UiState::default()),
        }
    }

    pub async fn flash(&self, notice: Notice) {
        self.ui.write().await.flash = Some(notice);
    }

    pub async fn take_flash(&self) -> Option<Notice> {
        self.ui.write().await.flash.take()
    }

    pub async fn sidebar_view(&self, path: &str) -> SidebarView {
        let ui = self.ui.read().await;
        ui.sidebar.view(path, &ui.session)
    }

    pub async fn toggle_sidebar(&self) -> SidebarState {
        let mut ui = self.ui.write().await;
        ui.sidebar.toggle();
        ui.sidebar
    }

    pub async fn sign_in(&self, session: Session) {
        self.ui.write().await.session = session;
    }

    pub async fn session(&self) -> Session {
        self.ui.read().await.session.clone()
    }
}
