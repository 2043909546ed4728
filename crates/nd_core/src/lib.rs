pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod notice;
pub mod pipeline;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use notice::{Notice, Notified};
pub use storage::{ConsoleStorage, ContentStore, DashboardFeed, SettingsStore, SourceStore};
pub use types::*;

pub mod prelude {
    pub use crate::dashboard::DashboardSummary;
    pub use crate::pipeline::{ContentBoard, PostPreview};
    pub use crate::session::Session;
    pub use crate::{ConsoleStorage, Error, Notice, Result};
}
