use serde::Serialize;

/// Transient notification shown after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn general_saved() -> Self {
        Self::new("Settings saved", "General settings have been updated successfully.")
    }

    pub fn ai_saved() -> Self {
        Self::new("AI settings saved", "AI model and prompt settings have been updated.")
    }

    pub fn schedule_saved() -> Self {
        Self::new("Schedule updated", "Automation schedule has been saved.")
    }

    pub fn rule_added() -> Self {
        Self::new("Rule added", "New scoring rule has been added successfully.")
    }

    pub fn rule_deleted() -> Self {
        Self::new("Rule deleted", "Scoring rule has been removed.")
    }

    pub fn source_added(name: &str) -> Self {
        Self::new("Source added", format!("{} is now being tracked.", name))
    }

    pub fn source_updated(name: &str) -> Self {
        Self::new("Source updated", format!("{} has been updated.", name))
    }

    pub fn source_toggled(name: &str, active: bool) -> Self {
        let state = if active { "activated" } else { "paused" };
        Self::new("Source updated", format!("{} has been {}.", name, state))
    }

    pub fn source_deleted(name: &str) -> Self {
        Self::new("Source deleted", format!("{} has been removed.", name))
    }
}

/// A response payload paired with the notice it raised.
#[derive(Debug, Clone, Serialize)]
pub struct Notified<T> {
    pub data: T,
    pub notice: Notice,
}

impl<T> Notified<T> {
    pub fn new(data: T, notice: Notice) -> Self {
        Self { data, notice }
    }
}
