//! Contract between the reconciliation engine and whatever shows its results.

use crate::core::types::StatusRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single message the user should see right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn success(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }
}

/// Engine lifecycle, reported on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Checking,
    Installing,
}

pub trait Presenter {
    /// Show the full status table, in catalog order.
    fn render_status(&mut self, rows: &[StatusRow]);

    /// Show one message. Called synchronously as events happen.
    fn notify(&mut self, notice: Notice);

    fn install_started(&mut self, _name: &str) {}

    fn state_changed(&mut self, _state: EngineState) {}
}
