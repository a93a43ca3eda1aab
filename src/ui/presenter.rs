use crate::core::presenter::{EngineState, Notice, NoticeLevel, Presenter};
use crate::core::types::StatusRow;
use crate::ui;

/// Terminal rendering of engine events.
pub struct TerminalPresenter {
    json: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self { json: false }
    }

    /// Print status tables as JSON instead of a text table.
    pub fn json() -> Self {
        Self { json: true }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn render_status(&mut self, rows: &[StatusRow]) {
        if !self.json {
            ui::status_table(rows);
            return;
        }
        match serde_json::to_string_pretty(rows) {
            Ok(json) => println!("{}", json),
            Err(e) => ui::error(&format!("Failed to encode status table: {}", e)),
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => ui::info(&notice.message),
            NoticeLevel::Success => ui::success(&notice.message),
            NoticeLevel::Warning => ui::warning(&notice.message),
            NoticeLevel::Error => ui::error(&notice.message),
        }
    }

    fn install_started(&mut self, name: &str) {
        ui::info(&format!("Installing {}...", name));
    }

    fn state_changed(&mut self, state: EngineState) {
        ui::verbose(&format!("engine state: {:?}", state));
    }
}
