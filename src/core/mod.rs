pub mod matcher;
pub mod presenter;
pub mod reconciler;
pub mod types;

pub use presenter::{EngineState, Notice, NoticeLevel, Presenter};
pub use reconciler::{InstallOutcome, InstallReport, ItemOutcome, Reconciler};
