//! Install Command
//!
//! Installs the named applications one by one, then refreshes every status.

use super::{StartupOptions, start_session};
use crate::core::matcher;
use crate::error::Result;
use crate::session::SessionOptions;
use crate::ui::{self as output, TerminalPresenter};

#[derive(Debug)]
pub struct InstallOptions {
    /// Names as typed, in install order
    pub names: Vec<String>,
    /// Select everything not installed instead of `names`
    pub missing: bool,
}

pub fn run(options: &SessionOptions, startup: StartupOptions, install: InstallOptions) -> Result<()> {
    let (session, catalog) = start_session(options, startup)?;
    let mut presenter = TerminalPresenter::new();
    let mut engine = session.reconciler(&catalog);

    let report = if install.missing {
        engine.install_missing(&mut presenter)
    } else {
        let selection = matcher::resolve_selection(&catalog, &install.names);
        engine.install(&selection, &mut presenter)
    };

    if report.outcomes.is_empty() {
        return Ok(());
    }

    output::separator();
    let failed = report.failed_count();
    if failed == 0 {
        output::success(&format!(
            "{} application(s) installed",
            report.installed_count()
        ));
    } else {
        output::warning(&format!(
            "{} installed, {} not installed (see messages above)",
            report.installed_count(),
            failed
        ));
    }
    Ok(())
}
