use super::{StartupOptions, start_session};
use crate::error::Result;
use crate::project_identity;
use crate::session::SessionOptions;
use crate::ui::{self as output, TerminalPresenter};

pub fn run(options: &SessionOptions, startup: StartupOptions, json: bool) -> Result<()> {
    if json {
        output::reserve_stdout(true);
    }
    let (session, catalog) = start_session(options, startup)?;

    let mut presenter = if json {
        TerminalPresenter::json()
    } else {
        output::header(project_identity::DISPLAY_NAME);
        output::info(&format!(
            "Detected operating system: {}",
            session.platform()
        ));
        TerminalPresenter::new()
    };

    session.reconciler(&catalog).check_all(&mut presenter);
    Ok(())
}
