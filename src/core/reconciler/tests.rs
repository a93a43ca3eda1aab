use super::*;
use crate::audit::LogEntry;
use crate::config::catalog;
use crate::core::presenter::NoticeLevel;
use crate::runner::CommandResult;
use crate::runner::testing::ScriptedRunner;
use std::fs;

#[derive(Default)]
struct RecordingPresenter {
    tables: Vec<Vec<StatusRow>>,
    notices: Vec<Notice>,
    started: Vec<String>,
    states: Vec<EngineState>,
}

impl Presenter for RecordingPresenter {
    fn render_status(&mut self, rows: &[StatusRow]) {
        self.tables.push(rows.to_vec());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn install_started(&mut self, name: &str) {
        self.started.push(name.to_string());
    }

    fn state_changed(&mut self, state: EngineState) {
        self.states.push(state);
    }
}

impl RecordingPresenter {
    fn errors(&self) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .collect()
    }
}

const CATALOG: &str = r#"{"tools": [
  {"name": "Git", "description": "Version control", "checkCommand": "git --version",
   "installCommand": {"windows": "choco install git -y", "linux": "apt-get install -y git"}},
  {"name": "Node.js", "description": "JavaScript runtime", "checkCommand": "node --version",
   "installCommand": {"windows": "choco install nodejs -y", "linux": "apt-get install -y nodejs"}},
  {"name": "Docker", "description": "Containers", "checkCommand": "docker --version",
   "installCommand": {"windows": "choco install docker-desktop -y"}}
]}"#;

fn fixture(platform: Platform, runner: &ScriptedRunner) -> (tempfile::TempDir, Session, Catalog) {
    let tmp = tempfile::tempdir().unwrap();
    let session = Session::with_runner(
        platform,
        tmp.path().join("applications.json"),
        AuditLog::new(tmp.path().join("logs").join("install_log.txt")),
        Box::new(runner.clone()),
    );
    let catalog = catalog::parse(CATALOG, "applications.json", false).unwrap();
    (tmp, session, catalog)
}

fn log_messages(session: &Session) -> Vec<String> {
    fs::read_to_string(session.log().path())
        .unwrap_or_default()
        .lines()
        .map(|l| LogEntry::parse(l).message)
        .collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn check_pass_runs_every_check_once_and_maps_status() {
    let runner = ScriptedRunner::new()
        .succeed("git --version")
        .fail("node --version", "node: not found")
        .succeed("docker --version");
    let (_tmp, session, catalog) = fixture(Platform::Linux, &runner);
    let mut presenter = RecordingPresenter::default();

    let rows = session.reconciler(&catalog).check_all(&mut presenter);

    let statuses: Vec<(&str, InstallStatus)> = rows.iter().map(|r| (r.name.as_str(), r.status)).collect();
    assert_eq!(
        statuses,
        vec![
            ("Git", InstallStatus::Installed),
            ("Node.js", InstallStatus::NotInstalled),
            ("Docker", InstallStatus::Installed),
        ]
    );
    assert_eq!(rows[1].description, "JavaScript runtime");
    assert_eq!(
        runner.calls(),
        names(&["git --version", "node --version", "docker --version"])
    );
    assert_eq!(presenter.tables, vec![rows.clone()]);
    assert_eq!(
        log_messages(&session),
        names(&[
            "Checked application: Git - Status: Installed",
            "Checked application: Node.js - Status: Not Installed",
            "Checked application: Docker - Status: Installed",
        ])
    );
}

#[test]
fn repeated_check_passes_agree() {
    let runner = ScriptedRunner::new().succeed("git --version");
    let (_tmp, session, catalog) = fixture(Platform::Linux, &runner);
    let mut presenter = RecordingPresenter::default();
    let mut engine = session.reconciler(&catalog);

    let first = engine.check_all(&mut presenter);
    let second = engine.check_all(&mut presenter);

    assert_eq!(first, second);
    assert_eq!(runner.count("git --version"), 2);
}

#[test]
fn parallel_checks_keep_catalog_order() {
    let runner = ScriptedRunner::new()
        .fail("git --version", "")
        .succeed("node --version")
        .fail("docker --version", "");
    let (_tmp, session, catalog) = fixture(Platform::Linux, &runner);
    let session = session.parallel(true);
    let mut presenter = RecordingPresenter::default();

    let rows = session.reconciler(&catalog).check_all(&mut presenter);

    let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["Git", "Node.js", "Docker"]);
    assert_eq!(rows[1].status, InstallStatus::Installed);
    assert_eq!(
        log_messages(&session),
        names(&[
            "Checked application: Git - Status: Not Installed",
            "Checked application: Node.js - Status: Installed",
            "Checked application: Docker - Status: Not Installed",
        ])
    );
}

#[test]
fn installs_follow_selection_order() {
    let runner = ScriptedRunner::new()
        .succeed("choco install docker-desktop -y")
        .succeed("choco install git -y")
        .succeed("choco install nodejs -y");
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();

    let selection = names(&["Docker", "Git", "Node.js"]);
    let report = session.reconciler(&catalog).install(&selection, &mut presenter);

    assert_eq!(presenter.started, selection);
    let installs: Vec<String> = runner
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("choco install"))
        .collect();
    assert_eq!(
        installs,
        names(&[
            "choco install docker-desktop -y",
            "choco install git -y",
            "choco install nodejs -y",
        ])
    );

    let install_log: Vec<String> = log_messages(&session)
        .into_iter()
        .filter(|m| !m.starts_with("Checked application"))
        .collect();
    assert_eq!(
        install_log,
        names(&[
            "Installing Docker...",
            "Docker installed successfully.",
            "Installing Git...",
            "Git installed successfully.",
            "Installing Node.js...",
            "Node.js installed successfully.",
        ])
    );
    assert_eq!(report.installed_count(), 3);
}

#[test]
fn missing_platform_command_is_reported_and_skipped() {
    let runner = ScriptedRunner::new().succeed("apt-get install -y git");
    let (_tmp, session, catalog) = fixture(Platform::Linux, &runner);
    let mut presenter = RecordingPresenter::default();

    let report = session
        .reconciler(&catalog)
        .install(&names(&["Docker", "Git"]), &mut presenter);

    assert_eq!(
        report.outcomes,
        vec![
            InstallOutcome {
                name: "Docker".to_string(),
                outcome: ItemOutcome::MissingInstallCommand,
            },
            InstallOutcome {
                name: "Git".to_string(),
                outcome: ItemOutcome::Installed,
            },
        ]
    );
    let errors = presenter.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "No install command available for Docker on Linux");

    // Only check commands and Git's install ran.
    let calls = runner.calls();
    assert_eq!(calls.iter().filter(|c| !c.ends_with("--version")).count(), 1);
    assert!(calls.contains(&"apt-get install -y git".to_string()));
}

#[test]
fn failed_install_surfaces_stderr_and_continues() {
    let runner = ScriptedRunner::new()
        .fail("choco install git -y", "The package was not found")
        .succeed("choco install nodejs -y");
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();

    let report = session
        .reconciler(&catalog)
        .install(&names(&["Git", "Node.js"]), &mut presenter);

    assert_eq!(
        report.outcomes[0].outcome,
        ItemOutcome::Failed {
            stderr: "The package was not found".to_string()
        }
    );
    assert_eq!(report.outcomes[1].outcome, ItemOutcome::Installed);
    assert_eq!(report.failed_count(), 1);
    assert!(log_messages(&session).contains(&"Error installing Git: The package was not found".to_string()));
    assert_eq!(presenter.errors()[0].message, "Error installing Git: The package was not found");
}

#[test]
fn empty_selection_does_nothing() {
    let runner = ScriptedRunner::new();
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();
    let mut engine = session.reconciler(&catalog);

    let report = engine.install(&[], &mut presenter);

    assert_eq!(report, InstallReport::default());
    assert!(runner.calls().is_empty());
    assert!(log_messages(&session).is_empty());
    assert!(presenter.states.is_empty());
    assert_eq!(engine.state(), EngineState::Idle);
    assert_eq!(presenter.notices, vec![Notice::info("No Selection", "Please select applications to install.")]);
}

#[test]
fn unknown_selection_is_reported_and_skipped() {
    let runner = ScriptedRunner::new().succeed("choco install git -y");
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();

    let report = session
        .reconciler(&catalog)
        .install(&names(&["Emacs", "Git"]), &mut presenter);

    assert_eq!(report.outcomes[0].outcome, ItemOutcome::Unknown);
    assert_eq!(report.outcomes[1].outcome, ItemOutcome::Installed);
    assert_eq!(presenter.notices[0].level, NoticeLevel::Warning);
    assert!(log_messages(&session).contains(&"Skipped unknown application: Emacs".to_string()));
}

#[test]
fn install_refreshes_entire_catalog() {
    let runner = ScriptedRunner::new()
        .succeed("choco install git -y")
        .succeed("node --version");
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();
    let mut engine = session.reconciler(&catalog);

    let report = engine.install(&names(&["Git"]), &mut presenter);

    for check in ["git --version", "node --version", "docker --version"] {
        assert_eq!(runner.count(check), 1, "{}", check);
    }
    assert_eq!(report.statuses.len(), 3);
    assert_eq!(presenter.tables, vec![report.statuses.clone()]);
    assert_eq!(
        presenter.states,
        vec![
            EngineState::Installing,
            EngineState::Checking,
            EngineState::Idle
        ]
    );
    assert_eq!(engine.state(), EngineState::Idle);
}

#[test]
fn install_missing_selects_only_not_installed() {
    let runner = ScriptedRunner::new()
        .succeed("git --version")
        .succeed("choco install nodejs -y")
        .succeed("choco install docker-desktop -y");
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();

    let report = session.reconciler(&catalog).install_missing(&mut presenter);

    let selected: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(selected, vec!["Node.js", "Docker"]);
    assert_eq!(runner.count("choco install git -y"), 0);
}

#[test]
fn install_missing_with_everything_installed_only_reports() {
    let runner = ScriptedRunner::new()
        .succeed("git --version")
        .succeed("node --version")
        .succeed("docker --version");
    let (_tmp, session, catalog) = fixture(Platform::Windows, &runner);
    let mut presenter = RecordingPresenter::default();

    let report = session.reconciler(&catalog).install_missing(&mut presenter);

    assert!(report.outcomes.is_empty());
    assert_eq!(report.statuses.len(), 3);
    assert_eq!(presenter.tables.len(), 1);
    assert_eq!(presenter.notices[0].title, "Nothing To Install");
}

#[test]
fn git_scenario_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new()
        .respond(
            "git --version",
            vec![
                CommandResult::failure("'git' is not recognized"),
                CommandResult::success("git version 2.44.0.windows.1"),
            ],
        )
        .succeed("choco install git -y");
    let session = Session::with_runner(
        Platform::Windows,
        tmp.path().join("applications.json"),
        AuditLog::new(tmp.path().join("logs").join("install_log.txt")),
        Box::new(runner.clone()),
    );
    let catalog = catalog::parse(
        r#"{"tools": [{"name": "Git", "description": "Version control", "checkCommand": "git --version",
            "installCommand": {"windows": "choco install git -y"}}]}"#,
        "applications.json",
        false,
    )
    .unwrap();
    let mut presenter = RecordingPresenter::default();
    let mut engine = session.reconciler(&catalog);

    let before = engine.check_all(&mut presenter);
    assert_eq!(before[0].status, InstallStatus::NotInstalled);

    let report = engine.install(&names(&["Git"]), &mut presenter);
    assert_eq!(report.statuses[0].status, InstallStatus::Installed);
    assert_eq!(runner.count("choco install git -y"), 1);

    let log = log_messages(&session);
    let checked = log.iter().position(|m| m.starts_with("Checked application: Git")).unwrap();
    let installed = log.iter().position(|m| m.contains("installed successfully")).unwrap();
    assert!(checked < installed);
}

#[test]
fn install_command_lookup_is_typed() {
    let catalog = catalog::parse(CATALOG, "applications.json", false).unwrap();
    let docker = catalog.get("Docker").unwrap();
    assert_eq!(
        install_command_for(docker, Platform::Windows).unwrap(),
        "choco install docker-desktop -y"
    );
    assert!(matches!(
        install_command_for(docker, Platform::MacOs),
        Err(AppSetupError::MissingInstallCommand { platform: Platform::MacOs, .. })
    ));
}
