//! Application wiring tests.
//!
//! Drives `ReaderApp` with a UI runtime that records the session it is
//! handed instead of opening a window.

use anyhow::Result;
use pagereader::ui::{Theme, UiRuntime};
use pagereader::{ReaderApp, ReaderConfig, ReaderSession};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;
use tempfile::NamedTempFile;

#[derive(Default, Clone)]
struct RecordingRuntime {
    session: Rc<RefCell<Option<ReaderSession>>>,
}

impl UiRuntime for RecordingRuntime {
    fn run(self, session: ReaderSession) -> Result<()> {
        *self.session.borrow_mut() = Some(session);
        Ok(())
    }
}

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn launch(contents: &str, config: ReaderConfig) -> ReaderSession {
    let file = catalog_file(contents);
    let runtime = RecordingRuntime::default();
    let recorded = Rc::clone(&runtime.session);

    let mut app = ReaderApp::new(runtime, config);
    app.open_catalog(file.path()).unwrap();
    app.run().unwrap();

    let session = recorded.borrow_mut().take();
    session.expect("runtime should receive a session")
}

#[test]
fn test_session_starts_without_selection() {
    let session = launch("Alpha,p1,p2\nBeta,b1\n", ReaderConfig::default());

    assert_eq!(session.titles(), vec!["Alpha", "Beta"]);
    assert_eq!(session.state.selected_title(), None);
    assert_eq!(session.current_page(), Ok(None));
    assert_eq!(session.config.theme, Theme::Light);
}

#[test]
fn test_session_navigation() {
    let mut session = launch("Alpha,p1,p2\nBeta,b1\n", ReaderConfig::default());

    session.select_book("Alpha");
    assert!(!session.has_previous());
    assert!(session.has_next());
    assert!(session.next_page());
    assert!(!session.next_page());

    let view = session.current_page().unwrap().unwrap();
    assert_eq!(view.title, "Alpha");
    assert_eq!(view.page_number, 2);
    assert_eq!(view.content, "p2");

    session.select_book("Beta");
    assert_eq!(session.state.page_index(), 0);
    assert!(!session.previous_page());
}

#[test]
fn test_config_reaches_the_runtime() {
    let config = ReaderConfig {
        delimiter: b'\t',
        theme: Theme::Dark,
        window_title: "Night".to_string(),
        ..ReaderConfig::default()
    };
    let session = launch("Alpha\tone\ttwo\n", config);

    assert_eq!(session.catalog.page_count("Alpha"), 2);
    assert_eq!(session.config.theme, Theme::Dark);
    assert_eq!(session.config.window_title, "Night");
}

#[test]
fn test_missing_catalog_fails_to_open() {
    let mut app = ReaderApp::new(RecordingRuntime::default(), ReaderConfig::default());

    let err = app
        .open_catalog(Path::new("no/such/dir/books.csv"))
        .unwrap_err();

    assert!(format!("{err:#}").contains("books.csv"));
}

#[test]
fn test_run_without_catalog_is_an_error() {
    let runtime = RecordingRuntime::default();
    let recorded = Rc::clone(&runtime.session);
    let app = ReaderApp::new(runtime, ReaderConfig::default());

    assert!(app.run().is_err());
    assert!(recorded.borrow().is_none());
}
