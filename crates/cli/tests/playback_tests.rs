use std::time::Duration;

use gocat_demo_cli::playback::{list_catalog, play};
use gocat_demo_core::catalog::{DemoCatalog, DemoEntry};
use gocat_demo_core::clipboard::Clipboard;
use gocat_demo_core::config::Timing;
use gocat_demo_core::error::{Error, Result};
use gocat_demo_core::file_handling::DemoConfig;
use gocat_demo_core::session::DemoSession;

struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

fn session_for(catalog: DemoCatalog) -> DemoSession {
    let config = DemoConfig {
        catalog,
        timing: Timing::default(),
    };
    DemoSession::new(config, Box::new(NoClipboard))
}

#[test]
fn test_play_writes_transcript() {
    let catalog = DemoCatalog::new(
        vec![DemoEntry::new(
            "gocat listen 8080",
            "Starting server on port 8080...\nListening on 0.0.0.0:8080",
        )],
        vec![],
    )
    .unwrap();
    let mut session = session_for(catalog);
    let mut out: Vec<u8> = vec![];
    let mut slept = Duration::ZERO;

    play(&mut session, 0, &mut out, |d| slept += d).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "$ gocat listen 8080\nStarting server on port 8080...\nListening on 0.0.0.0:8080\n"
    );
    let expected = Timing::default().run_duration("gocat listen 8080", 2);
    assert_eq!(slept, Duration::from_millis(expected));
    assert!(!session.is_running());
}

#[test]
fn test_play_keeps_blank_lines() {
    let mut session = session_for(DemoCatalog::default());
    let mut out: Vec<u8> = vec![];

    play(&mut session, 3, &mut out, |_| {}).unwrap();

    let transcript = String::from_utf8(out).unwrap();
    let expected_output = session.catalog().get(3).unwrap().output.clone();
    assert_eq!(transcript, format!("$ gocat --help\n{expected_output}\n"));
}

#[test]
fn test_play_rejects_unknown_demo() {
    let mut session = session_for(DemoCatalog::default());
    let mut out: Vec<u8> = vec![];

    let result = play(&mut session, 7, &mut out, |_| {});
    assert!(matches!(
        result,
        Err(Error::InvalidSelection { index: 7, len: 4 })
    ));
    assert!(out.is_empty());
}

#[test]
fn test_list_catalog() {
    let mut out: Vec<u8> = vec![];
    list_catalog(&mut out, &DemoCatalog::default()).unwrap();

    let listing = String::from_utf8(out).unwrap();
    assert!(listing.starts_with("Demos:\n[1]: gocat connect google.com 80\n"));
    assert!(listing.contains("[4]: gocat --help\n"));
    assert!(listing.contains("\nInstall:\n  Homebrew (macOS/Linux): brew install gocat\n"));
}
