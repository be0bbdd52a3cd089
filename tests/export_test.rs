//! Export through the app into a temporary directory

use std::fs;

use medicare::app::{App, StatusLevel};
use medicare::config::Config;
use medicare::core::{Action, ExportFormat};

fn app_exporting_to(dir: &std::path::Path) -> App {
    let config = Config {
        export_dir: Some(dir.to_string_lossy().into_owned()),
        ..Config::default()
    };
    App::new(&config)
}

fn exported_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_export_csv_action_writes_roster() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_exporting_to(dir.path());
    app.apply(Action::Export(ExportFormat::Csv));

    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));
    let names = exported_files(dir.path());
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("patients-") && names[0].ends_with(".csv"));

    let content = fs::read_to_string(dir.path().join(&names[0])).unwrap();
    assert_eq!(content.lines().count(), 5);
    assert!(content.contains("Новикова Елена Александровна"));
}

#[test]
fn test_export_json_command_writes_everything() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_exporting_to(dir.path());
    app.enter_command();
    app.command_input.push_str("export json");
    app.apply_command();

    let names = exported_files(dir.path());
    assert_eq!(names.len(), 1);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(&names[0])).unwrap()).unwrap();
    assert_eq!(value["patients"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["schedule"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["medical_history"][1]["type"], "Анализы");
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();
    let mut app = app_exporting_to(&blocker);
    app.apply(Action::Export(ExportFormat::Json));
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Error));
}
