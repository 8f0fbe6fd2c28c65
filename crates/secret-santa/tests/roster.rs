//! Integration tests for roster files.
//!
//! These tests load rosters from disk and draw from the resulting groups.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use secret_santa::{DrawError, Roster, RosterError};
use test_support::{cleanup, open_roster_dir, unique_temp_path};

const OFFICE_JSON: &str = r#"{
    "version": 1,
    "participants": [
        {"name": "Ada", "blacklist": ["Charles"]},
        {"name": "Charles", "blacklist": ["Ada"]},
        {"name": "Grace", "enforce": "Alan"},
        {"name": "Alan"},
        {"name": "Barbara"},
        {"name": "Edsger"}
    ]
}"#;

fn write_roster(contents: &str) -> Utf8PathBuf {
    let path = unique_temp_path("roster", "roster.json").expect("create temp roster path");
    let dir = open_roster_dir(&path).expect("open roster dir");
    let file_name = path.file_name().expect("roster file name");
    dir.write(file_name, contents).expect("write roster file");
    path
}

fn load(path: &Utf8Path) -> Result<Roster, RosterError> {
    let dir = open_roster_dir(path).expect("open roster dir");
    let file_name = Utf8Path::new(path.file_name().expect("roster file name"));
    Roster::from_file(&dir, file_name)
}

#[test]
fn loads_roster_from_file() {
    let path = write_roster(OFFICE_JSON);

    let roster = load(&path).expect("roster should load");

    assert_eq!(roster.version(), 1);
    assert_eq!(roster.participants().len(), 6);
    cleanup(&path);
}

#[test]
fn missing_file_reports_io_error() {
    let path = unique_temp_path("roster-missing", "absent.json").expect("temp path");

    let result = load(&path);

    match result {
        Err(RosterError::IoError { path: reported, .. }) => assert_eq!(reported, "absent.json"),
        other => panic!("Expected IoError, got: {other:?}"),
    }
    cleanup(&path);
}

#[rstest]
#[case(1)]
#[case(17)]
#[case(2026)]
fn draws_from_loaded_roster_honour_rules(#[case] seed: u64) {
    let path = write_roster(OFFICE_JSON);
    let santa = load(&path)
        .expect("roster should load")
        .build()
        .expect("names are unique");

    let pairings = santa.generate_seeded(seed).expect("rules are satisfiable");

    assert_eq!(pairings.len(), 6);
    assert_eq!(pairings.receiver_for("Grace"), Some("Alan"));
    assert_ne!(pairings.receiver_for("Ada"), Some("Charles"));
    assert_ne!(pairings.receiver_for("Charles"), Some("Ada"));
    cleanup(&path);
}

#[test]
fn roster_with_unreachable_rules_exhausts_its_cap() {
    let path = write_roster(
        r#"{
            "version": 1,
            "maxAttempts": 20,
            "participants": [
                {"name": "Ada", "enforce": "Grace"},
                {"name": "Grace", "enforce": "Ada"},
                {"name": "Alan"}
            ]
        }"#,
    );
    let santa = load(&path)
        .expect("roster should load")
        .build()
        .expect("names are unique");

    assert_eq!(
        santa.generate_seeded(4),
        Err(DrawError::ExhaustedAttempts { attempts: 20 })
    );
    cleanup(&path);
}
