//! End-to-end transfer scenarios driven through explicit session handles:
//! progress observation, mixed-outcome batches, upload expansion, and
//! outcome report export.

use std::sync::Arc;

use ferry::{
    AlwaysConfirm, Credentials, Direction, FileAttempt, Session, SessionConfig, TransferRequest,
    download, upload,
};
use test_support::{RecordingObserver, ScriptedConnector};

fn config() -> SessionConfig {
    SessionConfig::builder("files.example.net", Credentials::new("operator", "secret"))
        .build()
        .expect("valid config")
}

#[test]
fn wildcard_download_lands_inside_existing_directory() {
    let local = tempfile::tempdir().expect("tempdir");
    let connector = ScriptedConnector::new().with_get_result(
        "/logs/*.log",
        vec![
            FileAttempt::succeeded("app.log"),
            FileAttempt::succeeded("db.log"),
        ],
    );
    let mut session = Session::open(&connector, config()).expect("open");

    let request = TransferRequest::download("/logs/*.log", local.path().display().to_string());
    let outcomes = download(&mut session, &request, &AlwaysConfirm).expect("batch runs");

    let destinations: Vec<_> = outcomes.iter().map(|o| o.destination().to_owned()).collect();
    assert_eq!(
        destinations,
        [
            local.path().join("app.log").display().to_string(),
            local.path().join("db.log").display().to_string(),
        ]
    );
}

#[test]
fn progress_events_reach_the_observer_registered_at_open() {
    let local = tempfile::tempdir().expect("tempdir");
    let observer = RecordingObserver::new();
    let connector = ScriptedConnector::new().with_progress_events().with_get_result(
        "/data/big.bin",
        vec![FileAttempt::succeeded("big.bin")],
    );
    let mut session =
        Session::open_with_observer(&connector, config(), Arc::new(observer.clone()))
            .expect("open");

    let request = TransferRequest::download("/data/big.bin", local.path().display().to_string());
    download(&mut session, &request, &AlwaysConfirm).expect("batch runs");

    assert_eq!(
        observer.seen(),
        vec![("big.bin".to_owned(), Direction::Download)]
    );
}

#[test]
fn mixed_outcome_batch_reports_every_attempt() {
    let local = tempfile::tempdir().expect("tempdir");
    let connector = ScriptedConnector::new().with_get_result(
        "/drop/*",
        vec![
            FileAttempt::succeeded("a"),
            FileAttempt::failed("b", "checksum mismatch"),
            FileAttempt::succeeded("c"),
        ],
    );
    let mut session = Session::open(&connector, config()).expect("open");

    let request = TransferRequest::download("/drop/*", local.path().display().to_string());
    let outcomes = download(&mut session, &request, &AlwaysConfirm).expect("batch runs");

    let flags: Vec<_> = outcomes.iter().map(ferry::TransferOutcome::succeeded).collect();
    assert_eq!(flags, [true, false, true]);
}

#[test]
fn upload_round_trip_with_masks_and_container_destination() {
    let staging = tempfile::tempdir().expect("tempdir");
    std::fs::write(staging.path().join("jan.csv"), b"1").expect("write");
    std::fs::write(staging.path().join("feb.csv"), b"2").expect("write");
    std::fs::write(staging.path().join("notes.txt"), b"n").expect("write");

    let connector = ScriptedConnector::new();
    let mut session = Session::open(&connector, config()).expect("open");

    let request = TransferRequest::upload(staging.path().display().to_string(), "/reports/")
        .include(["*.csv"])
        .exclude(["feb.*"]);
    let outcomes = upload(&mut session, &request, &AlwaysConfirm).expect("batch runs");

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].file_name(), "jan.csv");
    assert_eq!(outcomes[0].destination(), "/reports/jan.csv");
}

#[test]
fn outcome_report_exports_as_json() {
    let local = tempfile::tempdir().expect("tempdir");
    let connector = ScriptedConnector::new().with_get_result(
        "/x/y",
        vec![FileAttempt::failed("y", "timeout")],
    );
    let mut session = Session::open(&connector, config()).expect("open");

    let request = TransferRequest::download("/x/y", local.path().display().to_string());
    let outcomes = download(&mut session, &request, &AlwaysConfirm).expect("batch runs");

    let report = serde_json::to_value(&outcomes).expect("serializable");
    assert_eq!(report[0]["file_name"], "y");
    assert_eq!(report[0]["error"], "timeout");
}

#[test]
fn two_explicit_sessions_are_independent() {
    let connector_a = ScriptedConnector::new().with_dir("/a", vec![]);
    let connector_b = ScriptedConnector::new().with_dir("/b", vec![]);

    let mut first = Session::open(&connector_a, config()).expect("open a");
    let second = Session::open(&connector_b, config()).expect("open b");

    first.close();
    assert!(!first.is_open());
    assert!(second.is_open());
}
