use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use docbooth::dashboard::Dashboard;
use docbooth::document::DocumentRecord;
use docbooth::launch::SessionLauncher;
use docbooth::session::{ViewerSession, ViewerState};
use docbooth::store::{BlobStore, Database, OrderLedger};

fn open_store(temp_dir: &TempDir) -> Database {
    Database::open(temp_dir.path().join("docbooth.db")).unwrap()
}

fn write_fixture(temp_dir: &TempDir, name: &str, payload: &[u8]) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, payload).unwrap();
    path
}

#[tokio::test]
async fn test_blob_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let blobs = BlobStore::new(open_store(&temp_dir));

    let payload = b"%PDF-1.7 not really".to_vec();
    let id = blobs
        .put(
            None,
            "report.pdf".to_string(),
            "application/pdf".to_string(),
            payload.clone(),
        )
        .await
        .unwrap();

    let record = blobs.get(&id).await.unwrap().expect("record should exist");
    assert_eq!(record.id, id);
    assert_eq!(record.binary, payload);
    assert_eq!(record.display_name, "report.pdf");
    assert_eq!(record.mime_hint, "application/pdf");
}

#[tokio::test]
async fn test_missing_id_resolves_to_none() {
    let temp_dir = TempDir::new().unwrap();
    let blobs = BlobStore::new(open_store(&temp_dir));

    let resolved = blobs.get("never-written").await.unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_put_overwrites_under_same_id() {
    let temp_dir = TempDir::new().unwrap();
    let blobs = BlobStore::new(open_store(&temp_dir));

    let id = blobs
        .put(
            Some("fixed-id".to_string()),
            "v1.csv".to_string(),
            "text/csv".to_string(),
            b"a,b".to_vec(),
        )
        .await
        .unwrap();
    assert_eq!(id, "fixed-id");

    blobs
        .put(
            Some("fixed-id".to_string()),
            "v2.csv".to_string(),
            "text/csv".to_string(),
            b"c,d".to_vec(),
        )
        .await
        .unwrap();

    let record = blobs.get("fixed-id").await.unwrap().unwrap();
    assert_eq!(record.display_name, "v2.csv");
    assert_eq!(record.binary, b"c,d".to_vec());
}

#[tokio::test]
async fn test_ledger_defaults_empty_and_replaces_wholesale() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = OrderLedger::new(open_store(&temp_dir));

    assert!(ledger.get_order().await.unwrap().is_empty());

    ledger
        .set_order(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        .await
        .unwrap();
    assert_eq!(ledger.get_order().await.unwrap(), vec!["a", "b", "c"]);

    // A later launch replaces the whole order, it never appends
    ledger.set_order(vec!["d".to_string()]).await.unwrap();
    assert_eq!(ledger.get_order().await.unwrap(), vec!["d"]);
}

#[tokio::test]
async fn test_launch_persists_whole_set_and_order() {
    let temp_dir = TempDir::new().unwrap();
    let database = open_store(&temp_dir);
    let blobs = BlobStore::new(database.clone());
    let ledger = OrderLedger::new(database);
    let launcher = SessionLauncher::new(blobs.clone(), ledger.clone());

    let mut dashboard = Dashboard::new();
    let paths = vec![
        write_fixture(&temp_dir, "a.pdf", b"pdf-bytes"),
        write_fixture(&temp_dir, "b.png", b"png-bytes"),
        write_fixture(&temp_dir, "c.mp3", b"mp3-bytes"),
    ];
    assert_eq!(dashboard.add_files(&paths), 3);

    let target = dashboard.entries()[1].id.clone();
    launcher.prepare(&target, dashboard.entries()).await.unwrap();

    // Exactly the dashboard's ids, in the dashboard's iteration order
    let expected: Vec<String> = dashboard
        .entries()
        .iter()
        .map(|entry| entry.id.clone())
        .collect();
    assert_eq!(ledger.get_order().await.unwrap(), expected);

    for entry in dashboard.entries() {
        let record = blobs.get(&entry.id).await.unwrap().expect("blob persisted");
        assert_eq!(record.binary, entry.binary);
        assert_eq!(record.display_name, entry.display_name);
    }
}

#[tokio::test]
async fn test_removal_leaves_store_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let database = open_store(&temp_dir);
    let blobs = BlobStore::new(database.clone());
    let ledger = OrderLedger::new(database.clone());
    let launcher = SessionLauncher::new(blobs.clone(), ledger.clone());

    let mut dashboard = Dashboard::new();
    let paths = vec![
        write_fixture(&temp_dir, "a.pdf", b"pdf-bytes"),
        write_fixture(&temp_dir, "b.png", b"png-bytes"),
    ];
    dashboard.add_files(&paths);

    let target = dashboard.entries()[0].id.clone();
    launcher.prepare(&target, dashboard.entries()).await.unwrap();
    let order_before = ledger.get_order().await.unwrap();

    let removed = dashboard.remove_file(0).expect("entry removed");
    assert_eq!(dashboard.len(), 1);

    // Persistence only happens at launch; removal is purely in-memory
    assert_eq!(ledger.get_order().await.unwrap(), order_before);
    assert!(blobs.get(&removed.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_viewer_navigation_walks_persisted_order() {
    let temp_dir = TempDir::new().unwrap();
    let database = open_store(&temp_dir);
    let blobs = BlobStore::new(database.clone());
    let ledger = OrderLedger::new(database.clone());
    let launcher = SessionLauncher::new(blobs.clone(), ledger.clone());

    let mut dashboard = Dashboard::new();
    let paths = vec![
        write_fixture(&temp_dir, "a.pdf", b"pdf-bytes"),
        write_fixture(&temp_dir, "b.png", b"png-bytes"),
    ];
    dashboard.add_files(&paths);
    let id_a = dashboard.entries()[0].id.clone();
    let id_b = dashboard.entries()[1].id.clone();

    launcher.prepare(&id_a, dashboard.entries()).await.unwrap();

    // A fresh process would read the order once and resolve the target
    let order = ledger.get_order().await.unwrap();
    let mut session = ViewerSession::new(blobs.clone(), order, id_a.clone());
    session.resolve_now(id_a.clone()).await;

    assert_eq!(session.position(), Some(0));
    assert_eq!(session.len(), 2);
    assert!(!session.can_previous());
    assert!(session.can_next());
    match session.state() {
        ViewerState::Ready { record } => assert_eq!(record.display_name, "a.pdf"),
        state => panic!("expected Ready, got {state:?}"),
    }

    let next = session.next_id().expect("next available");
    assert_eq!(next, id_b);
    session.resolve_now(next).await;

    assert_eq!(session.position(), Some(1));
    assert!(!session.can_next());
    assert!(session.can_previous());
    match session.state() {
        ViewerState::Ready { record } => assert_eq!(record.display_name, "b.png"),
        state => panic!("expected Ready, got {state:?}"),
    }

    // Boundary: no wrap-around in either direction
    assert!(session.next_id().is_none());
    session.resolve_now(session.previous_id().unwrap()).await;
    assert_eq!(session.position(), Some(0));
    assert!(session.previous_id().is_none());
}

#[tokio::test]
async fn test_viewer_with_absent_id_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let database = open_store(&temp_dir);
    let blobs = BlobStore::new(database.clone());
    let ledger = OrderLedger::new(database);

    // The order survived, the blobs did not (eviction, different profile)
    ledger
        .set_order(vec!["gone-1".to_string(), "gone-2".to_string()])
        .await
        .unwrap();

    let order = ledger.get_order().await.unwrap();
    let mut session = ViewerSession::new(blobs, order, "gone-1".to_string());
    session.resolve_now("gone-1".to_string()).await;

    assert_eq!(
        session.state(),
        &ViewerState::NotFound {
            id: "gone-1".to_string()
        }
    );

    // Navigation chrome still reflects the ledger
    assert_eq!(session.len(), 2);
    assert_eq!(session.position(), Some(0));
    assert!(session.can_next());
}

#[tokio::test]
async fn test_stale_resolution_is_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let blobs = BlobStore::new(open_store(&temp_dir));

    let order = vec!["a".to_string(), "b".to_string()];
    let mut session = ViewerSession::new(blobs, order, "a".to_string());

    let first_epoch = session.begin_resolve("a".to_string());
    let second_epoch = session.begin_resolve("b".to_string());

    // The first resolution arrives after the user already navigated away
    let stale = DocumentRecord {
        id: "a".to_string(),
        binary: b"late".to_vec(),
        display_name: "a.pdf".to_string(),
        mime_hint: "application/pdf".to_string(),
    };
    session.complete_resolve("a", first_epoch, Ok(Some(stale)));
    assert_eq!(
        session.state(),
        &ViewerState::Resolving {
            id: "b".to_string()
        }
    );

    session.complete_resolve("b", second_epoch, Ok(None));
    assert_eq!(
        session.state(),
        &ViewerState::NotFound {
            id: "b".to_string()
        }
    );
}

#[tokio::test]
async fn test_dashboard_assigns_distinct_ids_in_upload_order() {
    let temp_dir = TempDir::new().unwrap();

    let mut dashboard = Dashboard::new();
    let paths = vec![
        write_fixture(&temp_dir, "a.pdf", b"pdf-bytes"),
        write_fixture(&temp_dir, "b.png", b"png-bytes"),
    ];
    assert_eq!(dashboard.add_files(&paths), 2);

    let entries = dashboard.entries();
    assert_eq!(entries[0].display_name, "a.pdf");
    assert_eq!(entries[1].display_name, "b.png");
    assert_ne!(entries[0].id, entries[1].id);

    // Unreadable paths are skipped, everything else still lands
    let mixed = vec![
        temp_dir.path().join("missing.txt"),
        write_fixture(&temp_dir, "c.csv", b"1,2"),
    ];
    assert_eq!(dashboard.add_files(&mixed), 1);
    assert_eq!(dashboard.len(), 3);
}
