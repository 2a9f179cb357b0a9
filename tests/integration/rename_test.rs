//! Integration tests for display-name renames and folder renames.

mod helpers;

use placehub_core::ErrorKind;
use placehub_core::events::NoticeLevel;
use placehub_core::types::{ItemId, NodeId};

#[tokio::test]
async fn test_rename_changes_display_name_only() {
    let app = helpers::TestApp::new(&[("a", "team.web")]).await;

    let outcome = app
        .client
        .rename(&ItemId::from("a"), "New Name")
        .await
        .unwrap();

    assert!(outcome.is_complete());
    let snapshot = app.client.snapshot();
    let item = &snapshot.items[0];
    assert_eq!(item.display_name, "New Name");
    assert_eq!(item.path, "team.web");
    // Folder names come from path segments, never from display names.
    assert!(snapshot.forest.contains(&NodeId::folder("team.web")));
    assert_eq!(
        snapshot.forest.find(&NodeId::from("item-a")).unwrap().name(),
        "New Name"
    );
}

#[tokio::test]
async fn test_rename_keeps_surrounding_whitespace() {
    let app = helpers::TestApp::new(&[("a", "team.web")]).await;

    let outcome = app
        .client
        .rename(&ItemId::from("a"), "  New Name ")
        .await
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(app.name_of("a"), "  New Name ");
    assert_eq!(app.path_of("a"), "team.web");
    assert_eq!(app.client.snapshot().items[0].display_name, "  New Name ");
}

#[tokio::test]
async fn test_rename_failure_is_reported_not_raised() {
    let app = helpers::TestApp::new(&[("a", "x")]).await;
    app.store.fail_updates_for("a");
    let mut notices = app.client.state().subscribe_notices();

    let outcome = app
        .client
        .rename(&ItemId::from("a"), "Other")
        .await
        .unwrap();

    assert!(!outcome.is_applied());
    assert_eq!(
        outcome.error.as_ref().unwrap().kind,
        ErrorKind::RemoteUpdateFailed
    );
    assert!(outcome.refresh_error.is_none());
    assert_eq!(app.name_of("a"), "Item a");
    assert_eq!(
        notices.recv().await.unwrap().kind,
        Some(ErrorKind::RemoteUpdateFailed)
    );
}

#[tokio::test]
async fn test_folder_rename_moves_every_item_under_it() {
    let app = helpers::TestApp::new(&[
        ("a", "team.web"),
        ("b", "team.web"),
        ("c", "team.web.staging"),
        ("d", "team.ops"),
    ])
    .await;

    let report = app
        .client
        .rename_folder(&NodeId::folder("team"), "crew")
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.applied.len(), 4);
    assert_eq!(app.path_of("a"), "crew.web");
    assert_eq!(app.path_of("b"), "crew.web");
    assert_eq!(app.path_of("c"), "crew.web.staging");
    assert_eq!(app.path_of("d"), "crew.ops");

    let snapshot = app.client.snapshot();
    assert!(!snapshot.forest.contains(&NodeId::folder("team")));
    assert!(snapshot.forest.contains(&NodeId::folder("crew.web.staging")));
}

#[tokio::test]
async fn test_folder_rename_of_single_segment_folder_leaves_sibling_item() {
    // The "ops" leaf is a root-level sibling of folder "ops", not inside it.
    let app = helpers::TestApp::new(&[("a", "ops"), ("b", "ops.db")]).await;

    app.client
        .rename_folder(&NodeId::folder("ops"), "infra")
        .await
        .unwrap();

    assert_eq!(app.path_of("a"), "ops");
    assert_eq!(app.path_of("b"), "infra.db");
}

#[tokio::test]
async fn test_folder_rename_of_unknown_folder_is_a_no_op() {
    let app = helpers::TestApp::new(&[("a", "x.y")]).await;
    let mut notices = app.client.state().subscribe_notices();

    let report = app
        .client
        .rename_folder(&NodeId::folder("nowhere"), "z")
        .await
        .unwrap();

    assert!(report.applied.is_empty());
    assert_eq!(report.new_path, None);
    assert_eq!(notices.recv().await.unwrap().level, NoticeLevel::Warning);
    assert_eq!(app.path_of("a"), "x.y");
    assert_eq!(app.client.snapshot().generation, 2);
}
