//! Integration tests for item creation and deletion.

mod helpers;

use placehub_core::ErrorKind;
use placehub_core::types::{ItemId, NodeId};

#[tokio::test]
async fn test_create_inside_folder_uses_folder_path() {
    let app = helpers::TestApp::new(&[("a", "team.web")]).await;

    let outcome = app
        .client
        .create_under(Some(&NodeId::folder("team.web")), "Fresh")
        .await
        .unwrap();

    let created = outcome.value.expect("Item should be created");
    assert_eq!(created.path, "team.web");
    let snapshot = app.client.snapshot();
    let web = snapshot.forest.find(&NodeId::folder("team.web")).unwrap();
    assert_eq!(web.children().len(), 2);
    assert!(snapshot.forest.contains(&NodeId::item(&created.id)));
}

#[tokio::test]
async fn test_create_at_top_level_uses_root_sentinel() {
    let app = helpers::TestApp::new(&[]).await;

    let outcome = app.client.create_under(None, "Loose").await.unwrap();

    assert_eq!(outcome.value.unwrap().path, "root");
    let snapshot = app.client.snapshot();
    assert_eq!(snapshot.forest.leaf_count(), 1);
    assert!(snapshot.forest.contains(&NodeId::folder("root")));
}

#[tokio::test]
async fn test_create_rejects_blank_name_before_network() {
    let app = helpers::TestApp::new(&[]).await;
    let err = app.client.create_under(None, "  ").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(app.client.snapshot().generation, 1);
}

#[tokio::test]
async fn test_delete_refreshes_tree() {
    let app = helpers::TestApp::new(&[("a", "x.y"), ("b", "x.y")]).await;

    let outcome = app.client.delete(&ItemId::from("a")).await;

    assert!(outcome.is_complete());
    let snapshot = app.client.snapshot();
    assert_eq!(snapshot.forest.leaf_count(), 1);
    assert!(!snapshot.forest.contains(&NodeId::from("item-a")));
}

#[tokio::test]
async fn test_delete_failure_is_reported() {
    let app = helpers::TestApp::new(&[("a", "x")]).await;
    app.store.fail_updates_for("a");

    let outcome = app.client.delete(&ItemId::from("a")).await;

    assert_eq!(
        outcome.error.unwrap().kind,
        ErrorKind::RemoteUpdateFailed
    );
    assert_eq!(app.client.snapshot().forest.leaf_count(), 1);
}

#[tokio::test]
async fn test_delete_of_unknown_item_reports_remote_update_failure() {
    let app = helpers::TestApp::new(&[("a", "x")]).await;

    let outcome = app.client.delete(&ItemId::from("ghost")).await;

    // The store answers NotFound; the client reports every rejected write
    // the same way.
    assert_eq!(
        outcome.error.unwrap().kind,
        ErrorKind::RemoteUpdateFailed
    );
    assert!(outcome.refresh_error.is_none());
    assert_eq!(app.client.snapshot().forest.leaf_count(), 1);
}

#[tokio::test]
async fn test_create_sends_display_name_unchanged() {
    let app = helpers::TestApp::new(&[]).await;

    let outcome = app.client.create_under(None, " Draft ").await.unwrap();

    let created = outcome.value.unwrap();
    assert_eq!(created.display_name, " Draft ");
    assert_eq!(app.name_of(created.id.as_str()), " Draft ");
}
