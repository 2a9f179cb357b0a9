//! Integration tests for drag-and-drop moves.

mod helpers;

use std::sync::Arc;

use placehub_core::ErrorKind;
use placehub_core::types::{ContainerId, ItemId, NodeId};
use placehub_service::{ItemPath, PlacementResolver, ReconciliationClient, TreeState};
use placehub_store::memory::MemoryItemStore;

#[tokio::test]
async fn test_move_to_top_level_assigns_root_sentinel() {
    let app = helpers::TestApp::new(&[("a", "team.web"), ("b", "ops.db")]).await;

    let report = app
        .client
        .move_items(&[NodeId::from("item-a"), NodeId::from("item-b")], None, 5)
        .await;

    assert!(report.is_complete());
    assert_eq!(report.new_path.as_deref(), Some("root"));
    assert_eq!(app.path_of("a"), "root");
    assert_eq!(app.path_of("b"), "root");
    let snapshot = app.client.snapshot();
    assert!(snapshot.forest.entry(&NodeId::from("item-a")).unwrap().parent.is_none());
}

#[tokio::test]
async fn test_drop_index_does_not_change_destination() {
    let app = helpers::TestApp::new(&[("a", "root"), ("b", "root"), ("t", "team.web")]).await;
    let target = NodeId::folder("team.web");
    let before = app.client.snapshot();
    let forest = &before.forest;
    assert_eq!(
        PlacementResolver::resolve(forest, &NodeId::from("item-a"), Some(&target), 0),
        PlacementResolver::resolve(forest, &NodeId::from("item-a"), Some(&target), 99)
    );

    app.client
        .move_items(&[NodeId::from("item-b")], Some(&target), 99)
        .await;
    app.client
        .move_items(&[NodeId::from("item-a")], Some(&target), 0)
        .await;

    // Order within the folder follows the store's listing, not the drop index.
    let snapshot = app.client.snapshot();
    let web = snapshot.forest.find(&target).unwrap();
    let order: Vec<&str> = web.children().iter().map(|n| n.id().as_str()).collect();
    assert_eq!(order, vec!["item-a", "item-b", "item-t"]);
}

#[tokio::test]
async fn test_partial_failure_keeps_earlier_updates_and_skips_later() {
    let app =
        helpers::TestApp::new(&[("a", "inbox"), ("b", "inbox"), ("c", "inbox"), ("d", "done.q1")])
            .await;
    app.store.fail_updates_for("b");
    let mut notices = app.client.state().subscribe_notices();

    let target = NodeId::folder("done.q1");
    let report = app
        .client
        .move_items(
            &[
                NodeId::from("item-a"),
                NodeId::from("item-b"),
                NodeId::from("item-c"),
            ],
            Some(&target),
            0,
        )
        .await;

    assert_eq!(app.path_of("a"), "done.q1");
    assert_eq!(app.path_of("b"), "inbox");
    assert_eq!(app.path_of("c"), "inbox");
    assert_eq!(report.not_attempted, vec![ItemId::from("c")]);
    assert!(report.refresh_error.is_none());

    // The re-fetched tree reflects exactly what the store accepted.
    let snapshot = app.client.snapshot();
    assert_eq!(
        snapshot.forest.entry(&NodeId::from("item-a")).unwrap().parent,
        Some(target.clone())
    );
    assert_eq!(
        snapshot.forest.entry(&NodeId::from("item-c")).unwrap().parent,
        None
    );

    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.kind, Some(ErrorKind::RemoteUpdateFailed));
    assert!(notice.message.contains("Updated 1 of 3"));
}

#[tokio::test]
async fn test_all_items_take_first_resolved_path() {
    let app = helpers::TestApp::new(&[("a", "x.y"), ("b", "p.q"), ("t", "dest")]).await;
    let report = app
        .client
        .move_items(
            &[NodeId::from("item-a"), NodeId::from("item-b")],
            Some(&NodeId::folder("dest")),
            1,
        )
        .await;
    assert_eq!(report.applied.len(), 2);
    assert_eq!(app.path_of("a"), "dest");
    assert_eq!(app.path_of("b"), "dest");
}

#[tokio::test]
async fn test_unknown_target_falls_back_to_root() {
    let app = helpers::TestApp::new(&[("a", "x.y")]).await;
    let report = app
        .client
        .move_items(&[NodeId::from("item-a")], Some(&NodeId::folder("gone")), 0)
        .await;
    assert_eq!(report.new_path.as_deref(), Some("root"));
    assert_eq!(app.path_of("a"), "root");
}

#[tokio::test]
async fn test_last_completed_read_wins() {
    let memory = MemoryItemStore::with_items([helpers::item("a", "old")]);
    let (gated, release) = helpers::GatedStore::new(memory.clone());
    let client = ReconciliationClient::new(
        Arc::new(gated),
        ContainerId::from(helpers::CONTAINER),
        Arc::new(TreeState::default()),
    );

    // A slow refresh reads "old" now but answers only after the move.
    let slow = tokio::spawn({
        let client = client.clone();
        async move { client.refresh().await }
    });
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    let direct = ReconciliationClient::new(
        Arc::new(memory.clone()),
        ContainerId::from(helpers::CONTAINER),
        client.state().clone(),
    );
    direct
        .set_path(&ItemId::from("a"), &ItemPath::parse("new").unwrap())
        .await;
    assert_eq!(client.snapshot().items[0].path, "new");

    release.send(()).unwrap();
    slow.await.unwrap().unwrap();

    // The stale read completed last, so it is what the view shows.
    assert_eq!(memory.get(&ItemId::from("a")).unwrap().path, "new");
    assert_eq!(client.snapshot().items[0].path, "old");
}
