//! Integration tests for forest derivation from fetched items.

mod helpers;

use placehub_core::types::NodeId;
use placehub_entity::tree::NodeKind;

#[tokio::test]
async fn test_root_sentinel_item_sits_beside_root_folder() {
    let app = helpers::TestApp::new(&[("m1", "root")]).await;
    let snapshot = app.client.snapshot();
    let roots = &snapshot.forest.roots;

    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].kind(), NodeKind::Folder);
    assert_eq!(roots[0].name(), "root");
    assert!(roots[0].children().is_empty());
    assert_eq!(roots[1].kind(), NodeKind::Leaf);
    assert_eq!(roots[1].item().unwrap().id.as_str(), "m1");
}

#[tokio::test]
async fn test_items_with_same_path_share_one_folder() {
    let app = helpers::TestApp::new(&[("m2", "team.web"), ("m3", "team.web")]).await;
    let snapshot = app.client.snapshot();
    let forest = &snapshot.forest;

    let web = forest.find(&NodeId::folder("team.web")).unwrap();
    assert_eq!(web.name(), "web");
    assert_eq!(web.children().len(), 2);
    for leaf in ["item-m2", "item-m3"] {
        assert_eq!(
            forest.entry(&NodeId::from(leaf)).unwrap().parent,
            Some(NodeId::folder("team.web"))
        );
    }
    assert_eq!(
        forest.entry(&NodeId::folder("team.web")).unwrap().parent,
        Some(NodeId::folder("team"))
    );
}

#[tokio::test]
async fn test_every_fetched_item_is_exactly_one_leaf() {
    let seed = [
        ("a", "root"),
        ("b", "root"),
        ("c", "ops"),
        ("d", "ops.db"),
        ("e", "ops.db.replica"),
        ("f", "team.web"),
        ("g", "team.web"),
        ("h", "broken..path"),
    ];
    let app = helpers::TestApp::new(&seed).await;
    let snapshot = app.client.snapshot();

    assert_eq!(snapshot.forest.leaf_count(), seed.len());
    let mut ids: Vec<&str> = snapshot
        .forest
        .leaves()
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
}

#[tokio::test]
async fn test_node_ids_are_stable_across_rebuilds() {
    let app = helpers::TestApp::new(&[("a", "team.web"), ("b", "ops")]).await;
    let selection = vec![NodeId::folder("team.web"), NodeId::from("item-b")];

    let first = app.client.snapshot();
    let second = app.client.refresh().await.unwrap();

    assert_eq!(second.generation, first.generation + 1);
    assert_eq!(second.retain_selection(&selection), selection);
}
