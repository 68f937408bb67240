use proptest::prelude::*;
use rca_whywhy::{Forest, NodeId, MAX_DEPTH};

/// Grow a forest from a script of (parent pick, text) steps.
/// `None` inserts a root; `Some(i)` inserts under the i-th existing node.
fn grow(script: &[(Option<usize>, String)]) -> (Forest, Vec<NodeId>) {
    let mut forest = Forest::new();
    let mut ids = Vec::new();
    for (pick, text) in script {
        let (next, id) = match pick {
            Some(i) if !ids.is_empty() => forest.insert_child(ids[i % ids.len()], text.clone()).unwrap(),
            _ => forest.insert_root(text.clone()),
        };
        forest = next;
        ids.push(id);
    }
    (forest, ids)
}

fn script() -> impl Strategy<Value = Vec<(Option<usize>, String)>> {
    proptest::collection::vec((proptest::option::of(0..64usize), "[a-z]{0,6}"), 1..40)
}

proptest! {
    #[test]
    fn prop_inserted_child_hangs_under_parent(
        steps in script(),
        pick in 0..64usize,
        text in "[A-Z]{8}",
    ) {
        let (forest, ids) = grow(&steps);
        let parent = ids[pick % ids.len()];

        let (next, child) = forest.insert_child(parent, text.clone()).unwrap();

        let found = next.find_by_text(&text).unwrap();
        prop_assert_eq!(found, child);
        prop_assert_eq!(next.parent_of(found), Some(parent));
        prop_assert_eq!(next.len(), forest.len() + 1);
    }

    #[test]
    fn prop_removed_subtree_is_unreachable(steps in script(), pick in 0..64usize) {
        let (forest, ids) = grow(&steps);
        let target = ids[pick % ids.len()];
        let doomed: Vec<NodeId> = forest
            .to_records()
            .iter()
            .filter(|r| r.id == target || is_descendant(&forest, r.id, target))
            .map(|r| r.id)
            .collect();

        let next = forest.remove_node(target).unwrap();

        for id in &doomed {
            prop_assert!(!next.contains(*id));
        }
        prop_assert_eq!(next.len(), forest.len() - doomed.len());
        for id in ids.iter().filter(|id| !doomed.contains(id)) {
            prop_assert_eq!(
                next.get(*id).map(|n| n.text.clone()),
                forest.get(*id).map(|n| n.text.clone())
            );
            prop_assert_eq!(next.parent_of(*id), forest.parent_of(*id));
        }
    }

    #[test]
    fn prop_update_text_preserves_shape(steps in script(), pick in 0..64usize) {
        let (forest, ids) = grow(&steps);
        let target = ids[pick % ids.len()];

        let next = forest.update_text(target, "edited").unwrap();

        let before: Vec<_> = forest.walk().into_iter().map(|e| (e.id, e.parent, e.depth)).collect();
        let after: Vec<_> = next.walk().into_iter().map(|e| (e.id, e.parent, e.depth)).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(next.get(target).map(|n| n.text.as_str()), Some("edited"));
    }

    #[test]
    fn prop_records_round_trip(steps in script()) {
        let (forest, _) = grow(&steps);
        let back = Forest::from_records(&forest.to_records(), MAX_DEPTH).unwrap();
        prop_assert_eq!(back, forest);
    }
}

fn is_descendant(forest: &Forest, id: NodeId, ancestor: NodeId) -> bool {
    let mut cursor = forest.parent_of(id);
    while let Some(parent) = cursor {
        if parent == ancestor {
            return true;
        }
        cursor = forest.parent_of(parent);
    }
    false
}
