use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rca_checklist::Category;
use rca_scat::bullet;
use rca_sync::{CategoryMapping, SyncEngine, SyncState};
use rca_test_utils::{any_pair, any_state, init_tracing, investigated_state};

/// Every node and bullet carrying `statement` is explained by the checklist,
/// and `category` itself does not tick it yet
fn accounted_for(state: &SyncState, category: Category, statement: &str) -> bool {
    let field = CategoryMapping::target(category);
    let ticked = state.root_cause.categories_of(statement).next().is_some();
    let fed = CategoryMapping::sources(field).any(|c| state.root_cause.contains(c, statement));

    !state.root_cause.contains(category, statement)
        && state.forest.find_by_text(statement).is_some() == ticked
        && state.scat.block(field).contains_bullet(statement) == fed
}

proptest! {
    #[test]
    fn prop_toggle_twice_restores_state(state in any_state(), (category, statement) in any_pair()) {
        prop_assume!(accounted_for(&state, category, statement));
        let engine = SyncEngine::default();

        let on = engine.apply_toggle(&state, category, statement).unwrap();
        let off = engine.apply_toggle(&on, category, statement).unwrap();

        prop_assert_eq!(off, state);
    }

    #[test]
    fn prop_toggle_off_then_on_restores_presence(state in any_state(), pick in any::<prop::sample::Index>()) {
        let ticked: Vec<(Category, String)> = Category::ALL
            .into_iter()
            .flat_map(|c| state.root_cause.selected(c).iter().map(move |s| (c, s.clone())))
            .filter(|(_, s)| state.root_cause.categories_of(s).count() == 1)
            .collect();
        prop_assume!(!ticked.is_empty());
        let (category, statement) = pick.get(&ticked).clone();
        let statement = statement.as_str();
        let engine = SyncEngine::default();
        let field = CategoryMapping::target(category);

        let off = engine.apply_toggle(&state, category, statement).unwrap();
        prop_assert!(!off.root_cause.contains(category, statement));
        prop_assert!(off.forest.find_by_text(statement).is_none());
        prop_assert!(!off.scat.block(field).contains_bullet(statement));

        let on = engine.apply_toggle(&off, category, statement).unwrap();
        prop_assert_eq!(&on.root_cause, &state.root_cause);
        prop_assert!(on.forest.find_by_text(statement).is_some());
        prop_assert_eq!(on.scat.block(field).count_bullet(statement), 1);
    }

    #[test]
    fn prop_toggle_keeps_shared_statement_consistent(state in any_state(), (category, statement) in any_pair()) {
        let engine = SyncEngine::default();
        prop_assume!(engine.audit(&state).is_empty());

        let next = engine.apply_toggle(&state, category, statement).unwrap();
        prop_assert!(engine.audit(&next).is_empty());
    }

    #[test]
    fn prop_added_statement_is_in_all_three_views(state in any_state(), (category, statement) in any_pair()) {
        prop_assume!(!state.root_cause.contains(category, statement));
        let engine = SyncEngine::default();

        let next = engine.apply_toggle(&state, category, statement).unwrap();

        prop_assert!(next.root_cause.contains(category, statement));
        prop_assert!(next.forest.find_by_text(statement).is_some());
        prop_assert_eq!(
            next.scat.block(CategoryMapping::target(category)).count_bullet(statement),
            1
        );
    }

    #[test]
    fn prop_toggle_never_touches_other_columns_or_manual_lines(
        state in any_state(),
        (category, statement) in any_pair(),
    ) {
        let engine = SyncEngine::default();
        let target = CategoryMapping::target(category);
        let line = bullet(statement);

        let next = engine.apply_toggle(&state, category, statement).unwrap();

        for (field, block) in next.scat.iter() {
            let before: Vec<&String> = state.scat.block(field).lines().iter().filter(|l| **l != line).collect();
            let after: Vec<&String> = block.lines().iter().filter(|l| **l != line).collect();
            prop_assert_eq!(&after, &before);
            if field != target {
                prop_assert_eq!(block, state.scat.block(field));
            }
        }
    }
}

#[test]
fn toggle_preserves_manual_tree_nodes() {
    init_tracing();
    let engine = SyncEngine::default();
    let state = investigated_state();
    let manual: Vec<_> = state
        .tree_listing()
        .into_iter()
        .filter(|e| e.parent.is_some())
        .map(|e| (e.id, e.text.to_string()))
        .collect();

    let next = engine
        .apply_toggle(&state, Category::CompanyPolicy, rca_checklist::OTHER)
        .unwrap();

    for (id, text) in manual {
        assert_eq!(next.forest.get(id).map(|n| n.text.clone()), Some(text));
        assert_eq!(next.forest.parent_of(id), state.forest.parent_of(id));
    }
}
