use pretty_assertions::assert_eq;
use rca_checklist::{catalogue, Category, OTHER};
use rca_scat::{bullet, ScatField};
use rca_sync::{SyncConfig, SyncEngine, SyncState};
use rca_test_utils::{init_tracing, investigated_state};

#[test]
fn other_company_policy_round_trip_in_prose() {
    init_tracing();
    let engine = SyncEngine::default();
    let prose = "Dispatcher skipped the rest-hour check\n- hand-written point\n";
    let state = SyncState::new().with_scat_text(ScatField::LackOfControl, prose);

    let on = engine
        .apply_toggle(&state, Category::CompanyPolicy, OTHER)
        .unwrap();
    assert_eq!(
        on.block_lines(ScatField::LackOfControl).last(),
        Some(&bullet(OTHER))
    );
    assert_eq!(on.forest.roots().len(), 1);
    assert_eq!(on.forest.roots()[0].text, OTHER);

    let off = engine.apply_toggle(&on, Category::CompanyPolicy, OTHER).unwrap();
    assert!(off.root_cause.selected(Category::CompanyPolicy).is_empty());
    assert!(off.forest.is_empty());
    assert_eq!(off.scat.block(ScatField::LackOfControl).to_text(), prose);
}

#[test]
fn removing_one_item_keeps_order_of_the_rest() {
    let engine = SyncEngine::default();
    let truck = catalogue(Category::TruckCondition);
    let route = catalogue(Category::RouteHazardous);

    let state = investigated_state();
    let state = engine.apply_toggle(&state, Category::RouteHazardous, route[0]).unwrap();
    let state = engine.apply_toggle(&state, Category::TruckCondition, truck[2]).unwrap();
    let before: Vec<String> = state
        .block_lines(ScatField::ImmediateCauses)
        .iter()
        .filter(|l| **l != bullet(route[0]))
        .cloned()
        .collect();

    let state = engine.apply_toggle(&state, Category::RouteHazardous, route[0]).unwrap();
    assert_eq!(state.block_lines(ScatField::ImmediateCauses), &before[..]);
    assert!(state.forest.find_by_text(truck[0]).is_some());
    assert!(state.forest.find_by_text(truck[2]).is_some());
    assert!(engine.audit(&state).is_empty());
}

#[test]
fn host_document_survives_a_json_round_trip_between_toggles() {
    let engine = SyncEngine::default();
    let env = catalogue(Category::Environment)[1];
    let state = engine
        .apply_toggle(&investigated_state(), Category::Environment, env)
        .unwrap();

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"rootCause\""));
    assert!(json.contains("\"immediateCauses\""));
    let reloaded: SyncState = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, state);

    let off = engine.apply_toggle(&reloaded, Category::Environment, env).unwrap();
    assert!(!off.scat.block(ScatField::ImmediateCauses).contains_bullet(env));
    assert!(off.forest.find_by_text(env).is_none());
}

#[test]
fn configured_engine_from_toml() {
    let config = SyncConfig::from_toml_str(
        r#"
        max_depth = 16
        invalid_toggle = "ignore"
        prune_same_text = "roots_only"
        "#,
    )
    .unwrap();
    let engine = SyncEngine::new(config);
    let state = investigated_state();

    let same = engine
        .apply_toggle(&state, Category::PersonalFactors, "not on the list")
        .unwrap();
    assert_eq!(same, state);
}
