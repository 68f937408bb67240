//! Testing utilities for the RCA sync workspace
//!
//! Shared fixtures, proptest strategies and tracing setup.

#![allow(missing_docs)]

use proptest::prelude::*;
use rca_checklist::{catalogue, Category, OTHER};
use rca_scat::ScatField;
use rca_sync::SyncState;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; later calls are no-ops
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rca_sync=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Every (category, statement) pair the checklist offers
pub fn catalogue_pairs() -> Vec<(Category, &'static str)> {
    Category::ALL
        .into_iter()
        .flat_map(|category| catalogue(category).iter().map(move |s| (category, *s)))
        .collect()
}

/// State an investigator might leave behind: a problem statement with a
/// manual chain, operator prose in every SCAT column and one ticked item.
pub fn investigated_state() -> SyncState {
    let (state, problem) = SyncState::new().insert_root("รถบรรทุกเสียหลักตกข้างทาง (Truck ran off the road)");
    let (state, _) = state
        .insert_chain(Some(problem), &["Driver braked late", "Driver looked at phone", ""])
        .unwrap();

    let state = ScatField::ALL.into_iter().fold(state, |state, field| {
        state.with_scat_text(field, &format!("{field} notes\n\n- hand-written point"))
    });

    rca_sync::SyncEngine::default()
        .apply_toggle(&state, Category::TruckCondition, catalogue(Category::TruckCondition)[0])
        .unwrap()
}

/// Any catalogued (category, statement) pair
pub fn any_pair() -> impl Strategy<Value = (Category, &'static str)> {
    proptest::sample::select(catalogue_pairs())
}

/// The shared "Other" item under any category
pub fn other_pair() -> impl Strategy<Value = (Category, &'static str)> {
    proptest::sample::select(Category::ALL.to_vec()).prop_map(|category| (category, OTHER))
}

/// A state reached by toggling a random sequence of catalogue pairs on top
/// of [`investigated_state`]; "Other" is drawn often so it ends up ticked
/// in several categories at once
pub fn any_state() -> impl Strategy<Value = SyncState> {
    let toggle = prop_oneof![3 => any_pair(), 2 => other_pair()];
    proptest::collection::vec(toggle, 0..12).prop_map(|pairs| {
        let engine = rca_sync::SyncEngine::default();
        pairs
            .into_iter()
            .fold(investigated_state(), |state, (category, statement)| {
                engine.apply_toggle(&state, category, statement).unwrap()
            })
    })
}
