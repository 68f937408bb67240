//! Per-incident checklist selection

use crate::catalogue::{catalogue_position, is_catalogued};
use crate::category::Category;
use crate::error::ChecklistError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Toggle `statement` in `set`
///
/// Returns the new set and `true` if the statement was added, `false` if it
/// was removed. Removal keeps the order of the remaining elements.
#[must_use]
pub fn toggle_statement(set: &IndexSet<String>, statement: &str) -> (IndexSet<String>, bool) {
    let mut next = set.clone();
    if next.shift_remove(statement) {
        (next, false)
    } else {
        next.insert(statement.to_string());
        (next, true)
    }
}

/// Selected statements for each checklist category
///
/// Sets compare without regard to order; insertion order is kept only so
/// persisted documents stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RootCauseAnalysis {
    pub personal_factors: IndexSet<String>,
    pub route_hazardous: IndexSet<String>,
    pub truck_condition: IndexSet<String>,
    pub environment: IndexSet<String>,
    pub company_policy: IndexSet<String>,

    /// Elaboration text for the "Other" item, per category
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub other_details: BTreeMap<Category, String>,
}

impl RootCauseAnalysis {
    /// Empty checklist
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected statements in one category
    #[must_use]
    pub fn selected(&self, category: Category) -> &IndexSet<String> {
        match category {
            Category::PersonalFactors => &self.personal_factors,
            Category::RouteHazardous => &self.route_hazardous,
            Category::TruckCondition => &self.truck_condition,
            Category::Environment => &self.environment,
            Category::CompanyPolicy => &self.company_policy,
        }
    }

    /// Check if `statement` is selected under `category`
    #[inline]
    #[must_use]
    pub fn contains(&self, category: Category, statement: &str) -> bool {
        self.selected(category).contains(statement)
    }

    /// Categories in which `statement` is selected
    pub fn categories_of<'a>(&'a self, statement: &'a str) -> impl Iterator<Item = Category> + 'a {
        Category::ALL
            .into_iter()
            .filter(move |category| self.contains(*category, statement))
    }

    /// Check if nothing is selected anywhere
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL
            .into_iter()
            .all(|category| self.selected(category).is_empty())
    }

    /// Copy of the checklist with `statement` toggled under `category`
    ///
    /// Returns `true` alongside if the statement is now selected.
    #[must_use]
    pub fn toggle(&self, category: Category, statement: &str) -> (Self, bool) {
        let (set, added) = toggle_statement(self.selected(category), statement);
        let mut next = self.clone();
        *next.selected_mut(category) = set;
        (next, added)
    }

    /// Selection in catalogue order, for rendering
    ///
    /// Uncatalogued entries (left over from older catalogues) follow in
    /// insertion order.
    #[must_use]
    pub fn sorted_selection(&self, category: Category) -> Vec<&str> {
        let mut items: Vec<&str> = self.selected(category).iter().map(String::as_str).collect();
        items.sort_by_key(|item| catalogue_position(category, item).unwrap_or(usize::MAX));
        items
    }

    /// Free-text detail attached to the "Other" item
    #[must_use]
    pub fn other_detail(&self, category: Category) -> Option<&str> {
        self.other_details.get(&category).map(String::as_str)
    }

    /// Copy with the "Other" detail replaced; empty text clears it
    #[must_use]
    pub fn with_other_detail(&self, category: Category, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let mut next = self.clone();
        if detail.is_empty() {
            next.other_details.remove(&category);
        } else {
            next.other_details.insert(category, detail);
        }
        next
    }

    /// Check every selected statement against the catalogue
    ///
    /// # Errors
    /// Returns [`ChecklistError::UnknownStatement`] for the first stray entry
    pub fn validate(&self) -> Result<(), ChecklistError> {
        for category in Category::ALL {
            if let Some(stray) = self
                .selected(category)
                .iter()
                .find(|statement| !is_catalogued(category, statement))
            {
                return Err(ChecklistError::unknown_statement(category, stray.as_str()));
            }
        }
        Ok(())
    }

    fn selected_mut(&mut self, category: Category) -> &mut IndexSet<String> {
        match category {
            Category::PersonalFactors => &mut self.personal_factors,
            Category::RouteHazardous => &mut self.route_hazardous,
            Category::TruckCondition => &mut self.truck_condition,
            Category::Environment => &mut self.environment,
            Category::CompanyPolicy => &mut self.company_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{catalogue, OTHER};
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_statement_adds_then_removes() {
        let empty = IndexSet::new();
        let (one, added) = toggle_statement(&empty, "a");
        assert!(added);
        assert!(one.contains("a"));

        let (back, added) = toggle_statement(&one, "a");
        assert!(!added);
        assert_eq!(back, empty);
    }

    #[test]
    fn toggle_removal_keeps_order() {
        let set: IndexSet<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let (next, _) = toggle_statement(&set, "b");
        let order: Vec<_> = next.iter().map(String::as_str).collect();
        assert_eq!(order, vec!["a", "c"]);
    }

    #[test]
    fn toggle_touches_one_category() {
        let (rca, added) = RootCauseAnalysis::new().toggle(Category::CompanyPolicy, OTHER);
        assert!(added);
        assert!(rca.contains(Category::CompanyPolicy, OTHER));
        assert!(!rca.contains(Category::PersonalFactors, OTHER));
        assert_eq!(
            rca.categories_of(OTHER).collect::<Vec<_>>(),
            vec![Category::CompanyPolicy]
        );
    }

    #[test]
    fn double_toggle_restores() {
        let start = RootCauseAnalysis::new()
            .toggle(Category::Environment, catalogue(Category::Environment)[1])
            .0;
        let statement = catalogue(Category::Environment)[0];
        let (on, _) = start.toggle(Category::Environment, statement);
        let (off, _) = on.toggle(Category::Environment, statement);
        assert_eq!(off, start);
    }

    #[test]
    fn sorted_selection_follows_catalogue() {
        let items = catalogue(Category::TruckCondition);
        let rca = RootCauseAnalysis::new()
            .toggle(Category::TruckCondition, items[3])
            .0
            .toggle(Category::TruckCondition, "legacy item")
            .0
            .toggle(Category::TruckCondition, items[0])
            .0;
        assert_eq!(
            rca.sorted_selection(Category::TruckCondition),
            vec![items[0], items[3], "legacy item"]
        );
    }

    #[test]
    fn other_detail_set_and_clear() {
        let rca = RootCauseAnalysis::new().with_other_detail(Category::Environment, "Flooded underpass");
        assert_eq!(rca.other_detail(Category::Environment), Some("Flooded underpass"));
        let cleared = rca.with_other_detail(Category::Environment, "");
        assert_eq!(cleared.other_detail(Category::Environment), None);
    }

    #[test]
    fn validate_reports_stray_entry() {
        let ok = RootCauseAnalysis::new().toggle(Category::RouteHazardous, OTHER).0;
        assert!(ok.validate().is_ok());

        let bad = ok.toggle(Category::RouteHazardous, "typed by hand").0;
        assert_eq!(
            bad.validate(),
            Err(ChecklistError::unknown_statement(
                Category::RouteHazardous,
                "typed by hand"
            ))
        );
    }

    #[test]
    fn serde_uses_host_shape() {
        let rca = RootCauseAnalysis::new().toggle(Category::PersonalFactors, OTHER).0;
        let json = serde_json::to_value(&rca).unwrap();
        assert_eq!(json["personalFactors"][0], OTHER);
        assert!(json.get("otherDetails").is_none());

        let back: RootCauseAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(back, rca);
        assert!(RootCauseAnalysis::new().is_empty());
        assert!(!rca.is_empty());
    }
}
