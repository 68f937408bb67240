//! Checklist category to SCAT column mapping

use rca_checklist::Category;
use rca_scat::ScatField;

/// Static, total mapping from checklist category to SCAT column
///
/// The `match` is exhaustive, so a new [`Category`] variant does not compile
/// until it is given a column.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMapping;

impl CategoryMapping {
    /// Column that receives bullet lines for `category`
    #[inline]
    #[must_use]
    pub const fn target(category: Category) -> ScatField {
        match category {
            Category::PersonalFactors => ScatField::BasicCauses,
            Category::RouteHazardous | Category::TruckCondition | Category::Environment => {
                ScatField::ImmediateCauses
            }
            Category::CompanyPolicy => ScatField::LackOfControl,
        }
    }

    /// Categories that write into `field` (empty for operator-only columns)
    pub fn sources(field: ScatField) -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(move |category| Self::target(*category) == field)
    }
}
