//! Checklist categories

use crate::error::ChecklistError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The five root-cause checklist groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    PersonalFactors,
    RouteHazardous,
    TruckCondition,
    Environment,
    CompanyPolicy,
}

impl Category {
    /// All categories in form order
    pub const ALL: [Self; 5] = [
        Self::PersonalFactors,
        Self::RouteHazardous,
        Self::TruckCondition,
        Self::Environment,
        Self::CompanyPolicy,
    ];

    /// Stable key used by the host form and persistence
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalFactors => "personalFactors",
            Self::RouteHazardous => "routeHazardous",
            Self::TruckCondition => "truckCondition",
            Self::Environment => "environment",
            Self::CompanyPolicy => "companyPolicy",
        }
    }

    /// Heading shown above the group
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalFactors => "ปัจจัยส่วนบุคคล (Personal Factors)",
            Self::RouteHazardous => "เส้นทางอันตราย (Route Hazards)",
            Self::TruckCondition => "สภาพรถ (Truck Condition)",
            Self::Environment => "สภาพแวดล้อม (Environment)",
            Self::CompanyPolicy => "นโยบายบริษัท (Company Policy)",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ChecklistError::UnknownCategory(s.to_string()))
    }
}
