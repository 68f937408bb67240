//! SCAT column keys

use crate::error::ScatError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The five SCAT columns, left (management) to right (outcome)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScatField {
    LackOfControl,
    BasicCauses,
    ImmediateCauses,
    Incident,
    Accident,
}

impl ScatField {
    /// All columns in grid order
    pub const ALL: [Self; 5] = [
        Self::LackOfControl,
        Self::BasicCauses,
        Self::ImmediateCauses,
        Self::Incident,
        Self::Accident,
    ];

    /// Stable key used by the host form and persistence
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LackOfControl => "lackOfControl",
            Self::BasicCauses => "basicCauses",
            Self::ImmediateCauses => "immediateCauses",
            Self::Incident => "incident",
            Self::Accident => "accident",
        }
    }

    /// Whether checklist toggles may write into this column
    ///
    /// `incident` and `accident` are operator-authored only.
    #[inline]
    #[must_use]
    pub fn is_sync_target(self) -> bool {
        matches!(
            self,
            Self::LackOfControl | Self::BasicCauses | Self::ImmediateCauses
        )
    }
}

impl Display for ScatField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScatField {
    type Err = ScatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ScatError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for field in ScatField::ALL {
            assert_eq!(field.as_str().parse::<ScatField>().unwrap(), field);
        }
    }

    #[test]
    fn serde_uses_host_keys() {
        let json = serde_json::to_string(&ScatField::ImmediateCauses).unwrap();
        assert_eq!(json, "\"immediateCauses\"");
    }

    #[test]
    fn outcome_columns_are_not_sync_targets() {
        assert!(!ScatField::Incident.is_sync_target());
        assert!(!ScatField::Accident.is_sync_target());
        assert!(ScatField::BasicCauses.is_sync_target());
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(
            "Accident".parse::<ScatField>(),
            Err(ScatError::UnknownField(_))
        ));
    }
}
