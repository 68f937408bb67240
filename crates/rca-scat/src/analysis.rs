//! The full SCAT grid

use crate::block::ScatBlock;
use crate::field::ScatField;
use serde::{Deserialize, Serialize};

/// Five SCAT columns as kept on the incident report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScatAnalysis {
    pub lack_of_control: ScatBlock,
    pub basic_causes: ScatBlock,
    pub immediate_causes: ScatBlock,
    pub incident: ScatBlock,
    pub accident: ScatBlock,
}

impl ScatAnalysis {
    /// Empty grid
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow one column
    #[must_use]
    pub fn block(&self, field: ScatField) -> &ScatBlock {
        match field {
            ScatField::LackOfControl => &self.lack_of_control,
            ScatField::BasicCauses => &self.basic_causes,
            ScatField::ImmediateCauses => &self.immediate_causes,
            ScatField::Incident => &self.incident,
            ScatField::Accident => &self.accident,
        }
    }

    /// Copy of the grid with one column replaced
    #[must_use]
    pub fn with_block(&self, field: ScatField, block: ScatBlock) -> Self {
        let mut next = self.clone();
        *next.block_mut(field) = block;
        next
    }

    /// Copy of the grid with the bullet line appended to `field`
    #[must_use]
    pub fn append_bullet(&self, field: ScatField, statement: &str) -> Self {
        self.with_block(field, self.block(field).append_bullet_line(statement))
    }

    /// Copy of the grid with the bullet line removed from `field`
    #[must_use]
    pub fn remove_bullet(&self, field: ScatField, statement: &str) -> Self {
        self.with_block(field, self.block(field).remove_bullet_line(statement))
    }

    /// Columns in grid order
    pub fn iter(&self) -> impl Iterator<Item = (ScatField, &ScatBlock)> {
        ScatField::ALL.into_iter().map(move |field| (field, self.block(field)))
    }

    fn block_mut(&mut self, field: ScatField) -> &mut ScatBlock {
        match field {
            ScatField::LackOfControl => &mut self.lack_of_control,
            ScatField::BasicCauses => &mut self.basic_causes,
            ScatField::ImmediateCauses => &mut self.immediate_causes,
            ScatField::Incident => &mut self.incident,
            ScatField::Accident => &mut self.accident,
        }
    }
}
