use serde::{Deserialize, Serialize};

use super::grade::Grade;
use crate::utilities::constants::MISSING_PRICE;

/// Graded prices as printed by the site, e.g. `$123.45`, or `N/A` when the page has none.
///
/// The fields are fixed so a table can never be partial or carry extra grades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub psa_8: String,
    pub psa_9: String,
    pub psa_10: String,
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable {
            psa_8: MISSING_PRICE.to_string(),
            psa_9: MISSING_PRICE.to_string(),
            psa_10: MISSING_PRICE.to_string(),
        }
    }
}

impl PriceTable {
    /// Builds a table by asking `lookup` for every grade. Missing or blank values become `N/A`.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(Grade) -> Option<String>,
    {
        let mut table = PriceTable::default();
        for grade in Grade::ALL {
            if let Some(price) = lookup(grade).filter(|p| !p.trim().is_empty()) {
                *table.slot_mut(grade) = price.trim().to_string();
            }
        }
        table
    }

    pub fn get(&self, grade: Grade) -> &str {
        match grade {
            Grade::Psa8 => &self.psa_8,
            Grade::Psa9 => &self.psa_9,
            Grade::Psa10 => &self.psa_10,
        }
    }

    fn slot_mut(&mut self, grade: Grade) -> &mut String {
        match grade {
            Grade::Psa8 => &mut self.psa_8,
            Grade::Psa9 => &mut self.psa_9,
            Grade::Psa10 => &mut self.psa_10,
        }
    }
}
