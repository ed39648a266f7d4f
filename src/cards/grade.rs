use std::fmt;

use serde::{Deserialize, Serialize};

/// PSA grades that get a price point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Psa8,
    Psa9,
    Psa10,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Psa8, Grade::Psa9, Grade::Psa10];

    pub fn number(&self) -> u8 {
        match self {
            Grade::Psa8 => 8,
            Grade::Psa9 => 9,
            Grade::Psa10 => 10,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Grade::Psa8 => "psa_8",
            Grade::Psa9 => "psa_9",
            Grade::Psa10 => "psa_10",
        }
    }

    /// Text of the table cell labelling this grade on a product page.
    pub fn cell_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PSA {}", self.number())
    }
}
