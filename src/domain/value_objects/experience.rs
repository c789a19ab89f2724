//! Experience value object - required work experience filter

use serde::{Deserialize, Serialize};

/// Work experience bucket accepted by the search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Experience {
    #[default]
    NoExperience,
    Between1And3,
    Between3And6,
    MoreThan6,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::NoExperience,
        Experience::Between1And3,
        Experience::Between3And6,
        Experience::MoreThan6,
    ];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::NoExperience => "noExperience",
            Experience::Between1And3 => "between1And3",
            Experience::Between3And6 => "between3And6",
            Experience::MoreThan6 => "moreThan6",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Experience::NoExperience => "No experience",
            Experience::Between1And3 => "1 to 3 years",
            Experience::Between3And6 => "3 to 6 years",
            Experience::MoreThan6 => "More than 6 years",
        }
    }

    /// Parse a wire identifier; unknown values fall back to the default
    pub fn parse_lenient(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
