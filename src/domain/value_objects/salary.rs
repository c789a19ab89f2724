//! Salary value object - minimum monthly salary in rubles

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Upper bound accepted by the search API (100 million)
pub const MAX_SALARY: u64 = 100_000_000;

/// Validated minimum salary. Zero means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(u64);

impl Salary {
    pub fn new(value: u64) -> SettingsResult<Self> {
        if value > MAX_SALARY {
            return Err(SettingsError::SalaryTooLarge { max: MAX_SALARY });
        }
        Ok(Self(value))
    }

    /// Parse user input. Blank input is zero.
    pub fn parse(input: &str) -> SettingsResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self(0));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SettingsError::SalaryNotANumber {
                input: trimmed.to_string(),
            });
        }
        if negative && digits.bytes().any(|b| b != b'0') {
            return Err(SettingsError::SalaryNegative);
        }

        // Only overflow can fail here; the digits are already checked.
        match digits.parse::<u64>() {
            Ok(v) => Self::new(v),
            Err(_) => Err(SettingsError::SalaryTooLarge { max: MAX_SALARY }),
        }
    }

    /// Lenient read of a server value (number, numeric string or absent)
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        let parsed = match value {
            Some(serde_json::Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        Self(parsed.unwrap_or(0).min(MAX_SALARY))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for Salary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_set() {
            write!(f, "{} ₽", self.0)
        } else {
            write!(f, "not set")
        }
    }
}
