//! Lifecycle (logical deletion) status.
//!
//! Records are never purged. "Deleting" flips the lifecycle field to
//! `Inactive` and list views hide inactive rows.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifecycle status used by inventories, transactions, employees and suppliers.
///
/// Accepts the upper-case spelling used by items as well, since the mock
/// server stores whatever the last writer sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusType {
    #[default]
    #[serde(alias = "ACTIVE", alias = "active")]
    Active,
    #[serde(alias = "INACTIVE", alias = "inactive")]
    Inactive,
}

impl StatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusType::Active => "Active",
            StatusType::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        *self == StatusType::Active
    }
}

impl core::fmt::Display for StatusType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for StatusType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("active") => Ok(StatusType::Active),
            v if v.eq_ignore_ascii_case("inactive") => Ok(StatusType::Inactive),
            other => Err(DomainError::validation(format!(
                "unknown status '{other}' (expected Active or Inactive)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_spellings() {
        let a: StatusType = serde_json::from_str("\"ACTIVE\"").unwrap();
        let b: StatusType = serde_json::from_str("\"Inactive\"").unwrap();
        assert_eq!(a, StatusType::Active);
        assert_eq!(b, StatusType::Inactive);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"Active\"");
    }

    #[test]
    fn parses_either_case() {
        assert_eq!("INACTIVE".parse::<StatusType>(), Ok(StatusType::Inactive));
        assert_eq!("active".parse::<StatusType>(), Ok(StatusType::Active));
        assert!("gone".parse::<StatusType>().is_err());
    }
}
