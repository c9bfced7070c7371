//! Query parameters and the per-resource filter contract.

use crate::lifecycle::StatusType;

/// Ordered query-string pairs sent with a `list` call.
///
/// Unset or blank values are dropped on insertion, so the server never sees
/// `?category=` style empty filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name=value` unless `value` renders blank.
    pub fn push(&mut self, name: &str, value: impl core::fmt::Display) -> &mut Self {
        let value = value.to_string();
        if !value.trim().is_empty() {
            self.pairs.push((name.to_string(), value));
        }
        self
    }

    /// Append `name=value` when `value` is set.
    pub fn push_opt<V: core::fmt::Display>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(name, v);
        }
        self
    }

    pub fn with(mut self, name: &str, value: impl core::fmt::Display) -> Self {
        self.push(name, value);
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Explicit optional-field filter for one resource family.
///
/// A filter is evaluated twice: `to_query` is what the server is asked for,
/// and `matches` is the client-side pass. `matches` re-checks every predicate
/// that `to_query` expresses (the mock server may ignore parameters it does
/// not understand) plus predicates the server cannot evaluate.
pub trait ListFilter<T>: Clone + Default + core::fmt::Debug + Send + Sync {
    /// Query parameters for the server-side pass.
    fn to_query(&self) -> QueryParams;

    /// Client-side predicate.
    fn matches(&self, record: &T) -> bool;

    /// Lifecycle explicitly requested by the filter, if any.
    ///
    /// `None` means the default: only active records are visible.
    fn lifecycle(&self) -> Option<StatusType> {
        None
    }

    /// Whether every field is unset (equivalent to no filter at all).
    fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_values_are_omitted() {
        let mut q = QueryParams::new();
        q.push("category", "DURABLES")
            .push("name", "  ")
            .push_opt::<u32>("min", None)
            .push_opt("max", Some(3));

        assert_eq!(
            q.pairs(),
            &[
                ("category".to_string(), "DURABLES".to_string()),
                ("max".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(q.get("max"), Some("3"));
        assert_eq!(q.get("name"), None);
    }

    #[test]
    fn empty_query_reports_empty() {
        assert!(QueryParams::new().with("x", "").is_empty());
    }
}
