//! Strongly-typed record identifiers.
//!
//! Identifiers are always assigned by the REST collaborator. Depending on the
//! mock server flavour they arrive as JSON numbers (`"id": 7`) or strings
//! (`"id": "a1f3"`); `RecordKey` keeps whichever form it was given so that it
//! round-trips unchanged into URLs and reference fields.
//!
//! Equality, hashing and ordering go through the normalized key: `3` and
//! `"3"` name the same record, since a reference field may be written in
//! either form.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned key of a persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Number(u64),
    Text(String),
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Normalized<'a> {
    Number(u64),
    Text(&'a str),
}

impl RecordKey {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            RecordKey::Number(n) => Some(*n),
            RecordKey::Text(s) => s.parse().ok(),
        }
    }

    /// Canonical text such as `"3"` compares as the number it spells.
    fn normalized(&self) -> Normalized<'_> {
        match self {
            RecordKey::Number(n) => Normalized::Number(*n),
            RecordKey::Text(s) => match s.parse::<u64>() {
                Ok(n) if n.to_string() == *s => Normalized::Number(n),
                _ => Normalized::Text(s),
            },
        }
    }
}

impl PartialEq for RecordKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for RecordKey {}

impl core::hash::Hash for RecordKey {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl PartialOrd for RecordKey {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordKey {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl core::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordKey::Number(n) => core::fmt::Display::fmt(n, f),
            RecordKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        RecordKey::Number(value)
    }
}

impl FromStr for RecordKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("identifier cannot be empty"));
        }
        Ok(match s.parse::<u64>() {
            Ok(n) => RecordKey::Number(n),
            Err(_) => RecordKey::Text(s.to_string()),
        })
    }
}

/// Declare a per-resource identifier newtype over [`RecordKey`].
///
/// ```
/// stockdesk_core::record_id! {
///     /// Identifier of a widget.
///     WidgetId
/// }
/// let id: WidgetId = "42".parse().unwrap();
/// assert_eq!(id.to_string(), "42");
/// ```
#[macro_export]
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $crate::RecordKey);

        impl $name {
            pub fn key(&self) -> &$crate::RecordKey {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self($crate::RecordKey::Number(value))
            }
        }

        impl From<$crate::RecordKey> for $name {
            fn from(value: $crate::RecordKey) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $crate::RecordKey {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$crate::RecordKey>().map(Self)
            }
        }
    };
}
