//! OptionalVariant - A variant that can be empty.

use alloc::string::String;
use core::fmt;

use super::multi_variant::MultiVariant;

/// An optional variant that can be empty.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionalVariant {
    /// No value.
    Empty,
    /// A variant with a value.
    Some(MultiVariant),
}

impl OptionalVariant {
    /// Creates an empty optional variant.
    pub fn empty() -> Self {
        OptionalVariant::Empty
    }

    /// Creates an optional variant with a value.
    pub fn some(variant: MultiVariant) -> Self {
        OptionalVariant::Some(variant)
    }

    /// Returns true if the optional variant has a value.
    pub fn is_some(&self) -> bool {
        matches!(self, OptionalVariant::Some(_))
    }

    /// Returns true if the optional variant is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, OptionalVariant::Empty)
    }

    /// Returns the inner variant if present.
    pub fn get(&self) -> Option<&MultiVariant> {
        match self {
            OptionalVariant::Some(v) => Some(v),
            OptionalVariant::Empty => None,
        }
    }

    /// Returns the inner variant or a default.
    pub fn unwrap_or(&self, default: MultiVariant) -> MultiVariant {
        match self {
            OptionalVariant::Some(v) => v.clone(),
            OptionalVariant::Empty => default,
        }
    }

    /// Maps the inner variant if present.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(MultiVariant) -> MultiVariant,
    {
        match self {
            OptionalVariant::Some(v) => OptionalVariant::Some(f(v)),
            OptionalVariant::Empty => OptionalVariant::Empty,
        }
    }

    /// Filters the optional variant.
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&MultiVariant) -> bool,
    {
        match self {
            OptionalVariant::Some(v) if predicate(&v) => OptionalVariant::Some(v),
            _ => OptionalVariant::Empty,
        }
    }
}

impl Default for OptionalVariant {
    fn default() -> Self {
        OptionalVariant::Empty
    }
}

impl fmt::Display for OptionalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionalVariant::Empty => write!(f, "(empty)"),
            OptionalVariant::Some(v) => write!(f, "{}", v),
        }
    }
}
