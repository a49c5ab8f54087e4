//! Store-assigned resource identifiers.
//!
//! Path segments arrive as raw strings. [`UserId::resolve`] and
//! [`TodoId::resolve`] are the only way inbound adapters turn them into
//! identifiers, so every malformed segment (empty, non-numeric, outside the
//! `i32` range or not positive) produces the same [`InvalidIdError`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raised when a path segment is not a usable identifier.
///
/// The offending input is kept verbatim for the error detail; the reason it
/// was rejected is deliberately not recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier {raw:?}")]
pub struct InvalidIdError {
    raw: String,
}

impl InvalidIdError {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
        }
    }

    /// The raw segment exactly as the client sent it.
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }
}

fn resolve_positive(raw: &str) -> Result<i32, InvalidIdError> {
    raw.parse::<i32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| InvalidIdError::new(raw))
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a value the store already vouches for.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Parse a raw path segment.
            ///
            /// # Errors
            /// Returns [`InvalidIdError`] for empty, non-numeric, out of range
            /// or non-positive input.
            pub fn resolve(raw: &str) -> Result<Self, InvalidIdError> {
                resolve_positive(raw).map(Self)
            }

            /// The underlying integer.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::resolve(s)
            }
        }
    };
}

define_id! {
    /// Identifier of a user row.
    UserId
}

define_id! {
    /// Identifier of a todo row.
    TodoId
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("+7", 7)]
    #[case("2147483647", i32::MAX)]
    fn resolves_positive_integers(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(UserId::resolve(raw).expect("valid id").get(), expected);
        assert_eq!(TodoId::resolve(raw).expect("valid id").get(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12abc")]
    #[case(" 3")]
    #[case("1.5")]
    #[case("2147483648")]
    #[case("-99999999999")]
    #[case("0")]
    #[case("-4")]
    fn every_malformation_yields_the_same_error(#[case] raw: &str) {
        let err = UserId::resolve(raw).expect_err("malformed id");
        assert_eq!(err, InvalidIdError::new(raw));
        assert_eq!(err.raw(), raw);
    }

    #[rstest]
    fn from_str_delegates_to_resolve() {
        let parsed: TodoId = "9".parse().expect("valid id");
        assert_eq!(parsed, TodoId::new(9));
        assert!("nine".parse::<TodoId>().is_err());
    }

    #[rstest]
    fn ids_serialise_as_bare_integers() {
        let json = serde_json::to_string(&UserId::new(5)).expect("serialise id");
        assert_eq!(json, "5");
    }
}
