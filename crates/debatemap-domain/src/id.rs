//! Identifier module - opaque ids for statements, relations and participants

use std::borrow::Borrow;
use std::fmt;

/// Number of hex characters kept from a generated UUIDv7.
///
/// The tail of a UUIDv7 is random, so the last 12 hex digits (48 bits) give
/// short ids that are unique within an editing session.
const GENERATED_ID_LEN: usize = 12;

fn generate_short_id() -> String {
    let full = uuid::Uuid::now_v7().simple().to_string();
    full[full.len() - GENERATED_ID_LEN..].to_string()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string verbatim
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id and return the inner string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Opaque identifier of a statement (graph node)
    ///
    /// Snapshot ids are preserved verbatim; freshly created statements get a
    /// short random alphanumeric id from [`StatementId::generate`].
    StatementId
}

string_id! {
    /// Opaque identifier of a relation (graph edge)
    RelationId
}

string_id! {
    /// Identifier of a participant
    ///
    /// Auto-generated ids are successive uppercase letters: `A`, `B`, ... `Z`,
    /// `AA`, `AB`, ...
    ParticipantId
}

impl StatementId {
    /// Generate a new short random statement id
    ///
    /// # Examples
    ///
    /// ```
    /// use debatemap_domain::StatementId;
    ///
    /// let id = StatementId::generate();
    /// assert_eq!(id.as_str().len(), 12);
    /// assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn generate() -> Self {
        Self(generate_short_id())
    }
}

impl RelationId {
    /// Generate a new short random relation id
    pub fn generate() -> Self {
        Self(format!("e{}", generate_short_id()))
    }
}

impl ParticipantId {
    /// The letter id for the participant at position `index` in the registry
    ///
    /// # Examples
    ///
    /// ```
    /// use debatemap_domain::ParticipantId;
    ///
    /// assert_eq!(ParticipantId::from_index(0).as_str(), "A");
    /// assert_eq!(ParticipantId::from_index(25).as_str(), "Z");
    /// assert_eq!(ParticipantId::from_index(26).as_str(), "AA");
    /// ```
    pub fn from_index(index: usize) -> Self {
        let mut n = index + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        Self(String::from_utf8_lossy(&letters).into_owned())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: participant letter ids are unique per index
        #[test]
        fn test_participant_ids_unique(a in 0usize..2000, b in 0usize..2000) {
            let id_a = ParticipantId::from_index(a);
            let id_b = ParticipantId::from_index(b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: participant ids only contain uppercase letters
        #[test]
        fn test_participant_ids_uppercase(index in 0usize..100_000) {
            let id = ParticipantId::from_index(index);
            prop_assert!(id.as_str().chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
