//! Typed identifiers for blocks and the images they carry.
//!
//! Persisted content predates the current generator, so an id is any
//! non-empty string (legacy content uses `block-<millis>-<random>`). Fresh ids
//! wrap a UUIDv7 (time-ordered, globally unique) as `<prefix>-<32 hex chars>`.
//! The `short()` form is for human-facing output and logging only, never a
//! lookup key.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a block, unique across a whole document tree.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

/// Identifier of an image entry inside gallery, image-row, and image-grid blocks.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

// ── Shared behavior ─────────────────────────────────────────────────────────

macro_rules! impl_string_id {
    ($T:ident, $name:literal, $prefix:literal) => {
        impl $T {
            /// Generate a new time-ordered id.
            pub fn generate() -> Self {
                Self(format!(
                    concat!($prefix, "-{}"),
                    uuid::Uuid::now_v7().as_simple()
                ))
            }

            /// Wrap an existing id string (e.g. from persisted content).
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Trailing 8 characters, for display only.
            ///
            /// UUIDv7 ids share their timestamp prefix when generated close
            /// together, so the random tail is the distinguishing part.
            pub fn short(&self) -> &str {
                let start = self
                    .0
                    .char_indices()
                    .rev()
                    .nth(7)
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                &self.0[start..]
            }

            /// Check whether the id is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $T {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $T {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<$T> for String {
            fn from(id: $T) -> String {
                id.0
            }
        }

        impl AsRef<str> for $T {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $T {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $T {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $T {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $name, self.0)
            }
        }
    };
}

impl_string_id!(BlockId, "BlockId", "block");
impl_string_id!(ImageId, "ImageId", "image");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = BlockId::generate();
        let b = BlockId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("block-"));
        assert_eq!(a.as_str().len(), "block-".len() + 32);
    }

    #[test]
    fn test_image_ids_use_image_prefix() {
        assert!(ImageId::generate().as_str().starts_with("image-"));
    }

    #[test]
    fn test_short_takes_tail() {
        let id = BlockId::new("block-1700000000000-abc123xyz");
        assert_eq!(id.short(), "bc123xyz");

        let tiny = BlockId::new("b1");
        assert_eq!(tiny.short(), "b1");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = BlockId::new("block-legacy-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"block-legacy-1\"");

        let back: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_compares_with_str() {
        let id = BlockId::new("A");
        assert_eq!(id, "A");
        assert_eq!(format!("{id:?}"), "BlockId(A)");
    }
}
