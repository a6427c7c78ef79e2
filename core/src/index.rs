//! Positions into the displayed contact list.

use std::fmt;

use serde::{Serialize, Serializer};

/// A position in the contact list.
///
/// Users always see and type 1-based positions; the value is stored
/// 0-based so it can index a slice directly.
///
/// # Examples
///
/// ```
/// use tutorbook_core::Index;
///
/// let index = Index::from_one_based(3).unwrap();
/// assert_eq!(index.zero_based(), 2);
/// assert_eq!(index.to_string(), "3");
/// assert!(Index::from_one_based(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Creates an index from a 1-based position. Returns `None` for `0`.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Serialized as the 1-based position users see.
impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.one_based() as u64)
    }
}
