//! Splits argument text into a preamble and prefixed field values.
//!
//! A prefix is only recognized when it directly follows a space, so
//! `n/` inside `15/4/2025` or `a/b` is left alone. Argument text handed over
//! by the command dispatcher keeps the space that followed the command word,
//! which lets a prefix appear as the very first argument.
//!
//! # Examples
//!
//! ```
//! use tutorbook_parser::syntax::{PREFIX_NAME, PREFIX_SUBJECT};
//! use tutorbook_parser::tokenize;
//!
//! let map = tokenize(" 1 n/John Doe s/Math s/Physics", &[PREFIX_NAME, PREFIX_SUBJECT]);
//! assert_eq!(map.preamble(), "1");
//! assert_eq!(map.value(PREFIX_NAME), Some("John Doe"));
//! assert_eq!(map.all_values(PREFIX_SUBJECT), ["Math", "Physics"]);
//! ```

use std::collections::HashMap;

use crate::error::{ParseError, Result};
use crate::syntax::Prefix;

/// Field values keyed by prefix, plus the unprefixed preamble.
///
/// Values for a prefix are kept in the order they appeared. The map is
/// built once by [`tokenize`] and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last().map(String::as_str))
    }

    /// Every value given for `prefix`, in input order. Empty if absent.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails with [`ParseError::DuplicateFields`] if any of `prefixes` was
    /// given more than once. Offending prefixes are listed in the order
    /// they were passed in.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<()> {
        let mut duplicated: Vec<Prefix> = Vec::new();
        for &prefix in prefixes {
            if self.all_values(prefix).len() > 1 && !duplicated.contains(&prefix) {
                duplicated.push(prefix);
            }
        }

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicateFields(duplicated))
        }
    }
}

/// Tokenizes `args` using the given prefixes.
///
/// Purely structural: values are trimmed but not validated.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| prefix_positions(args, prefix))
        .collect();
    positions.sort_by_key(|&(start, _)| start);

    let preamble_end = positions.first().map_or(args.len(), |&(start, _)| start);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, &(start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map_or(args.len(), |&(next_start, _)| next_start);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    map
}

/// Byte offsets where `prefix` starts, for every occurrence preceded by a
/// space.
fn prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    let needle = format!(" {}", prefix.as_str());
    args.match_indices(needle.as_str())
        .map(|(at, _)| (at + 1, prefix))
        .collect()
}
