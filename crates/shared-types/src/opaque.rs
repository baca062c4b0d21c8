//! # Opaque Metadata Parsing
//!
//! Requests may carry an opaque CGI-style string alongside each path
//! (`key1=val1&key2=val2`, optionally prefixed with `?`). It transports
//! out-of-band directives such as authorization tokens. The pipeline parses
//! it into an ordered key/value map before handing it to the authorization
//! capability; the raw string itself is never interpreted here.

use indexmap::IndexMap;
use thiserror::Error;

/// Ordered key/value view of an opaque string. Insertion order is the order
/// the pairs appeared on the wire.
pub type OpaqueMap = IndexMap<String, String>;

/// Delimiter between key/value pairs.
pub const OPAQUE_DELIMITER: char = '&';

/// Separator between a key and its value.
pub const OPAQUE_SEPARATOR: char = '=';

/// Failure to parse an opaque string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpaqueError {
    /// A token has no `=` separator.
    #[error("variable assignment missing in token '{token}'")]
    MissingSeparator {
        /// The offending token.
        token: String,
    },

    /// A token has an empty key.
    #[error("variable name missing in token '{token}'")]
    EmptyKey {
        /// The offending token.
        token: String,
    },
}

/// Parse an opaque string into an ordered key/value map.
///
/// An empty input yields an empty map. Empty tokens (consecutive delimiters)
/// are skipped. Values may be empty; keys may not.
///
/// # Errors
///
/// Returns [`OpaqueError`] if a non-empty token lacks a separator or a key.
pub fn parse_opaque(opaque: &str) -> Result<OpaqueMap, OpaqueError> {
    let mut map = OpaqueMap::new();
    if opaque.is_empty() {
        return Ok(map);
    }

    for token in opaque
        .trim_start_matches('?')
        .split(OPAQUE_DELIMITER)
        .filter(|t| !t.is_empty())
    {
        let (key, value) = token
            .split_once(OPAQUE_SEPARATOR)
            .ok_or_else(|| OpaqueError::MissingSeparator {
                token: token.to_string(),
            })?;
        if key.is_empty() {
            return Err(OpaqueError::EmptyKey {
                token: token.to_string(),
            });
        }
        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}
