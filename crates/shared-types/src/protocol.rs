//! # Protocol Constants
//!
//! Permission levels, numeric request identifiers and protocol-visible status
//! codes. These mirror the wire protocol; the numeric values are part of the
//! client contract and must not be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PERMISSION LEVELS
// =============================================================================

/// Coarse access class an operation requires.
///
/// Only equality matters at this layer; any ordering between the classes is a
/// policy decision left to the authorization capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Read access to a file or directory listing.
    Read,
    /// Create or modify access.
    Write,
    /// Removal of a file or directory.
    Delete,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Read => write!(f, "read"),
            Permission::Write => write!(f, "write"),
            Permission::Delete => write!(f, "delete"),
        }
    }
}

// =============================================================================
// REQUEST IDENTIFIERS
// =============================================================================

/// Numeric identifier of a request kind, as carried in the request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum RequestId {
    /// Close an open file handle.
    Close = 3003,
    /// List a directory.
    ListDir = 3004,
    /// Negotiate the protocol version.
    Protocol = 3006,
    /// Create a directory.
    MakeDir = 3008,
    /// Rename or move a file.
    Move = 3009,
    /// Open a file.
    Open = 3010,
    /// Read from an open file handle.
    Read = 3013,
    /// Remove a file.
    Remove = 3014,
    /// Remove a directory.
    RemoveDir = 3015,
    /// Flush an open file handle to stable storage.
    Sync = 3016,
    /// Query attributes of a single path.
    Stat = 3017,
    /// Write to an open file handle.
    Write = 3019,
    /// Stage files in preparation for access.
    Prepare = 3021,
    /// Query attributes of several paths at once.
    StatMulti = 3022,
    /// Scattered read from one or more open file handles.
    ReadVector = 3025,
}

impl RequestId {
    /// The on-the-wire numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }
}

// =============================================================================
// STATUS CODES
// =============================================================================

/// Protocol-visible failure classes returned in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum StatusCode {
    /// A request argument is malformed.
    ArgInvalid = 3000,
    /// A required request argument is absent.
    ArgMissing = 3001,
    /// The request is structurally invalid.
    InvalidRequest = 3006,
    /// An I/O error occurred while serving the request.
    IoError = 3007,
    /// The client is not authorized to perform the operation.
    NotAuthorized = 3010,
}

impl StatusCode {
    /// The on-the-wire numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::ArgInvalid => "ArgInvalid",
            StatusCode::ArgMissing => "ArgMissing",
            StatusCode::InvalidRequest => "InvalidRequest",
            StatusCode::IoError => "IoError",
            StatusCode::NotAuthorized => "NotAuthorized",
        };
        write!(f, "{name}")
    }
}
