//! # Parsed Request Objects
//!
//! One struct per operation kind, already decoded from the wire by the frame
//! layer. Path-bearing requests keep their fields private and expose get/set
//! accessors: downstream stages (notably the authorization pipeline, which
//! rewrites paths in place) must go through these, never through raw fields.
//!
//! The closed [`Request`] enum is what flows through the connection pipeline;
//! dispatch over operation kinds is an explicit `match`, not dynamic dispatch.

use crate::protocol::RequestId;
use serde::{Deserialize, Serialize};

// =============================================================================
// SINGLE-PATH REQUESTS
// =============================================================================

/// Accessor contract shared by every request carrying exactly one path plus
/// its opaque metadata string.
pub trait PathRequest {
    /// The requested path.
    fn path(&self) -> &str;
    /// Replace the path, e.g. with the rewritten path an authorization
    /// decision returned.
    fn set_path(&mut self, path: String);
    /// The raw opaque metadata string accompanying the path.
    fn opaque(&self) -> &str;
}

macro_rules! path_request {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            path: String,
            opaque: String,
        }

        impl $name {
            /// Create the request from its decoded fields.
            pub fn new(path: impl Into<String>, opaque: impl Into<String>) -> Self {
                Self {
                    path: path.into(),
                    opaque: opaque.into(),
                }
            }
        }

        impl PathRequest for $name {
            fn path(&self) -> &str {
                &self.path
            }

            fn set_path(&mut self, path: String) {
                self.path = path;
            }

            fn opaque(&self) -> &str {
                &self.opaque
            }
        }
    };
}

path_request! {
    /// Query the attributes of a single path.
    StatRequest
}

path_request! {
    /// Remove a file.
    RemoveRequest
}

path_request! {
    /// Remove a directory.
    RemoveDirRequest
}

path_request! {
    /// Create a directory.
    MakeDirRequest
}

path_request! {
    /// List a directory.
    ListDirRequest
}

/// Open a file, possibly creating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRequest {
    path: String,
    opaque: String,
    new_file: bool,
    read_write: bool,
}

impl OpenRequest {
    /// Create the request from its decoded fields and open options.
    pub fn new(
        path: impl Into<String>,
        opaque: impl Into<String>,
        new_file: bool,
        read_write: bool,
    ) -> Self {
        Self {
            path: path.into(),
            opaque: opaque.into(),
            new_file,
            read_write,
        }
    }

    /// Whether the client asked to create the file.
    pub fn is_new(&self) -> bool {
        self.new_file
    }

    /// Whether the client asked for read-write access.
    pub fn is_read_write(&self) -> bool {
        self.read_write
    }
}

impl PathRequest for OpenRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn set_path(&mut self, path: String) {
        self.path = path;
    }

    fn opaque(&self) -> &str {
        &self.opaque
    }
}

// =============================================================================
// MULTI-PATH AND TWO-PATH REQUESTS
// =============================================================================

/// Query the attributes of several paths in one round trip.
///
/// `paths` and `opaques` are parallel lists of equal length; entry *i* of one
/// belongs to entry *i* of the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatMultiRequest {
    paths: Vec<String>,
    opaques: Vec<String>,
}

impl StatMultiRequest {
    /// Create the request from its decoded path/opaque lists.
    pub fn new(paths: Vec<String>, opaques: Vec<String>) -> Self {
        Self { paths, opaques }
    }

    /// The requested paths, in wire order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Replace the path list, e.g. after authorization rewrites.
    pub fn set_paths(&mut self, paths: Vec<String>) {
        self.paths = paths;
    }

    /// The opaque metadata strings, parallel to [`Self::paths`].
    pub fn opaques(&self) -> &[String] {
        &self.opaques
    }
}

/// Rename or move a file from a source path to a target path.
///
/// A single opaque string accompanies the request and applies to both paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    source_path: String,
    target_path: String,
    opaque: String,
}

impl MoveRequest {
    /// Create the request from its decoded fields.
    pub fn new(
        source_path: impl Into<String>,
        target_path: impl Into<String>,
        opaque: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            opaque: opaque.into(),
        }
    }

    /// The path being moved away from.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Replace the source path.
    pub fn set_source_path(&mut self, path: String) {
        self.source_path = path;
    }

    /// The destination path.
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// Replace the target path.
    pub fn set_target_path(&mut self, path: String) {
        self.target_path = path;
    }

    /// The opaque metadata string shared by both paths.
    pub fn opaque(&self) -> &str {
        &self.opaque
    }
}

// =============================================================================
// PASS-THROUGH REQUESTS
// =============================================================================
// Handle-based and administrative operations. The authorization pipeline
// forwards these untouched; access was already decided when the handle was
// opened or is not path-based at all.

/// Stage files in preparation for later access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareRequest {
    /// Staging option flags.
    pub options: u16,
    /// The paths to stage.
    pub paths: Vec<String>,
}

/// Read from an open file handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRequest {
    /// Handle returned by a previous open.
    pub file_handle: u32,
    /// Byte offset into the file.
    pub offset: u64,
    /// Number of bytes to read.
    pub length: u32,
}

/// One segment of a vectored read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadChunk {
    /// Handle returned by a previous open.
    pub file_handle: u32,
    /// Byte offset into the file.
    pub offset: u64,
    /// Number of bytes to read.
    pub length: u32,
}

/// Scattered read across one or more open file handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadVectorRequest {
    /// The segments to read, in order.
    pub chunks: Vec<ReadChunk>,
}

/// Write to an open file handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Handle returned by a previous open.
    pub file_handle: u32,
    /// Byte offset into the file.
    pub offset: u64,
    /// The data to write.
    pub data: Vec<u8>,
}

/// Flush an open file handle to stable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRequest {
    /// Handle returned by a previous open.
    pub file_handle: u32,
}

/// Close an open file handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseRequest {
    /// Handle returned by a previous open.
    pub file_handle: u32,
}

/// Negotiate the protocol version with the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRequest {
    /// The client's advertised protocol version.
    pub client_version: i32,
}

// =============================================================================
// THE CLOSED REQUEST ENUM
// =============================================================================

/// Every operation kind the connection pipeline can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Query attributes of a single path.
    Stat(StatRequest),
    /// Query attributes of several paths.
    StatMulti(StatMultiRequest),
    /// Remove a file.
    Remove(RemoveRequest),
    /// Remove a directory.
    RemoveDir(RemoveDirRequest),
    /// Create a directory.
    MakeDir(MakeDirRequest),
    /// Rename or move a file.
    Move(MoveRequest),
    /// List a directory.
    ListDir(ListDirRequest),
    /// Stage files for later access.
    Prepare(PrepareRequest),
    /// Open a file.
    Open(OpenRequest),
    /// Read from an open handle.
    Read(ReadRequest),
    /// Scattered read across open handles.
    ReadVector(ReadVectorRequest),
    /// Write to an open handle.
    Write(WriteRequest),
    /// Flush an open handle.
    Sync(SyncRequest),
    /// Close an open handle.
    Close(CloseRequest),
    /// Negotiate the protocol version.
    Protocol(ProtocolRequest),
}

impl Request {
    /// The numeric request identifier for this operation kind.
    pub fn request_id(&self) -> RequestId {
        match self {
            Request::Stat(_) => RequestId::Stat,
            Request::StatMulti(_) => RequestId::StatMulti,
            Request::Remove(_) => RequestId::Remove,
            Request::RemoveDir(_) => RequestId::RemoveDir,
            Request::MakeDir(_) => RequestId::MakeDir,
            Request::Move(_) => RequestId::Move,
            Request::ListDir(_) => RequestId::ListDir,
            Request::Prepare(_) => RequestId::Prepare,
            Request::Open(_) => RequestId::Open,
            Request::Read(_) => RequestId::Read,
            Request::ReadVector(_) => RequestId::ReadVector,
            Request::Write(_) => RequestId::Write,
            Request::Sync(_) => RequestId::Sync,
            Request::Close(_) => RequestId::Close,
            Request::Protocol(_) => RequestId::Protocol,
        }
    }
}
