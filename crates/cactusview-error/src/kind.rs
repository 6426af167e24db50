//! Error kinds for cactusview operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors so callers can match on the failure class
/// instead of string-matching messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Model lookup errors
    // =========================================================================
    /// Net not found in the disk store
    NetNotFound,

    /// End not found in the disk store
    EndNotFound,

    /// Atom not found in the disk store
    AtomNotFound,

    /// Chain not found in the disk store
    ChainNotFound,

    /// End or atom instance not found in the disk store
    InstanceNotFound,

    // =========================================================================
    // Structural-integrity errors
    // =========================================================================
    /// A chain link's left end resolves to no atom
    UnlinkedAtom,

    /// An end instance carries no adjacency partner
    MissingAdjacency,

    /// A model invariant was violated (cycle, multiple roots, ...)
    InvariantViolation,

    // =========================================================================
    // Disk format errors
    // =========================================================================
    /// Deserialization of a disk document failed
    DeserializationFailed,

    /// Disk document is syntactically valid but structurally wrong
    InvalidFormat,

    /// Two entities in a disk document share a name
    DuplicateName,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,

    /// Assertion failed
    AssertionFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::UnlinkedAtom.to_string(), "UnlinkedAtom");
        assert_eq!(ErrorKind::NetNotFound.to_string(), "NetNotFound");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::IoFailed.is_retryable());
        assert!(!ErrorKind::MissingAdjacency.is_retryable());
        assert!(!ErrorKind::InvalidFormat.is_retryable());
    }
}
