//! Protocol error types

use thiserror::Error;

use super::MessageKind;

/// Protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer too small for the header or the kind's payload
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Kind/sub-kind pair not in the registry
    #[error("unknown message kind: {kind:#x}/{sub_kind:#x}")]
    UnknownKind {
        /// Kind code
        kind: u32,
        /// Sub-kind code
        sub_kind: u32,
    },

    /// Direction marker is neither write nor read
    #[error("invalid direction marker: {value:#x}")]
    InvalidDirection {
        /// Found marker
        value: u32,
    },

    /// Buffer longer than the kind's fixed layout
    #[error("trailing bytes after {kind}: expected {expected} bytes, got {got}")]
    TrailingBytes {
        /// Decoded kind
        kind: MessageKind,
        /// Expected total size
        expected: usize,
        /// Actual size
        got: usize,
    },

    /// No cabinet address exists for this parameter
    #[error("no cabinet setup address for parameter {param_id} of module {owner_id}")]
    UnmappedCabinetParameter {
        /// Owning module identifier
        owner_id: u32,
        /// Parameter identifier
        param_id: u32,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
