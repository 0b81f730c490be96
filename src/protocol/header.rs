//! Message header
//!
//! Three little-endian `u32` fields shared by every packet.

use bytes::Buf;

use super::{Direction, Error, HEADER_SIZE, MessageKind, Result};

/// Message header (12 bytes)
///
/// # Wire Format
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Kind (4)                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Direction (4)                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Sub-kind (4)                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    kind: MessageKind,
    direction: Direction,
}

impl MessageHeader {
    /// Create a new message header
    #[must_use]
    pub const fn new(kind: MessageKind, direction: Direction) -> Self {
        Self { kind, direction }
    }

    /// Header for a host-originated command
    #[must_use]
    pub const fn write(kind: MessageKind) -> Self {
        Self::new(kind, Direction::Write)
    }

    /// Get message kind
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Get direction marker
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Convert to bytes (little-endian)
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let (kind, sub_kind) = self.kind.codes();
        let mut bytes = [0u8; HEADER_SIZE];

        bytes[0..4].copy_from_slice(&kind.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.direction.as_u32().to_le_bytes());
        bytes[8..12].copy_from_slice(&sub_kind.to_le_bytes());

        bytes
    }

    /// Parse from bytes (little-endian)
    ///
    /// Only the first [`HEADER_SIZE`] bytes are read.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let Some(raw) = bytes.get(..HEADER_SIZE) else {
            return Err(Error::BufferTooSmall {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        };

        let mut raw = raw;
        let kind = raw.get_u32_le();
        let direction = raw.get_u32_le();
        let sub_kind = raw.get_u32_le();

        let kind = MessageKind::from_codes(kind, sub_kind)
            .ok_or(Error::UnknownKind { kind, sub_kind })?;
        let direction =
            Direction::from_u32(direction).ok_or(Error::InvalidDirection { value: direction })?;

        Ok(Self { kind, direction })
    }

    /// Total packet size implied by the header
    #[must_use]
    pub const fn packet_len(&self) -> usize {
        HEADER_SIZE + self.kind.payload_len()
    }

    /// Validate a packet length against this header's layout
    pub fn validate(&self, packet_len: usize) -> Result<()> {
        let expected = self.packet_len();

        if packet_len < expected {
            return Err(Error::BufferTooSmall {
                needed: expected,
                got: packet_len,
            });
        }

        if packet_len > expected {
            return Err(Error::TrailingBytes {
                kind: self.kind,
                expected,
                got: packet_len,
            });
        }

        Ok(())
    }
}
