//! Message value object

use std::fmt;

use bytes::Bytes;

use super::{Direction, HEADER_SIZE, MessageHeader, MessageKind, Payload, ValueType};

/// A single device packet.
///
/// The wire bytes are produced once at construction and never change, so a
/// message can be cloned cheaply and handed to a transport on any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message header
    header: MessageHeader,
    /// Typed payload
    payload: Payload,
    /// Frozen wire form (header + payload)
    bytes: Bytes,
}

impl Message {
    /// Create a new message
    #[must_use]
    pub fn new(direction: Direction, payload: Payload) -> Self {
        let header = MessageHeader::new(payload.kind(), direction);
        let bytes = super::codec::encode_parts(&header, &payload);

        Self {
            header,
            payload,
            bytes,
        }
    }

    /// Create a host-originated command
    #[must_use]
    pub fn command(payload: Payload) -> Self {
        Self::new(Direction::Write, payload)
    }

    /// Blank prototype of `kind`: write header, zero-valued payload
    #[must_use]
    pub fn blank(kind: MessageKind) -> Self {
        Self::command(Payload::zeroed(kind))
    }

    pub(crate) fn from_parts(header: MessageHeader, payload: Payload, bytes: Bytes) -> Self {
        Self {
            header,
            payload,
            bytes,
        }
    }

    /// Get message kind
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.header.kind()
    }

    /// Get direction marker
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.header.direction()
    }

    /// Get header
    #[must_use]
    pub const fn header(&self) -> &MessageHeader {
        &self.header
    }

    /// Get typed payload
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Full wire form, header included
    #[must_use]
    pub fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Wire form of the payload alone
    #[must_use]
    pub fn payload_bytes(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..]
    }

    /// Total wire length
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the wire form is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Owning module for parameter, tempo, active and type messages
    #[must_use]
    pub fn item_id(&self) -> Option<u32> {
        match &self.payload {
            Payload::ParameterChange(p)
            | Payload::ParameterChangeMin(p)
            | Payload::ParameterChangeMax(p) => Some(p.parent_id),
            Payload::ParameterTempoChange(p) | Payload::ParameterTempoChange2(p) => {
                Some(p.parent_id)
            }
            Payload::ActiveChange(p) => Some(p.item_id),
            Payload::TypeChange(p) => Some(p.item_id),
            _ => None,
        }
    }

    /// Parameter identifier, or setup address for setup changes
    #[must_use]
    pub fn param_id(&self) -> Option<u32> {
        match &self.payload {
            Payload::SetupChange(p) => Some(p.param_id),
            Payload::ParameterChange(p)
            | Payload::ParameterChangeMin(p)
            | Payload::ParameterChangeMax(p) => Some(p.param_id),
            _ => None,
        }
    }

    /// Value type code of a setup or parameter message
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        match &self.payload {
            Payload::SetupChange(p) => Some(p.value_type),
            Payload::ParameterChange(p)
            | Payload::ParameterChangeMin(p)
            | Payload::ParameterChangeMax(p) => Some(p.value_type),
            _ => None,
        }
    }

    /// Raw 4-byte value of a setup or parameter message
    #[must_use]
    pub fn value(&self) -> Option<[u8; 4]> {
        match &self.payload {
            Payload::SetupChange(p) => Some(p.value),
            Payload::ParameterChange(p)
            | Payload::ParameterChangeMin(p)
            | Payload::ParameterChangeMax(p) => Some(p.value),
            _ => None,
        }
    }

    /// BPM carried by a tempo message
    #[must_use]
    pub fn tempo(&self) -> Option<u32> {
        match &self.payload {
            Payload::ParameterTempoChange(p) | Payload::ParameterTempoChange2(p) => Some(p.tempo),
            _ => None,
        }
    }

    /// Encode message to bytes
    #[must_use]
    pub fn encode(&self) -> Bytes {
        super::encode(self)
    }

    /// Decode message from bytes
    pub fn decode(bytes: &[u8]) -> super::Result<Self> {
        super::decode(bytes)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [", self.kind(), self.direction())?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 && i % 4 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        write!(f, "]")
    }
}
