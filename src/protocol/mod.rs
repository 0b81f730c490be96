//! Device message protocol
//!
//! This module provides the wire format, message kinds, and codec.

mod codec;
mod error;
mod header;
mod message;
mod payload;
mod tempo;
mod types;

pub use codec::{DecodeConfig, decode, decode_with, encode};
pub use error::{Error, Result};
pub use header::MessageHeader;
pub use message::Message;
pub use payload::{
    ActiveChange, ParameterValue, Payload, PresetQuery, SetQuery, SetupChange, TempoChange,
    TypeChange,
};
pub use tempo::{encode_tempo, tempo_from_f32};
pub use types::{Direction, MessageKind, ValueType};

/// Header size in bytes (kind, direction, sub-kind)
pub const HEADER_SIZE: usize = 12;
