//! Binary control protocol for multi-effect amplifier/pedalboard units
//!
//! This library turns host-side intent (change a parameter, bypass an effect,
//! switch preset) into the fixed-layout packets the device understands, and
//! decodes packets received from the device back into typed messages.
//!
//! # Quick Start
//!
//! ```rust
//! use pedal_proto::{Message, MessageKind, generate};
//!
//! // Build a command
//! let msg = generate::set_query(2);
//!
//! // Wire bytes for the transport (shared, no copy)
//! let bytes = msg.encode();
//!
//! // Decode a received packet
//! let decoded = Message::decode(&bytes)?;
//! assert_eq!(decoded.kind(), MessageKind::SetQuery);
//! # Ok::<(), pedal_proto::Error>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! [kind:4][direction:4][sub_kind:4][payload: fixed per kind]
//! ```
//!
//! All integers are little-endian. There is no length prefix or checksum;
//! framing is the transport's job.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod device;
pub mod generate;
pub mod protocol;
pub mod setup;

pub use protocol::{
    DecodeConfig, Direction, Error, HEADER_SIZE, Message, MessageHeader, MessageKind, Payload,
    Result, ValueType,
};

/// Protocol library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
