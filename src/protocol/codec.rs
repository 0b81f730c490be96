//! Message codec (encode/decode)
//!
//! Packets carry no length prefix or checksum; framing belongs to the
//! transport, which hands over one complete packet per call.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use super::{HEADER_SIZE, Message, MessageHeader, Payload, Result};

/// Decoder options
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    /// Ignore bytes past the kind's fixed layout instead of rejecting them.
    ///
    /// Some links pad packets to a fixed frame size.
    pub allow_trailing_bytes: bool,
}

pub(crate) fn encode_parts(header: &MessageHeader, payload: &Payload) -> Bytes {
    let mut buf = BytesMut::with_capacity(HEADER_SIZE + header.kind().payload_len());
    buf.put_slice(&header.to_bytes());
    payload.encode_into(&mut buf);
    buf.freeze()
}

/// Encode a message to bytes
///
/// # Format
///
/// ```text
/// [HEADER (12 bytes)] [PAYLOAD (fixed per kind)]
/// ```
///
/// The bytes are frozen when the message is built; this only bumps a
/// reference count.
#[must_use]
pub fn encode(message: &Message) -> Bytes {
    message.as_bytes().clone()
}

/// Decode a message from bytes using strict length checking
///
/// # Errors
///
/// Returns an error if:
/// - Buffer is shorter than the header or the kind's payload
/// - Kind/sub-kind pair is unknown
/// - Direction marker is invalid
/// - Bytes follow the kind's payload
pub fn decode(bytes: &[u8]) -> Result<Message> {
    decode_with(bytes, &DecodeConfig::default())
}

/// Decode a message from bytes with explicit options
pub fn decode_with(bytes: &[u8], config: &DecodeConfig) -> Result<Message> {
    let result = decode_inner(bytes, config);
    match &result {
        Ok(message) => trace!(kind = %message.kind(), len = bytes.len(), "decoded message"),
        Err(err) => debug!(error = %err, len = bytes.len(), "failed to decode message"),
    }
    result
}

fn decode_inner(bytes: &[u8], config: &DecodeConfig) -> Result<Message> {
    let header = MessageHeader::from_bytes(bytes)?;
    if !config.allow_trailing_bytes {
        header.validate(bytes.len())?;
    }

    let payload = Payload::decode(header.kind(), &bytes[HEADER_SIZE..])?;

    let total_size = header.packet_len();
    let frozen = Bytes::copy_from_slice(&bytes[..total_size]);
    Ok(Message::from_parts(header, payload, frozen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{
        ActiveChange, Direction, Error, MessageKind, ParameterValue, PresetQuery, SetQuery,
        SetupChange, TempoChange, TypeChange, ValueType,
    };

    #[test]
    fn test_encode_decode_roundtrip() {
        let original = Message::command(Payload::PresetQuery(PresetQuery {
            preset_id: 14,
            set_id: 2,
        }));
        let encoded = encode(&original);
        let decoded = decode(&encoded).unwrap();

        assert_eq!(decoded.kind(), original.kind());
        assert_eq!(decoded.payload(), original.payload());
        assert_eq!(decoded.as_bytes(), original.as_bytes());
    }

    #[test]
    fn test_decode_device_response() {
        let response = Message::new(Direction::Read, Payload::SetQuery(SetQuery { id: 4 }));
        let decoded = decode(&response.encode()).unwrap();

        assert_eq!(decoded.direction(), Direction::Read);
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_decode_buffer_too_small() {
        let bytes = vec![0u8; 10];
        let result = decode(&bytes);
        assert!(matches!(result, Err(Error::BufferTooSmall { .. })));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let msg = Message::blank(MessageKind::ParameterChange);
        let encoded = msg.encode();

        let result = decode(&encoded[..encoded.len() - 1]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall { needed: 32, got: 31 })
        ));

        let lenient = DecodeConfig {
            allow_trailing_bytes: true,
        };
        let result = decode_with(&encoded[..encoded.len() - 1], &lenient);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall { needed: 20, got: 19 })
        ));
    }

    #[test]
    fn test_decode_unknown_kind() {
        let mut encoded = Message::blank(MessageKind::SetChange).encode().to_vec();
        encoded[0..4].copy_from_slice(&0x99_u32.to_le_bytes());

        let result = decode(&encoded);
        assert!(matches!(result, Err(Error::UnknownKind { kind: 0x99, .. })));
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let mut encoded = Message::blank(MessageKind::PresetChange).encode().to_vec();
        encoded.extend_from_slice(&[0, 0, 0, 0]);

        let result = decode(&encoded);
        assert!(matches!(
            result,
            Err(Error::TrailingBytes {
                kind: MessageKind::PresetChange,
                expected: 12,
                got: 16
            })
        ));

        let config = DecodeConfig {
            allow_trailing_bytes: true,
        };
        let decoded = decode_with(&encoded, &config).unwrap();
        assert_eq!(decoded.kind(), MessageKind::PresetChange);
        assert_eq!(decoded.len(), HEADER_SIZE);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn direction_strategy() -> impl Strategy<Value = Direction> {
            prop_oneof![Just(Direction::Write), Just(Direction::Read)]
        }

        fn parameter_strategy() -> impl Strategy<Value = ParameterValue> {
            (any::<u32>(), any::<u32>(), any::<u32>(), any::<[u8; 4]>()).prop_map(
                |(parent_id, value_type, param_id, value)| ParameterValue {
                    parent_id,
                    value_type: ValueType(value_type),
                    param_id,
                    value,
                },
            )
        }

        fn tempo_strategy() -> impl Strategy<Value = TempoChange> {
            (any::<u32>(), any::<u32>())
                .prop_map(|(parent_id, tempo)| TempoChange { parent_id, tempo })
        }

        // Strategy covering every payload variant
        fn payload_strategy() -> impl Strategy<Value = Payload> {
            prop_oneof![
                (any::<u32>(), any::<u32>(), any::<[u8; 4]>()).prop_map(
                    |(value_type, param_id, value)| Payload::SetupChange(SetupChange {
                        value_type: ValueType(value_type),
                        param_id,
                        value,
                    })
                ),
                (any::<u32>(), any::<[u8; 4]>()).prop_map(|(item_id, active)| {
                    Payload::ActiveChange(ActiveChange { item_id, active })
                }),
                (any::<u32>(), any::<u32>()).prop_map(|(item_id, new_type)| {
                    Payload::TypeChange(TypeChange { item_id, new_type })
                }),
                parameter_strategy().prop_map(Payload::ParameterChange),
                parameter_strategy().prop_map(Payload::ParameterChangeMin),
                parameter_strategy().prop_map(Payload::ParameterChangeMax),
                tempo_strategy().prop_map(Payload::ParameterTempoChange),
                tempo_strategy().prop_map(Payload::ParameterTempoChange2),
                Just(Payload::PresetChange),
                Just(Payload::PresetChangeAlert),
                Just(Payload::PresetLoad),
                (any::<u16>(), any::<u16>()).prop_map(|(preset_id, set_id)| {
                    Payload::PresetQuery(PresetQuery { preset_id, set_id })
                }),
                Just(Payload::SetChange),
                any::<u32>().prop_map(|id| Payload::SetQuery(SetQuery { id })),
            ]
        }

        proptest! {
            /// Property: every payload survives encode/decode
            #[test]
            fn prop_roundtrip_preserves_fields(
                direction in direction_strategy(),
                payload in payload_strategy(),
            ) {
                let original = Message::new(direction, payload);
                let decoded = decode(&encode(&original)).unwrap();

                prop_assert_eq!(decoded.payload(), original.payload());
                prop_assert_eq!(decoded.direction(), direction);
            }

            /// Property: header is always 12 bytes and the length is fixed per kind
            #[test]
            fn prop_length_is_function_of_kind(payload in payload_strategy()) {
                let message = Message::command(payload);
                let encoded = encode(&message);

                prop_assert_eq!(encoded.len(), HEADER_SIZE + message.kind().payload_len());
                prop_assert_eq!(&encoded[..HEADER_SIZE], &message.header().to_bytes()[..]);
            }

            /// Property: any truncation is rejected
            #[test]
            fn prop_truncation_rejected(payload in payload_strategy(), cut in 1usize..=32) {
                let encoded = encode(&Message::command(payload));
                let keep = encoded.len().saturating_sub(cut);

                prop_assert!(decode(&encoded[..keep]).is_err());
            }

            /// Property: arbitrary bytes never panic the decoder
            #[test]
            fn prop_arbitrary_input_no_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
                let _ = decode(&bytes);
            }
        }
    }
}
