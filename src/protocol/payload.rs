//! Kind-specific payloads
//!
//! Every [`MessageKind`] maps to one [`Payload`] variant. Numeric fields are
//! fixed-width little-endian; raw 4-byte parameter values are copied through
//! untouched.

use bytes::{Buf, BufMut};

use super::{Error, MessageKind, Result, ValueType};

/// Device-global setup parameter change.
///
/// ```text
/// [reserved:4][value_type:4][param_id:4][value:4]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetupChange {
    /// Interpretation of `value`
    pub value_type: ValueType,
    /// Setup-parameter address
    pub param_id: u32,
    /// Raw value bytes
    pub value: [u8; 4],
}

/// Module enable/bypass.
///
/// ```text
/// [reserved:4][item_id:4][active:4]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveChange {
    /// Module identifier
    pub item_id: u32,
    /// Active flag as supplied by the module
    pub active: [u8; 4],
}

impl ActiveChange {
    /// Check whether the flag enables the module
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active != [0; 4]
    }
}

/// Module algorithm change.
///
/// ```text
/// [reserved:4][item_id:4][new_type:4]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeChange {
    /// Module identifier
    pub item_id: u32,
    /// Algorithm/type code
    pub new_type: u32,
}

/// Parameter value, shared by the current/min/max kinds.
///
/// ```text
/// [reserved:4][parent_id:4][value_type:4][param_id:4][value:4]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterValue {
    /// Owning module identifier
    pub parent_id: u32,
    /// Interpretation of `value`
    pub value_type: ValueType,
    /// Parameter identifier within the module
    pub param_id: u32,
    /// Raw value bytes
    pub value: [u8; 4],
}

/// Tempo-synced parameter.
///
/// ```text
/// [reserved:4][parent_id:4][tempo:4]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoChange {
    /// Owning module identifier
    pub parent_id: u32,
    /// Whole BPM, `0` when free-running
    pub tempo: u32,
}

/// Preset within a set.
///
/// ```text
/// [preset_id:2][set_id:2]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetQuery {
    /// Preset number
    pub preset_id: u16,
    /// Set number
    pub set_id: u16,
}

/// Set request.
///
/// ```text
/// [id:4]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetQuery {
    /// Set number
    pub id: u32,
}

/// Typed payload, one variant per message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Payload {
    SetupChange(SetupChange),
    ActiveChange(ActiveChange),
    TypeChange(TypeChange),
    ParameterChange(ParameterValue),
    /// Lower bound of the parameter
    ParameterChangeMin(ParameterValue),
    /// Upper bound of the parameter
    ParameterChangeMax(ParameterValue),
    ParameterTempoChange(TempoChange),
    ParameterTempoChange2(TempoChange),
    PresetChange,
    PresetChangeAlert,
    PresetLoad,
    PresetQuery(PresetQuery),
    SetChange,
    SetQuery(SetQuery),
}

impl Payload {
    /// Zero-valued prototype for a kind
    #[must_use]
    pub fn zeroed(kind: MessageKind) -> Self {
        match kind {
            MessageKind::SetupChange => Self::SetupChange(SetupChange::default()),
            MessageKind::ActiveChange => Self::ActiveChange(ActiveChange::default()),
            MessageKind::TypeChange => Self::TypeChange(TypeChange::default()),
            MessageKind::ParameterChange => Self::ParameterChange(ParameterValue::default()),
            MessageKind::ParameterChangeMin => Self::ParameterChangeMin(ParameterValue::default()),
            MessageKind::ParameterChangeMax => Self::ParameterChangeMax(ParameterValue::default()),
            MessageKind::ParameterTempoChange => Self::ParameterTempoChange(TempoChange::default()),
            MessageKind::ParameterTempoChange2 => {
                Self::ParameterTempoChange2(TempoChange::default())
            }
            MessageKind::PresetChange => Self::PresetChange,
            MessageKind::PresetChangeAlert => Self::PresetChangeAlert,
            MessageKind::PresetLoad => Self::PresetLoad,
            MessageKind::PresetQuery => Self::PresetQuery(PresetQuery::default()),
            MessageKind::SetChange => Self::SetChange,
            MessageKind::SetQuery => Self::SetQuery(SetQuery::default()),
        }
    }

    /// Kind this payload belongs to
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::SetupChange(_) => MessageKind::SetupChange,
            Self::ActiveChange(_) => MessageKind::ActiveChange,
            Self::TypeChange(_) => MessageKind::TypeChange,
            Self::ParameterChange(_) => MessageKind::ParameterChange,
            Self::ParameterChangeMin(_) => MessageKind::ParameterChangeMin,
            Self::ParameterChangeMax(_) => MessageKind::ParameterChangeMax,
            Self::ParameterTempoChange(_) => MessageKind::ParameterTempoChange,
            Self::ParameterTempoChange2(_) => MessageKind::ParameterTempoChange2,
            Self::PresetChange => MessageKind::PresetChange,
            Self::PresetChangeAlert => MessageKind::PresetChangeAlert,
            Self::PresetLoad => MessageKind::PresetLoad,
            Self::PresetQuery(_) => MessageKind::PresetQuery,
            Self::SetChange => MessageKind::SetChange,
            Self::SetQuery(_) => MessageKind::SetQuery,
        }
    }

    /// Append the wire form to `buf`
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        match self {
            Self::SetupChange(p) => {
                buf.put_u32_le(0);
                buf.put_u32_le(p.value_type.as_u32());
                buf.put_u32_le(p.param_id);
                buf.put_slice(&p.value);
            }
            Self::ActiveChange(p) => {
                buf.put_u32_le(0);
                buf.put_u32_le(p.item_id);
                buf.put_slice(&p.active);
            }
            Self::TypeChange(p) => {
                buf.put_u32_le(0);
                buf.put_u32_le(p.item_id);
                buf.put_u32_le(p.new_type);
            }
            Self::ParameterChange(p) | Self::ParameterChangeMin(p) | Self::ParameterChangeMax(p) => {
                buf.put_u32_le(0);
                buf.put_u32_le(p.parent_id);
                buf.put_u32_le(p.value_type.as_u32());
                buf.put_u32_le(p.param_id);
                buf.put_slice(&p.value);
            }
            Self::ParameterTempoChange(p) | Self::ParameterTempoChange2(p) => {
                buf.put_u32_le(0);
                buf.put_u32_le(p.parent_id);
                buf.put_u32_le(p.tempo);
            }
            Self::PresetQuery(p) => {
                buf.put_u16_le(p.preset_id);
                buf.put_u16_le(p.set_id);
            }
            Self::SetQuery(p) => buf.put_u32_le(p.id),
            Self::PresetChange | Self::PresetChangeAlert | Self::PresetLoad | Self::SetChange => {}
        }
    }

    /// Parse the payload of `kind` from the start of `bytes`.
    ///
    /// Exactly [`MessageKind::payload_len`] bytes are consumed; anything
    /// after them is left to the caller.
    pub fn decode(kind: MessageKind, mut bytes: &[u8]) -> Result<Self> {
        let needed = kind.payload_len();
        if bytes.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                got: bytes.len(),
            });
        }

        let buf = &mut bytes;
        let payload = match kind {
            MessageKind::SetupChange => {
                buf.advance(4);
                Self::SetupChange(SetupChange {
                    value_type: ValueType(buf.get_u32_le()),
                    param_id: buf.get_u32_le(),
                    value: take_value(buf),
                })
            }
            MessageKind::ActiveChange => {
                buf.advance(4);
                Self::ActiveChange(ActiveChange {
                    item_id: buf.get_u32_le(),
                    active: take_value(buf),
                })
            }
            MessageKind::TypeChange => {
                buf.advance(4);
                Self::TypeChange(TypeChange {
                    item_id: buf.get_u32_le(),
                    new_type: buf.get_u32_le(),
                })
            }
            MessageKind::ParameterChange => Self::ParameterChange(take_parameter(buf)),
            MessageKind::ParameterChangeMin => Self::ParameterChangeMin(take_parameter(buf)),
            MessageKind::ParameterChangeMax => Self::ParameterChangeMax(take_parameter(buf)),
            MessageKind::ParameterTempoChange => Self::ParameterTempoChange(take_tempo(buf)),
            MessageKind::ParameterTempoChange2 => Self::ParameterTempoChange2(take_tempo(buf)),
            MessageKind::PresetChange => Self::PresetChange,
            MessageKind::PresetChangeAlert => Self::PresetChangeAlert,
            MessageKind::PresetLoad => Self::PresetLoad,
            MessageKind::PresetQuery => Self::PresetQuery(PresetQuery {
                preset_id: buf.get_u16_le(),
                set_id: buf.get_u16_le(),
            }),
            MessageKind::SetChange => Self::SetChange,
            MessageKind::SetQuery => Self::SetQuery(SetQuery {
                id: buf.get_u32_le(),
            }),
        };

        Ok(payload)
    }
}

fn take_value(buf: &mut &[u8]) -> [u8; 4] {
    let mut value = [0u8; 4];
    buf.copy_to_slice(&mut value);
    value
}

fn take_parameter(buf: &mut &[u8]) -> ParameterValue {
    buf.advance(4);
    ParameterValue {
        parent_id: buf.get_u32_le(),
        value_type: ValueType(buf.get_u32_le()),
        param_id: buf.get_u32_le(),
        value: take_value(buf),
    }
}

fn take_tempo(buf: &mut &[u8]) -> TempoChange {
    buf.advance(4);
    TempoChange {
        parent_id: buf.get_u32_le(),
        tempo: buf.get_u32_le(),
    }
}
