//! Message kinds, direction markers and value types

use std::fmt;

/// Every message kind the device understands.
///
/// This is the registry: each kind owns exactly one `(kind, sub_kind)` code
/// pair and one fixed payload layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// Device-global setup parameter change
    SetupChange,
    /// Enable/bypass an effect module
    ActiveChange,
    /// Change an effect module's algorithm
    TypeChange,
    /// Set a parameter's current value
    ParameterChange,
    /// Parameter lower bound
    ParameterChangeMin,
    /// Parameter upper bound
    ParameterChangeMax,
    /// Tempo-synced parameter value
    ParameterTempoChange,
    /// Tempo-synced parameter value, second sub-kind
    ParameterTempoChange2,
    /// Active preset changed
    PresetChange,
    /// Preset change alert
    PresetChangeAlert,
    /// Load the current preset
    PresetLoad,
    /// Request/describe a preset within a set
    PresetQuery,
    /// Active set changed
    SetChange,
    /// Request a set
    SetQuery,
}

const SETUP_FAMILY: u32 = 0x1C;
const PRESET_FAMILY: u32 = 0x04;
const SET_FAMILY: u32 = 0x05;

impl MessageKind {
    /// All registered kinds
    pub const ALL: [Self; 14] = [
        Self::SetupChange,
        Self::ActiveChange,
        Self::TypeChange,
        Self::ParameterChange,
        Self::ParameterChangeMin,
        Self::ParameterChangeMax,
        Self::ParameterTempoChange,
        Self::ParameterTempoChange2,
        Self::PresetChange,
        Self::PresetChangeAlert,
        Self::PresetLoad,
        Self::PresetQuery,
        Self::SetChange,
        Self::SetQuery,
    ];

    /// Wire `(kind, sub_kind)` codes
    #[must_use]
    pub const fn codes(self) -> (u32, u32) {
        match self {
            Self::SetupChange => (SETUP_FAMILY, 0x01),
            Self::ActiveChange => (SETUP_FAMILY, 0x02),
            Self::TypeChange => (SETUP_FAMILY, 0x03),
            Self::ParameterChange => (SETUP_FAMILY, 0x09),
            Self::ParameterChangeMin => (SETUP_FAMILY, 0x0A),
            Self::ParameterChangeMax => (SETUP_FAMILY, 0x0B),
            Self::ParameterTempoChange => (SETUP_FAMILY, 0x0C),
            Self::ParameterTempoChange2 => (SETUP_FAMILY, 0x0D),
            Self::PresetChange => (PRESET_FAMILY, 0x01),
            Self::PresetChangeAlert => (PRESET_FAMILY, 0x02),
            Self::PresetLoad => (PRESET_FAMILY, 0x03),
            Self::PresetQuery => (PRESET_FAMILY, 0x04),
            Self::SetChange => (SET_FAMILY, 0x01),
            Self::SetQuery => (SET_FAMILY, 0x02),
        }
    }

    /// Wire kind code
    #[must_use]
    pub const fn kind_code(self) -> u32 {
        self.codes().0
    }

    /// Wire sub-kind code
    #[must_use]
    pub const fn sub_kind_code(self) -> u32 {
        self.codes().1
    }

    /// Reverse registry lookup
    #[must_use]
    pub fn from_codes(kind: u32, sub_kind: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.codes() == (kind, sub_kind))
    }

    /// Fixed payload length in bytes (header excluded)
    #[must_use]
    pub const fn payload_len(self) -> usize {
        match self {
            Self::SetupChange => 16,
            Self::ActiveChange | Self::TypeChange => 12,
            Self::ParameterChange | Self::ParameterChangeMin | Self::ParameterChangeMax => 20,
            Self::ParameterTempoChange | Self::ParameterTempoChange2 => 12,
            Self::PresetChange | Self::PresetChangeAlert | Self::PresetLoad | Self::SetChange => 0,
            Self::PresetQuery | Self::SetQuery => 4,
        }
    }

    /// Check if messages of this kind carry no payload
    #[must_use]
    pub const fn is_header_only(self) -> bool {
        self.payload_len() == 0
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SetupChange => "SetupChange",
            Self::ActiveChange => "ActiveChange",
            Self::TypeChange => "TypeChange",
            Self::ParameterChange => "ParameterChange",
            Self::ParameterChangeMin => "ParameterChangeMin",
            Self::ParameterChangeMax => "ParameterChangeMax",
            Self::ParameterTempoChange => "ParameterTempoChange",
            Self::ParameterTempoChange2 => "ParameterTempoChange2",
            Self::PresetChange => "PresetChange",
            Self::PresetChangeAlert => "PresetChangeAlert",
            Self::PresetLoad => "PresetLoad",
            Self::PresetQuery => "PresetQuery",
            Self::SetChange => "SetChange",
            Self::SetQuery => "SetQuery",
        };
        write!(f, "{name}")
    }
}

/// Traffic direction marker, the second header field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Direction {
    /// Host-originated command
    #[default]
    Write = 0x01,
    /// Query or device response
    Read = 0x02,
}

impl Direction {
    /// Convert from wire value
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x01 => Some(Self::Write),
            0x02 => Some(Self::Read),
            _ => None,
        }
    }

    /// Convert to wire value
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::Read => write!(f, "read"),
        }
    }
}

/// Wire code describing how a 4-byte parameter value is interpreted.
///
/// Unknown codes received from the device are carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueType(pub u32);

impl ValueType {
    /// Little-endian signed 32-bit integer
    pub const INT32: Self = Self(0x00);
    /// Little-endian IEEE-754 single precision float
    pub const FLOAT32: Self = Self(0x01);

    /// Convert to wire value
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for ValueType {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_codes_roundtrip() {
        for kind in MessageKind::ALL {
            let (code, sub) = kind.codes();
            assert_eq!(MessageKind::from_codes(code, sub), Some(kind));
        }
    }

    #[test]
    fn test_kind_codes_distinct() {
        let codes: HashSet<_> = MessageKind::ALL.iter().map(|k| k.codes()).collect();
        assert_eq!(codes.len(), MessageKind::ALL.len());
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(MessageKind::from_codes(0xFF, 0x01), None);
        assert_eq!(MessageKind::from_codes(0x1C, 0xFF), None);
    }

    #[test]
    fn test_tempo_kinds_are_distinct_sub_kinds() {
        let first = MessageKind::ParameterTempoChange.codes();
        let second = MessageKind::ParameterTempoChange2.codes();
        assert_eq!(first.0, second.0);
        assert_ne!(first.1, second.1);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_u32(0x01), Some(Direction::Write));
        assert_eq!(Direction::from_u32(0x02), Some(Direction::Read));
        assert_eq!(Direction::from_u32(0x00), None);
        assert_eq!(Direction::default(), Direction::Write);
    }
}
