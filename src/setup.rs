//! Setup-parameter address space
//!
//! Setup parameters are device-global and addressed by fixed numbers,
//! separate from per-module parameter ids.

use std::fmt;

/// Number of cabinet simulators sharing the cabinet address block
pub const CAB_SLOTS: u32 = 2;

const TOPOLOGY_BASE: u32 = 0x26;
const MODE_BASE: u32 = 0x27;
const CLASS_BASE: u32 = 0x28;
const IDENTITY_STRIDE: u32 = 3;

/// Topology address of a dual module
#[must_use]
pub const fn topology_address(module_id: u32) -> u32 {
    TOPOLOGY_BASE.wrapping_add(module_id.wrapping_mul(IDENTITY_STRIDE))
}

/// Mode address of a dual module
#[must_use]
pub const fn mode_address(module_id: u32) -> u32 {
    MODE_BASE.wrapping_add(module_id.wrapping_mul(IDENTITY_STRIDE))
}

/// Class address of a dual module
#[must_use]
pub const fn class_address(module_id: u32) -> u32 {
    CLASS_BASE.wrapping_add(module_id.wrapping_mul(IDENTITY_STRIDE))
}

/// Cabinet-specific parameters, keyed by their parameter id in the device model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CabParam {
    /// Early reflections
    Er = 0,
    /// Microphone model
    Mic = 1,
    /// Low cut frequency
    LowCut = 2,
    /// Resonance level
    ResonanceLevel = 3,
    /// Thump
    Thump = 4,
    /// Decay
    Decay = 5,
}

impl CabParam {
    /// All cabinet parameters
    pub const ALL: [Self; 6] = [
        Self::Er,
        Self::Mic,
        Self::LowCut,
        Self::ResonanceLevel,
        Self::Thump,
        Self::Decay,
    ];

    /// Map a parameter id to a cabinet parameter
    #[must_use]
    pub const fn from_param_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Er),
            1 => Some(Self::Mic),
            2 => Some(Self::LowCut),
            3 => Some(Self::ResonanceLevel),
            4 => Some(Self::Thump),
            5 => Some(Self::Decay),
            _ => None,
        }
    }

    /// Parameter id in the device model
    #[must_use]
    pub const fn param_id(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for CabParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Er => "ER",
            Self::Mic => "Mic",
            Self::LowCut => "LowCut",
            Self::ResonanceLevel => "ResLvl",
            Self::Thump => "Thump",
            Self::Decay => "Decay",
        };
        write!(f, "{name}")
    }
}

/// Cabinet setup addresses
#[allow(missing_docs)]
pub mod cab {
    pub const CAB0_ER: u32 = 0x3C;
    pub const CAB1_ER: u32 = 0x3D;
    pub const CAB0_MIC: u32 = 0x3E;
    pub const CAB1_MIC: u32 = 0x3F;
    pub const CAB0_LOW_CUT: u32 = 0x40;
    pub const CAB1_LOW_CUT: u32 = 0x41;
    pub const CAB0_RES_LEVEL: u32 = 0x42;
    pub const CAB1_RES_LEVEL: u32 = 0x43;
    pub const CAB0_THUMP: u32 = 0x44;
    pub const CAB1_THUMP: u32 = 0x45;
    pub const CAB0_DECAY: u32 = 0x46;
    pub const CAB1_DECAY: u32 = 0x47;
}

/// Look up the setup address of a cabinet parameter.
///
/// There is no fallback: slots other than 0 and 1 have no address.
#[must_use]
pub const fn cab_address(slot: u32, param: CabParam) -> Option<u32> {
    let address = match (slot, param) {
        (0, CabParam::Er) => cab::CAB0_ER,
        (1, CabParam::Er) => cab::CAB1_ER,
        (0, CabParam::Mic) => cab::CAB0_MIC,
        (1, CabParam::Mic) => cab::CAB1_MIC,
        (0, CabParam::LowCut) => cab::CAB0_LOW_CUT,
        (1, CabParam::LowCut) => cab::CAB1_LOW_CUT,
        (0, CabParam::ResonanceLevel) => cab::CAB0_RES_LEVEL,
        (1, CabParam::ResonanceLevel) => cab::CAB1_RES_LEVEL,
        (0, CabParam::Thump) => cab::CAB0_THUMP,
        (1, CabParam::Thump) => cab::CAB1_THUMP,
        (0, CabParam::Decay) => cab::CAB0_DECAY,
        (1, CabParam::Decay) => cab::CAB1_DECAY,
        _ => return None,
    };
    Some(address)
}

/// Cabinet slot owning a module: two cabinet modules share one slot's range.
#[must_use]
pub const fn cab_slot(owner_id: u32) -> u32 {
    owner_id / 2
}
