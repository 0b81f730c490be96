//! Device model boundary
//!
//! The effect-slot and parameter model lives outside this crate. Generators
//! only need the handful of values below, already in wire form.

use crate::protocol::ValueType;

/// An addressable processing unit (amp, cabinet, effect, ...).
pub trait Module {
    /// Numeric module identifier
    fn id(&self) -> u32;

    /// Active/bypass flag as the device expects it
    fn active_flag(&self) -> [u8; 4];

    /// Algorithm/type code
    fn type_code(&self) -> u32;
}

/// A module with switchable class, mode and topology (e.g. a dual-topology amp).
pub trait DualModule: Module {
    /// Raw class code
    fn class_code(&self) -> u8;

    /// Raw mode code
    fn mode_code(&self) -> u8;

    /// Raw topology code
    fn topology_code(&self) -> u8;
}

/// A parameter of a module.
pub trait Parameter {
    /// Identifier of the owning module
    fn parent_id(&self) -> u32;

    /// Parameter identifier within the module
    fn id(&self) -> u32;

    /// Wire value-type code
    fn value_type(&self) -> ValueType;

    /// Current value, raw little-endian bytes
    fn current(&self) -> [u8; 4];

    /// Lower bound, raw little-endian bytes
    fn min(&self) -> [u8; 4];

    /// Upper bound, raw little-endian bytes
    fn max(&self) -> [u8; 4];
}

impl<T: Module + ?Sized> Module for &T {
    fn id(&self) -> u32 {
        (**self).id()
    }

    fn active_flag(&self) -> [u8; 4] {
        (**self).active_flag()
    }

    fn type_code(&self) -> u32 {
        (**self).type_code()
    }
}

impl<T: Parameter + ?Sized> Parameter for &T {
    fn parent_id(&self) -> u32 {
        (**self).parent_id()
    }

    fn id(&self) -> u32 {
        (**self).id()
    }

    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }

    fn current(&self) -> [u8; 4] {
        (**self).current()
    }

    fn min(&self) -> [u8; 4] {
        (**self).min()
    }

    fn max(&self) -> [u8; 4] {
        (**self).max()
    }
}
