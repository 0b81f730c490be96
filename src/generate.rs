//! Message generators
//!
//! One function per host-side intent. Each builds a fresh [`Message`] from
//! the device model values it is given; nothing is shared between calls.

use tracing::trace;

use crate::device::{DualModule, Module, Parameter};
use crate::protocol::{
    ActiveChange, Error, Message, MessageKind, ParameterValue, Payload, PresetQuery, Result,
    SetQuery, SetupChange, TempoChange, TypeChange, ValueType, encode_tempo,
};
use crate::setup::{self, CabParam};

fn finish(payload: Payload) -> Message {
    let message = Message::command(payload);
    trace!(kind = %message.kind(), len = message.len(), "generated message");
    message
}

/// Change a device-global setup parameter
#[must_use]
pub fn setup_change(param_id: u32, value_type: ValueType, value: [u8; 4]) -> Message {
    finish(Payload::SetupChange(SetupChange {
        value_type,
        param_id,
        value,
    }))
}

/// Blank setup change, used to request setup state
#[must_use]
pub fn setup_request() -> Message {
    finish(Payload::zeroed(MessageKind::SetupChange))
}

fn identity_change(address: u32, code: u8) -> Message {
    setup_change(address, ValueType::INT32, [code, 0, 0, 0])
}

/// Change the class of a dual module
#[must_use]
pub fn dt_class_change(module: &impl DualModule) -> Message {
    identity_change(setup::class_address(module.id()), module.class_code())
}

/// Change the mode of a dual module
#[must_use]
pub fn dt_mode_change(module: &impl DualModule) -> Message {
    identity_change(setup::mode_address(module.id()), module.mode_code())
}

/// Change the topology of a dual module
#[must_use]
pub fn dt_topology_change(module: &impl DualModule) -> Message {
    identity_change(setup::topology_address(module.id()), module.topology_code())
}

/// Enable or bypass a module
#[must_use]
pub fn active_change(module: &impl Module) -> Message {
    finish(Payload::ActiveChange(ActiveChange {
        item_id: module.id(),
        active: module.active_flag(),
    }))
}

/// Change a module's algorithm
#[must_use]
pub fn type_change(module: &impl Module) -> Message {
    finish(Payload::TypeChange(TypeChange {
        item_id: module.id(),
        new_type: module.type_code(),
    }))
}

fn parameter_value(param: &impl Parameter, value: [u8; 4]) -> ParameterValue {
    ParameterValue {
        parent_id: param.parent_id(),
        value_type: param.value_type(),
        param_id: param.id(),
        value,
    }
}

/// Set a parameter's current value
#[must_use]
pub fn parameter_change(param: &impl Parameter) -> Message {
    finish(Payload::ParameterChange(parameter_value(
        param,
        param.current(),
    )))
}

/// Send a parameter's lower bound
#[must_use]
pub fn parameter_change_min(param: &impl Parameter) -> Message {
    finish(Payload::ParameterChangeMin(parameter_value(param, param.min())))
}

/// Send a parameter's upper bound
#[must_use]
pub fn parameter_change_max(param: &impl Parameter) -> Message {
    finish(Payload::ParameterChangeMax(parameter_value(param, param.max())))
}

/// Change a cabinet parameter.
///
/// Cabinet parameters live in the setup address space. The owning module id
/// selects the cabinet slot (`id / 2`), the parameter id selects the control.
///
/// # Errors
///
/// [`Error::UnmappedCabinetParameter`] if the parameter is not one of the
/// cabinet controls or the slot has no address block.
pub fn parameter_cab_change(param: &impl Parameter) -> Result<Message> {
    let owner_id = param.parent_id();
    let param_id = param.id();
    let unmapped = || Error::UnmappedCabinetParameter { owner_id, param_id };

    let kind = CabParam::from_param_id(param_id).ok_or_else(unmapped)?;
    let address = setup::cab_address(setup::cab_slot(owner_id), kind).ok_or_else(unmapped)?;

    Ok(setup_change(address, param.value_type(), param.current()))
}

fn tempo_change(param: &impl Parameter) -> TempoChange {
    TempoChange {
        parent_id: param.parent_id(),
        tempo: encode_tempo(param.current()),
    }
}

/// Send a tempo-synced parameter value
#[must_use]
pub fn parameter_tempo_change(param: &impl Parameter) -> Message {
    finish(Payload::ParameterTempoChange(tempo_change(param)))
}

/// Send a tempo-synced parameter value using the second tempo sub-kind
#[must_use]
pub fn parameter_tempo_change2(param: &impl Parameter) -> Message {
    finish(Payload::ParameterTempoChange2(tempo_change(param)))
}

/// Notify a preset change
#[must_use]
pub fn preset_change() -> Message {
    finish(Payload::PresetChange)
}

/// Preset change alert
#[must_use]
pub fn preset_change_alert() -> Message {
    finish(Payload::PresetChangeAlert)
}

/// Load the current preset
#[must_use]
pub fn preset_load() -> Message {
    finish(Payload::PresetLoad)
}

/// Request a preset within a set
#[must_use]
pub fn preset_query(preset_id: u16, set_id: u16) -> Message {
    finish(Payload::PresetQuery(PresetQuery { preset_id, set_id }))
}

/// Notify a set change
#[must_use]
pub fn set_change() -> Message {
    finish(Payload::SetChange)
}

/// Request a set
#[must_use]
pub fn set_query(id: u32) -> Message {
    finish(Payload::SetQuery(SetQuery { id }))
}
