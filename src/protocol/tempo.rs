//! Tempo value encoding
//!
//! The device stores tempo state as a float; anything at or below `1.0`
//! means the parameter is free-running rather than synced to a BPM.

/// Encode a raw 4-byte parameter value as a whole BPM.
///
/// The bytes are read as a little-endian `f32`. Values strictly above `1.0`
/// are rounded half away from zero; everything else (including NaN) is `0`.
#[must_use]
pub fn encode_tempo(value: [u8; 4]) -> u32 {
    tempo_from_f32(f32::from_le_bytes(value))
}

/// Same as [`encode_tempo`] for an already decoded float.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tempo_from_f32(value: f32) -> u32 {
    if value > 1.0 {
        // `as` saturates at u32::MAX for +inf and oversized values
        f64::from(value).round() as u32
    } else {
        0
    }
}
