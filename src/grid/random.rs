//! Xorshift32 - small deterministic RNG behind `randomize`.
//!
//! Fast, no dependencies, and the caller keeps the state, so a fixed seed
//! replays the exact same board.

/// Advance the state and return the next raw value. State must be nonzero;
/// zero is a fixed point of the shift sequence.
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform value in [0, 1) built from the top 24 bits.
#[inline]
pub(crate) fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / 16_777_216.0
}

/// Clamp a probability knob into [0, 1]. Non-finite input collapses to 0
/// rather than poisoning the clamp.
#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
