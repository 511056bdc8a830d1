//! Exponential decay envelopes.

/*
Exponential Decay
=================

Every layer of a snap starts at full level and dies away; none of them
need attack, sustain, or gate handling. That makes the envelope a plain
multiplier:

    output[i] = signal[i] × e^(-rate × t_i)

Two flavors of t differ only in their unit:

  window decay    t runs 0 → 1 across the burst, whatever its length.
                  `rate` is then the total number of decay constants the
                  burst falls through: rate 4 means the last sample sits
                  at e^-4 ≈ 1.8% of the first. Short clicks use this so
                  their shape is independent of the window length.

  timed decay     t is wall-clock seconds, `rate` is per second. Layers
                  that span the whole snap (body resonance, hollow ring)
                  use this so their ring-out time stays fixed even if
                  the snap window changes.
*/

/// Decay across the buffer as a whole: the first sample keeps full
/// level, the last is attenuated by `e^-rate`.
pub fn apply_window_decay(buffer: &mut [f32], rate: f32) {
    let last = buffer.len().saturating_sub(1).max(1) as f32;
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample *= (-rate * i as f32 / last).exp();
    }
}

/// Decay at `rate` per second of signal time.
pub fn apply_timed_decay(buffer: &mut [f32], rate_per_sec: f32, sample_rate: f32) {
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample *= (-rate_per_sec * i as f32 / sample_rate).exp();
    }
}
