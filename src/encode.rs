//! Peak normalization and 16-bit quantization.
//!
//! The composed waveform arrives at whatever level the layer weights
//! produced; this stage rescales it so the loudest sample lands at
//! `TARGET_PEAK` of full scale, then truncates each sample to a signed
//! 16-bit integer. An all-silent input would make the rescale a divide
//! by zero, so it is treated as a defined no-op: silence in, silence
//! out.

use crate::dsp::mix;

/// Fraction of full scale the loudest sample is normalized to.
pub const TARGET_PEAK: f32 = 0.95;

const I16_FULL_SCALE: f32 = i16::MAX as f32;

/// Rescale so the peak absolute sample equals `target_peak`. Silent
/// buffers are left untouched.
pub fn normalize_in_place(buffer: &mut [f32], target_peak: f32) {
    let current = mix::peak(buffer);
    if current <= f32::EPSILON {
        return;
    }
    mix::gain_in_place(buffer, target_peak / current);
}

/// Truncate each sample to a signed 16-bit integer.
pub fn quantize(buffer: &[f32]) -> Vec<i16> {
    buffer.iter().map(|&s| (s * I16_FULL_SCALE) as i16).collect()
}

/// Normalize the finished waveform to `target_peak`, then quantize.
pub fn encode(mut buffer: Vec<f32>, target_peak: f32) -> Vec<i16> {
    normalize_in_place(&mut buffer, target_peak);
    quantize(&buffer)
}
