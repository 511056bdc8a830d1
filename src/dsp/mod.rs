//! Low-level DSP primitives used by the snap synthesizer.
//!
//! These components stay focused on the signal-processing math: noise
//! generation, filtering, envelopes, and buffer arithmetic. The snap and
//! scene modules layer the actual sound-design recipe on top.

/// Offline single-tap echo.
pub mod delay;
/// Exponential decay envelopes.
pub mod envelope;
/// State-variable filter and the band-pass built from it.
pub mod filter;
/// Weighted summation and peak measurement.
pub mod mix;
/// Deterministic seeded white-noise source.
pub mod noise;
