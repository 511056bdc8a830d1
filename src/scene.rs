//! Places snap events on the output timeline.
//!
//! The scene is two snaps: one at the start, one roughly a quarter
//! second later and slightly quieter, the way a claw re-closes with a
//! little less force. Each snap gets its own seed so the noise layers
//! of the second are fully decorrelated from the first. An optional
//! single-tap echo can smear the whole scene against a nearby surface.

use crate::config::RenderConfig;
use crate::dsp::{delay, mix};
use crate::snap::{self, SnapParams};

/// Single-tap echo settings for the composed scene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct EchoParams {
    pub delay_ms: f32,
    /// Attenuation of the delayed copy (wet level).
    pub level: f32,
}

/// Timing, taper, and seeding for the two-snap scene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SceneParams {
    /// Time between the two snap onsets, in milliseconds.
    pub gap_ms: f32,
    /// Level of the second snap relative to the first.
    pub second_level: f32,
    pub first_seed: u64,
    pub second_seed: u64,
    pub echo: Option<EchoParams>,
}

impl Default for SceneParams {
    /// The reference scene: 220ms gap, second snap at 0.85, no echo.
    fn default() -> Self {
        Self {
            gap_ms: 220.0,
            second_level: 0.85,
            first_seed: 42,
            second_seed: 99,
            echo: None,
        }
    }
}

/// Produce the pre-normalization waveform: both snaps summed, echo
/// applied if configured.
pub fn compose(cfg: &RenderConfig, params: &SnapParams, scene: &SceneParams) -> Vec<f32> {
    let mut out = snap::render_snap(cfg, params, 0, scene.first_seed);

    let second_offset = cfg.samples_for_ms(scene.gap_ms);
    let second = snap::render_snap(cfg, params, second_offset, scene.second_seed);
    mix::add_scaled(&mut out, &second, scene.second_level);

    if let Some(echo) = scene.echo {
        delay::single_tap_echo(&mut out, cfg.samples_for_ms(echo.delay_ms), echo.level);
    }

    out
}
