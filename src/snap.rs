//! The snap voice: one shell click, built from five layered signals.
//!
//! A snap is two noise clicks a few milliseconds apart (the claw faces
//! making contact, then the shell closing) over a bed of quieter color
//! layers. Each layer is rendered on its own and summed into the event
//! buffer at a tuned weight.
//!
//! # How It Works
//!
//! 1. Contact click: band-passed noise, ~4.5ms, sharp decay
//! 2. Closure click: warmer band, longer window, starts ~6ms in
//! 3. Body resonance: band-passed noise ringing across the whole snap
//! 4. Hollow ring: two detuned sines, like tapping a hollow shell
//! 5. Low thump: a quiet 250Hz bump under the closure
//!
//! The clicks carry almost all of the energy; resonance, ring, and
//! thump are subtle color. The `crunchy` preset adds a sixth layer of
//! short grit bursts for a rougher shell texture.
//!
//! # Variations
//!
//! - Wider click bands = brighter, more "plastic" snap
//! - Longer ring decay = more hollow, bony character
//! - More thump = heavier, closer snap
//! - Crackle layer = dry, gritty shell surface

use std::f32::consts::TAU;

use crate::config::RenderConfig;
use crate::dsp::{envelope, filter::BandPass, mix, noise::NoiseSource};

/// A band-passed noise burst with a window-relative decay.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct BurstLayer {
    /// Offset of the burst from the start of the snap, in milliseconds.
    pub start_ms: f32,
    pub length_ms: f32,
    /// Band-pass edges in Hz (low, high).
    pub band: (f32, f32),
    /// Window decay rate; see `dsp::envelope`.
    pub decay: f32,
    /// Mix weight into the snap event.
    pub level: f32,
}

/// Band-passed noise spanning the whole snap window.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct BodyLayer {
    pub band: (f32, f32),
    /// Decay rate per second of signal time.
    pub decay_per_sec: f32,
    pub level: f32,
}

/// Two summed sine tones with a fast ring-out, aligned with the
/// closure click.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct RingLayer {
    pub length_ms: f32,
    pub primary_hz: f32,
    pub primary_weight: f32,
    /// Slightly detuned overtone for an organic quality.
    pub overtone_hz: f32,
    pub overtone_weight: f32,
    pub decay_per_sec: f32,
    pub level: f32,
}

/// A single low sine under the closure click.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ThumpLayer {
    pub freq_hz: f32,
    /// Window decay rate over the closure window.
    pub decay: f32,
    pub level: f32,
}

/// One grit burst inside the crackle layer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct CrackleBurst {
    pub start_ms: f32,
    pub length_ms: f32,
    pub decay: f32,
}

/// Several short noise bursts sharing one band and mix weight.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct CrackleLayer {
    pub band: (f32, f32),
    pub bursts: Vec<CrackleBurst>,
    pub level: f32,
}

/// The full recipe for one snap event. Both presets are tunings of
/// this one structure; there is no per-variant code path.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SnapParams {
    /// Length of the snap event in milliseconds.
    pub snap_ms: f32,
    pub contact: BurstLayer,
    pub closure: BurstLayer,
    pub body: BodyLayer,
    pub ring: RingLayer,
    pub thump: ThumpLayer,
    pub crackle: Option<CrackleLayer>,
}

impl SnapParams {
    /// The reference tuning: a smooth two-click snap, no grit.
    pub fn classic() -> Self {
        Self {
            snap_ms: 60.0,
            contact: BurstLayer {
                start_ms: 0.0,
                length_ms: 4.5,
                band: (800.0, 2_200.0),
                decay: 4.0,
                level: 0.42,
            },
            closure: BurstLayer {
                start_ms: 6.0,
                length_ms: 9.0,
                band: (600.0, 1_800.0),
                decay: 3.0,
                level: 0.42,
            },
            body: BodyLayer {
                band: (800.0, 1_600.0),
                decay_per_sec: 90.0,
                level: 0.06,
            },
            ring: RingLayer {
                length_ms: 25.0,
                primary_hz: 1_200.0,
                primary_weight: 0.7,
                overtone_hz: 1_850.0,
                overtone_weight: 0.3,
                decay_per_sec: 180.0,
                level: 0.08,
            },
            thump: ThumpLayer {
                freq_hz: 250.0,
                decay: 6.0,
                level: 0.02,
            },
            crackle: None,
        }
    }

    /// A tighter snap with a shell-grit texture layer.
    pub fn crunchy() -> Self {
        let base = Self::classic();
        Self {
            snap_ms: 50.0,
            contact: BurstLayer {
                level: 0.40,
                ..base.contact
            },
            closure: BurstLayer {
                level: 0.40,
                ..base.closure
            },
            body: BodyLayer {
                level: 0.05,
                ..base.body
            },
            ring: RingLayer {
                level: 0.07,
                ..base.ring
            },
            thump: base.thump,
            crackle: Some(CrackleLayer {
                band: (900.0, 2_600.0),
                bursts: vec![
                    CrackleBurst {
                        start_ms: 2.0,
                        length_ms: 3.0,
                        decay: 5.0,
                    },
                    CrackleBurst {
                        start_ms: 9.5,
                        length_ms: 3.0,
                        decay: 4.0,
                    },
                    CrackleBurst {
                        start_ms: 14.0,
                        length_ms: 3.0,
                        decay: 6.0,
                    },
                ],
                level: 0.06,
            }),
        }
    }
}

/// Render one snap event (just the snap window, no surrounding
/// silence). The seed fixes every noise draw, so equal seeds give
/// bit-identical events.
pub fn render_event(cfg: &RenderConfig, params: &SnapParams, seed: u64) -> Vec<f32> {
    let sample_rate = cfg.sample_rate as f32;
    let snap_len = cfg.samples_for_ms(params.snap_ms);
    let mut event = vec![0.0; snap_len];
    let mut noise = NoiseSource::seeded(seed);

    add_noise_burst(&mut event, &mut noise, cfg, &params.contact);
    add_noise_burst(&mut event, &mut noise, cfg, &params.closure);

    // Body resonance rings across the whole snap window
    let mut body = noise.burst(snap_len);
    BandPass::new(params.body.band.0, params.body.band.1).render(&mut body, sample_rate);
    envelope::apply_timed_decay(&mut body, params.body.decay_per_sec, sample_rate);
    mix::add_scaled(&mut event, &body, params.body.level);

    // Hollow ring and thump both sit under the closure click
    let closure_start = cfg.samples_for_ms(params.closure.start_ms).min(snap_len);

    let ring_len = cfg
        .samples_for_ms(params.ring.length_ms)
        .min(snap_len.saturating_sub(closure_start));
    let mut ring: Vec<f32> = (0..ring_len)
        .map(|i| {
            let t = i as f32 / sample_rate;
            (TAU * params.ring.primary_hz * t).sin() * params.ring.primary_weight
                + (TAU * params.ring.overtone_hz * t).sin() * params.ring.overtone_weight
        })
        .collect();
    envelope::apply_timed_decay(&mut ring, params.ring.decay_per_sec, sample_rate);
    mix::add_scaled(
        &mut event[closure_start..closure_start + ring_len],
        &ring,
        params.ring.level,
    );

    let thump_len = cfg
        .samples_for_ms(params.closure.length_ms)
        .min(snap_len.saturating_sub(closure_start));
    let mut thump: Vec<f32> = (0..thump_len)
        .map(|i| (TAU * params.thump.freq_hz * i as f32 / sample_rate).sin())
        .collect();
    envelope::apply_window_decay(&mut thump, params.thump.decay);
    mix::add_scaled(
        &mut event[closure_start..closure_start + thump_len],
        &thump,
        params.thump.level,
    );

    if let Some(crackle) = &params.crackle {
        let mut band = BandPass::new(crackle.band.0, crackle.band.1);
        for burst in &crackle.bursts {
            let start = cfg.samples_for_ms(burst.start_ms).min(snap_len);
            let len = cfg
                .samples_for_ms(burst.length_ms)
                .min(snap_len.saturating_sub(start));
            let mut grit = noise.burst(len);
            band.reset();
            band.render(&mut grit, sample_rate);
            envelope::apply_window_decay(&mut grit, burst.decay);
            mix::add_scaled(&mut event[start..start + len], &grit, crackle.level);
        }
    }

    event
}

/// Render a snap into a buffer of `cfg.total_samples()` length, placed
/// at `offset_samples`, silence everywhere else.
pub fn render_snap(
    cfg: &RenderConfig,
    params: &SnapParams,
    offset_samples: usize,
    seed: u64,
) -> Vec<f32> {
    let mut out = vec![0.0; cfg.total_samples()];
    let event = render_event(cfg, params, seed);
    place_event(&mut out, &event, offset_samples);
    out
}

/// Copy as much of the event as fits starting at `offset`. The tail is
/// truncated at the buffer end; nothing wraps around to the start.
pub fn place_event(out: &mut [f32], event: &[f32], offset: usize) {
    if offset >= out.len() {
        return;
    }
    let fit = event.len().min(out.len() - offset);
    out[offset..offset + fit].copy_from_slice(&event[..fit]);
}

fn add_noise_burst(
    event: &mut [f32],
    noise: &mut NoiseSource,
    cfg: &RenderConfig,
    layer: &BurstLayer,
) {
    let sample_rate = cfg.sample_rate as f32;
    let start = cfg.samples_for_ms(layer.start_ms);
    if start >= event.len() {
        return;
    }
    let len = cfg.samples_for_ms(layer.length_ms).min(event.len() - start);

    let mut burst = noise.burst(len);
    BandPass::new(layer.band.0, layer.band.1).render(&mut burst, sample_rate);
    envelope::apply_window_decay(&mut burst, layer.decay);
    mix::add_scaled(&mut event[start..start + len], &burst, layer.level);
}
