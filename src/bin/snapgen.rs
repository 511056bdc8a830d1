//! snapgen - renders the two-click shell snap notification sound.
//!
//! Run with: cargo run

use std::path::Path;

use snapgen::{
    config::RenderConfig,
    encode,
    io::wav,
    scene::{self, SceneParams},
    snap::SnapParams,
};

const OUTPUT_PATH: &str = "crab-snap.wav";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cfg = RenderConfig::default();
    let recipe = SnapParams::classic();
    let scene_params = SceneParams::default();

    let waveform = scene::compose(&cfg, &recipe, &scene_params);
    let samples = encode::encode(waveform, encode::TARGET_PEAK);
    wav::write_mono_16bit(Path::new(OUTPUT_PATH), cfg.sample_rate, &samples)?;

    println!("Generated: {OUTPUT_PATH}");
    println!(
        "Duration: {}ms, Sample rate: {}Hz",
        cfg.duration_ms, cfg.sample_rate
    );

    Ok(())
}
