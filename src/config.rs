//! Render-wide timing parameters.
//!
//! Every stage of the pipeline takes a `RenderConfig` by reference rather
//! than reading free-floating constants, so a test can render at a small
//! sample rate and the binary at the production one without touching the
//! synthesis code.

/// Sample rate and total length of the output buffer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Total duration of the rendered buffer in milliseconds.
    pub duration_ms: u32,
}

impl RenderConfig {
    pub const fn new(sample_rate: u32, duration_ms: u32) -> Self {
        Self {
            sample_rate,
            duration_ms,
        }
    }

    /// Length of the full output buffer in samples.
    pub fn total_samples(&self) -> usize {
        self.sample_rate as usize * self.duration_ms as usize / 1000
    }

    /// Convert a millisecond duration to a sample count, truncating.
    pub fn samples_for_ms(&self, ms: f32) -> usize {
        (self.sample_rate as f32 * ms / 1000.0) as usize
    }
}

impl Default for RenderConfig {
    /// The production tuning: 500ms at 44.1kHz (22050 samples).
    fn default() -> Self {
        Self::new(44_100, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_output_contract() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.total_samples(), 22_050);
    }

    #[test]
    fn samples_for_ms_truncates() {
        let cfg = RenderConfig::new(44_100, 500);
        // 4.5ms at 44.1kHz is 198.45 samples
        assert_eq!(cfg.samples_for_ms(4.5), 198);
        assert_eq!(cfg.samples_for_ms(220.0), 9_702);
    }
}
