use std::f32::consts::TAU;

/*
| type      | constructed by     | passes          | rejects      |
| --------- | ------------------ | --------------- | ------------ |
| low-pass  | SVFilter::lowpass  | below cutoff    | above cutoff |
| high-pass | SVFilter::highpass | above cutoff    | below cutoff |
| band-pass | HPF ∘ LPF (series) | between edges   | outside      |

Band edges are explicit low/high cutoffs in Hz; there is no single
center-frequency band-pass response.
*/

#[derive(Debug, Clone, Copy)]
enum Response {
    LowPass,
    HighPass,
}

/// Topology-preserving state-variable filter, 12dB/octave.
pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    cutoff_hz: f32,
    response: Response,
}

impl SVFilter {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(cutoff_hz, Response::LowPass)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(cutoff_hz, Response::HighPass)
    }

    fn new(cutoff_hz: f32, response: Response) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            response,
        }
    }

    #[inline]
    fn compute_g(&self, sample_rate: f32) -> f32 {
        let wd = TAU * self.cutoff_hz;
        let wa = (2.0 * sample_rate) * (wd / (2.0 * sample_rate)).tan();
        wa / (2.0 * sample_rate)
    }

    #[inline]
    fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        match self.response {
            Response::LowPass => v2,
            Response::HighPass => sample - k * v1 - v2,
        }
    }

    /// Filter the buffer in place.
    pub fn render(&mut self, buffer: &mut [f32], sample_rate: f32) {
        let g = self.compute_g(sample_rate);
        let k = 2.0; // zero-resonance damping

        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, k, g);
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }
}

/// Band-pass with explicit edges: a high-pass at the low edge feeding a
/// low-pass at the high edge.
pub struct BandPass {
    highpass: SVFilter,
    lowpass: SVFilter,
}

impl BandPass {
    /// `low_hz`/`high_hz` are the band edges, not a center frequency.
    pub fn new(low_hz: f32, high_hz: f32) -> Self {
        debug_assert!(low_hz < high_hz);

        Self {
            highpass: SVFilter::highpass(low_hz),
            lowpass: SVFilter::lowpass(high_hz),
        }
    }

    /// Filter the buffer in place, keeping energy between the edges.
    pub fn render(&mut self, buffer: &mut [f32], sample_rate: f32) {
        self.highpass.render(buffer, sample_rate);
        self.lowpass.render(buffer, sample_rate);
    }

    pub fn reset(&mut self) {
        self.highpass.reset();
        self.lowpass.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 44_100.0;

    fn sine(freq: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (TAU * freq * i as f32 / SAMPLE_RATE).sin())
            .collect()
    }

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(256);
        buffer
            .get(skip..)
            .unwrap_or(buffer)
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn lowpass_passes_dc() {
        let mut filter = SVFilter::lowpass(500.0);
        let mut buffer = vec![1.0; 512];

        filter.render(&mut buffer, SAMPLE_RATE);

        assert!(buffer[511] > 0.99);
    }

    #[test]
    fn highpass_blocks_dc() {
        let mut filter = SVFilter::highpass(500.0);
        let mut buffer = vec![1.0; 512];

        filter.render(&mut buffer, SAMPLE_RATE);

        assert!(buffer[511].abs() < 0.001);
    }

    #[test]
    fn bandpass_passes_in_band_tone() {
        let mut filter = BandPass::new(800.0, 2_200.0);
        let mut buffer = sine(1_500.0, 2_048);

        filter.render(&mut buffer, SAMPLE_RATE);

        let peak = peak_after_transient(&buffer);
        assert!(peak > 0.5, "in-band tone should survive, got peak {peak}");
    }

    #[test]
    fn bandpass_rejects_out_of_band_tones() {
        let mut filter = BandPass::new(800.0, 2_200.0);
        let mut in_band = sine(1_500.0, 2_048);
        filter.render(&mut in_band, SAMPLE_RATE);
        let in_peak = peak_after_transient(&in_band);

        filter.reset();
        let mut below = sine(100.0, 2_048);
        filter.render(&mut below, SAMPLE_RATE);
        let below_peak = peak_after_transient(&below);

        filter.reset();
        let mut above = sine(10_000.0, 2_048);
        filter.render(&mut above, SAMPLE_RATE);
        let above_peak = peak_after_transient(&above);

        assert!(
            in_peak > below_peak * 4.0,
            "expected low rejection: in={in_peak}, below={below_peak}"
        );
        assert!(
            in_peak > above_peak * 4.0,
            "expected high rejection: in={in_peak}, above={above_peak}"
        );
    }

    #[test]
    fn reset_clears_state() {
        let mut filter = BandPass::new(800.0, 2_200.0);
        let mut first = sine(1_500.0, 512);
        filter.render(&mut first, SAMPLE_RATE);

        filter.reset();
        let mut second = sine(1_500.0, 512);
        filter.render(&mut second, SAMPLE_RATE);

        let reference = {
            let mut fresh = BandPass::new(800.0, 2_200.0);
            let mut buffer = sine(1_500.0, 512);
            fresh.render(&mut buffer, SAMPLE_RATE);
            buffer
        };
        assert_eq!(second, reference);
    }
}
