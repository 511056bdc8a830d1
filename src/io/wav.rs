//! WAV serialization for the finished sample buffer.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Write mono 16-bit signed PCM to `path`.
pub fn write_mono_16bit(path: &Path, sample_rate: u32, samples: &[i16]) -> hound::Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_hound() {
        let path = std::env::temp_dir().join("snapgen_wav_roundtrip.wav");
        let samples: Vec<i16> = vec![0, 1_000, -1_000, i16::MAX, i16::MIN];

        write_mono_16bit(&path, 44_100, &samples).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);

        std::fs::remove_file(&path).ok();
    }
}
