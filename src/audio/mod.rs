//! Audio accumulation and output.

mod buffer;

pub use buffer::{AudioBuffer, AudioError};

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;
    use tempfile::TempDir;

    #[test]
    fn test_buffer_starts_empty() {
        let buffer = AudioBuffer::new(24_000);
        assert!(buffer.is_empty());
        assert_eq!(buffer.duration_secs(), 0.0);
    }

    #[test]
    fn test_push_accumulates_in_order() {
        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&[0.1, 0.2]);
        buffer.push(&[0.3]);

        assert_eq!(buffer.samples(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_silence_length() {
        assert_eq!(AudioBuffer::silence_len(24_000, 400), 9_600);
        assert_eq!(AudioBuffer::silence_len(44_100, 300), 13_230);
        assert_eq!(AudioBuffer::silence_len(24_000, 0), 0);
    }

    #[test]
    fn test_push_silence_extends_with_zeros() {
        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&[0.5]);
        buffer.push_silence_ms(500);

        assert_eq!(buffer.len(), 1 + 12_000);
        assert!(buffer.samples()[1..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_duration_secs() {
        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&vec![0.0; 36_000]);
        assert!((buffer.duration_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_scales_peak_to_095() {
        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&[0.5, -0.25, 0.1]);
        buffer.normalize();

        let peak = buffer.samples().iter().fold(0.0_f32, |m, s| m.max(s.abs()));
        assert!((peak - 0.95).abs() < 1e-6);
        // Relative shape preserved
        assert!((buffer.samples()[1] / buffer.samples()[0] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_attenuates_clipping_audio() {
        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&[2.0, -1.5]);
        buffer.normalize();

        assert!((buffer.samples()[0] - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_leaves_silence_alone() {
        let mut buffer = AudioBuffer::new(24_000);
        buffer.push_silence_ms(100);
        buffer.normalize();

        assert!(buffer.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_write_wav_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.wav");

        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&[0.0, 0.5, -0.5, 0.95]);
        buffer.write_wav(&path).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24_000);
        assert_eq!(spec.bits_per_sample, 16);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], 0);
        assert!((samples[1] as f32 / i16::MAX as f32 - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_write_wav_clamps_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clamp.wav");

        let mut buffer = AudioBuffer::new(24_000);
        buffer.push(&[1.5, -2.0]);
        buffer.write_wav(&path).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples[0], i16::MAX);
        assert_eq!(samples[1], -i16::MAX);
    }
}
