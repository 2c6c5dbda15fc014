/// Decoded PCM held fully in memory, addressed in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSegment {
    sample_rate: u32,
    channels: u16,
    interleaved: Vec<i16>,
}

impl AudioSegment {
    pub fn new(sample_rate: u32, channels: u16, interleaved: Vec<i16>) -> Self {
        Self {
            sample_rate,
            channels,
            interleaved,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[i16] {
        &self.interleaved
    }

    pub fn frame_count(&self) -> u64 {
        if self.channels == 0 {
            0
        } else {
            (self.interleaved.len() / self.channels as usize) as u64
        }
    }

    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frame_count() * 1000 / self.sample_rate as u64
    }

    /// Returns the audio in `[start_ms, end_ms)`.
    ///
    /// Bounds are clamped to the available audio: a negative start reads from
    /// the beginning, a range past the end is truncated, and an inverted range
    /// yields an empty segment. Negative bounds mean "before the start", not
    /// "counted from the end" as in Python-style slicing.
    pub fn slice(&self, start_ms: i64, end_ms: i64) -> AudioSegment {
        let total = self.frame_count();
        let start = self.ms_to_frame(start_ms).min(total);
        let end = self.ms_to_frame(end_ms).clamp(start, total);

        let channels = self.channels as usize;
        let begin = start as usize * channels;
        let finish = end as usize * channels;

        AudioSegment {
            sample_rate: self.sample_rate,
            channels: self.channels,
            interleaved: self.interleaved[begin..finish].to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interleaved.is_empty()
    }

    pub(crate) fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.interleaved.len() * 2);
        for sample in &self.interleaved {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    fn ms_to_frame(&self, ms: i64) -> u64 {
        if ms <= 0 {
            return 0;
        }
        (ms as u128 * self.sample_rate as u128 / 1000).min(u64::MAX as u128) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::AudioSegment;

    fn ramp(sample_rate: u32, channels: u16, frames: usize) -> AudioSegment {
        let samples = (0..frames * channels as usize)
            .map(|n| (n % i16::MAX as usize) as i16)
            .collect();
        AudioSegment::new(sample_rate, channels, samples)
    }

    #[test]
    fn duration_counts_frames_not_samples() {
        let audio = ramp(1_000, 2, 2_500);
        assert_eq!(audio.frame_count(), 2_500);
        assert_eq!(audio.duration_ms(), 2_500);
    }

    #[test]
    fn slice_selects_frames_by_millisecond() {
        let audio = ramp(1_000, 2, 3_000);
        let part = audio.slice(1_000, 1_500);
        assert_eq!(part.duration_ms(), 500);
        assert_eq!(part.samples()[0], audio.samples()[2_000]);
    }

    #[test]
    fn slice_clamps_past_the_end() {
        let audio = ramp(1_000, 1, 1_000);
        assert_eq!(audio.slice(800, 5_000).duration_ms(), 200);
        assert!(audio.slice(2_000, 3_000).is_empty());
    }

    #[test]
    fn slice_handles_negative_and_inverted_bounds() {
        let audio = ramp(1_000, 1, 1_000);
        assert_eq!(audio.slice(-300, 200).duration_ms(), 200);
        assert!(audio.slice(600, 400).is_empty());
    }
}
