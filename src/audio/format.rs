use crate::ffi::RawAudioFormat;

/// Format tag for uncompressed PCM audio.
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Sample rate, in samples per second, at which to record.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[allow(missing_docs)]
pub enum SampleRate {
    Hz8000 = 8000,
    Hz11025 = 11025,
    Hz12000 = 12000,
    Hz16000 = 16000,
    Hz22050 = 22050,
    Hz24000 = 24000,
    Hz32000 = 32000,
    Hz44100 = 44100,
    Hz48000 = 48000,
}

/// How many bits each sample should have.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[allow(missing_docs)]
pub enum BitRate {
    Bits8 = 8,
    Bits16 = 16,
}

/// Number of audio channels.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[allow(missing_docs)]
pub enum Channels {
    Mono = 1,
    Stereo = 2,
}

/// Specifies the format of PCM audio data in a stream.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct AudioFormat {
    /// Sample rate at which to record.
    pub sample_rate: SampleRate,
    /// How many bits each sample should have.
    pub bit_rate: BitRate,
    /// Number of channels.
    pub channels: Channels,
}

impl AudioFormat {
    /// Builds the full descriptor for this format, deriving block alignment and byte rate.
    pub fn descriptor(&self) -> AudioFormatDescriptor {
        let block_align = (self.channels as u32) * (self.bit_rate as u32) / 8;
        AudioFormatDescriptor {
            format_tag: WAVE_FORMAT_PCM,
            channels: self.channels as u16,
            samples_per_sec: self.sample_rate as u32,
            avg_bytes_per_sec: (self.sample_rate as u32) * block_align,
            block_align: block_align as u16,
            bits_per_sample: self.bit_rate as u16,
            extra_size: 0,
        }
    }
}

impl From<&AudioFormat> for AudioFormatDescriptor {
    fn from(format: &AudioFormat) -> Self {
        format.descriptor()
    }
}

/// A complete description of an audio stream's format, as reported by an
/// [`AudioSource`](super::AudioSource).
///
/// Unlike [`AudioFormat`], this type can describe any format the engine understands, including
/// non-PCM tags and formats that carry extension bytes.
#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy)]
pub struct AudioFormatDescriptor {
    /// Format type, e.g. [`WAVE_FORMAT_PCM`].
    pub format_tag: u16,
    /// Number of channels.
    pub channels: u16,
    /// Samples per second.
    pub samples_per_sec: u32,
    /// Average data rate, in bytes per second.
    pub avg_bytes_per_sec: u32,
    /// Size of one frame (one sample across all channels), in bytes.
    pub block_align: u16,
    /// Bits per sample of a single channel.
    pub bits_per_sample: u16,
    /// Number of format-specific extension bytes the descriptor declares.
    pub extra_size: u16,
}

impl AudioFormatDescriptor {
    /// Number of bytes the descriptor occupies when handed to the engine.
    pub const SIZE: u16 = RawAudioFormat::SIZE;

    /// Pairs the descriptor with the number of bytes it fills in a buffer of the given capacity:
    /// the whole descriptor if it fits, nothing otherwise.
    pub fn fit(self, capacity: u16) -> (Self, u16) {
        let written = if capacity >= Self::SIZE { Self::SIZE } else { 0 };
        (self, written)
    }

    pub(crate) fn to_raw(&self) -> RawAudioFormat {
        RawAudioFormat {
            format_tag: self.format_tag,
            channels: self.channels,
            samples_per_sec: self.samples_per_sec,
            avg_bytes_per_sec: self.avg_bytes_per_sec,
            block_align: self.block_align,
            bits_per_sample: self.bits_per_sample,
            extra_size: self.extra_size,
        }
    }
}

impl From<RawAudioFormat> for AudioFormatDescriptor {
    fn from(raw: RawAudioFormat) -> Self {
        Self {
            format_tag: raw.format_tag,
            channels: raw.channels,
            samples_per_sec: raw.samples_per_sec,
            avg_bytes_per_sec: raw.avg_bytes_per_sec,
            block_align: raw.block_align,
            bits_per_sample: raw.bits_per_sample,
            extra_size: raw.extra_size,
        }
    }
}
