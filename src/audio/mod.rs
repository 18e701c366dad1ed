//! Support for feeding audio from files, memory buffers, and caller-implemented sources.

mod adapter;
mod format;
mod source;

pub use adapter::StreamAdapter;
pub use format::{AudioFormat, AudioFormatDescriptor, BitRate, Channels, SampleRate, WAVE_FORMAT_PCM};
pub use source::{AudioSource, ReadSource};
