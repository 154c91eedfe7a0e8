//! Audio format of the rendered WAV file, and the SAPI stream that writes it.

mod format;
#[cfg(windows)]
mod stream;

pub use format::{AudioFormat, BitRate, Channels, SampleRate};
#[cfg(windows)]
pub use stream::AudioStream;
