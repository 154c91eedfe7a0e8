//! Mapping of [`Settings`] onto SAPI speech parameters, and (on Windows) the synthesizer that
//! renders them.

use std::path::PathBuf;
use std::time::Duration;

use crate::settings::{OutputType, Settings};
use crate::Result;

mod speech;
#[cfg(windows)]
mod synthesizer;
mod voice;

pub use self::speech::{Rate, Speech, SpeechBuilder};
#[cfg(windows)]
pub use self::synthesizer::{finalize, initialize, SyncSynthesizer};
pub use self::voice::{VoiceAge, VoiceGender, VoiceSelector};

/// SAPI's `INFINITE` wait.
const WAIT_FOREVER: u32 = u32::MAX;

/// Converts a timeout to the milliseconds SAPI waits for. Timeouts too long to represent wait
/// just short of forever instead of wrapping around.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn wait_millis(timeout: Option<Duration>) -> u32 {
    match timeout {
        Some(dur) => u32::try_from(dur.as_millis())
            .map_or(WAIT_FOREVER - 1, |millis| millis.min(WAIT_FOREVER - 1)),
        None => WAIT_FOREVER,
    }
}

/// Specifies where the output of speech synthesis should go.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SpeechOutput {
    /// Output to the default audio device on the system
    Default,
    /// Write a WAV file at the given path
    File(PathBuf),
}

impl SpeechOutput {
    /// Picks the output for the given output type, rendering files to `wav_path`.
    pub fn for_output_type<P: Into<PathBuf>>(output_type: OutputType, wav_path: P) -> Self {
        match output_type {
            OutputType::AudioDevice => Self::Default,
            OutputType::File => Self::File(wav_path.into()),
        }
    }
}

/// Everything the synthesizer needs to read a message with the given settings.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SpeechRequest {
    /// The message as SAPI XML, carrying the voice hints and the rate.
    pub speech: Speech<'static>,
    /// Where the speech goes.
    pub output: SpeechOutput,
}

impl SpeechRequest {
    /// Builds the request for reading `message` with `settings`.
    ///
    /// The speaker's age and sex become optional voice criteria, so SAPI prefers a matching voice
    /// but still speaks when none is installed.
    pub fn from_settings<P: Into<PathBuf>>(
        settings: &Settings,
        message: &str,
        wav_path: P,
    ) -> Result<Self> {
        let hints = VoiceSelector::new()
            .gender_eq(settings.speaker_sex.into())
            .age_eq(settings.speaker_age.into());
        let speech = SpeechBuilder::new()
            .select_and_start_voice(VoiceSelector::new(), Some(hints))
            .start_rate(Rate::from(settings.speech_rate))
            .say(message)
            .end_rate()
            .end_voice()
            .build()?;

        Ok(Self {
            speech,
            output: SpeechOutput::for_output_type(settings.output_type, wav_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{SpeakerAge, SpeakerSex, SpeechRate};

    #[test]
    fn long_timeouts_saturate() {
        assert_eq!(wait_millis(None), u32::MAX);
        assert_eq!(wait_millis(Some(Duration::from_millis(1500))), 1500);
        assert_eq!(wait_millis(Some(Duration::from_secs(60 * 60 * 24 * 50))), u32::MAX - 1);
        assert_eq!(wait_millis(Some(Duration::from_millis(u64::from(u32::MAX)))), u32::MAX - 1);
    }

    #[test]
    fn quotes_pass_through_while_markup_is_escaped() {
        let request =
            SpeechRequest::from_settings(&Settings::DEFAULT, "it's \"x\" & <y", "out.wav").unwrap();
        assert_eq!(
            request.speech.contents(),
            "<voice optional=\"gender=Neutral;age=Adult\"><rate absspeed=\"0\">\
             it's \"x\" &amp; &lt;y</rate></voice>"
        );
    }

    #[test]
    fn default_settings_play_on_audio_device() {
        let request =
            SpeechRequest::from_settings(&Settings::DEFAULT, "Hello.", "out.wav").unwrap();
        assert_eq!(request.output, SpeechOutput::Default);
        assert_eq!(
            request.speech.contents(),
            "<voice optional=\"gender=Neutral;age=Adult\"><rate absspeed=\"0\">Hello.</rate></voice>"
        );
    }

    #[test]
    fn file_output_uses_given_path() {
        let settings = Settings::new(
            SpeakerAge::Senior,
            SpeakerSex::Female,
            SpeechRate::Slower,
            OutputType::File,
        );
        let request = SpeechRequest::from_settings(&settings, "Hi", "dir/TTSOutput.wav").unwrap();
        assert_eq!(request.output, SpeechOutput::File(PathBuf::from("dir/TTSOutput.wav")));
        let xml = request.speech.contents();
        assert!(xml.contains("gender=Female;age=Senior"));
        assert!(xml.contains("absspeed=\"-6\""));
    }
}
