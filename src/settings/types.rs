use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Apparent age of the voice that should read the message.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, IntoStaticStr)]
#[allow(missing_docs)]
pub enum SpeakerAge {
    Child,
    Teen,
    Adult,
    Senior,
}

/// Sex of the voice that should read the message.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, IntoStaticStr)]
#[allow(missing_docs)]
pub enum SpeakerSex {
    Male,
    Female,
    Neutral,
}

/// How fast the message should be read, from slowest to fastest.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, IntoStaticStr)]
#[allow(missing_docs)]
pub enum SpeechRate {
    Slowest,
    Slower,
    Slow,
    Normal,
    Fast,
    Faster,
    Fastest,
}

/// Where the rendered speech should go.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumIter, EnumString, IntoStaticStr)]
pub enum OutputType {
    /// Render to the output WAV file in the workspace.
    File,
    /// Play through the default audio device.
    AudioDevice,
}

/// The four settings fields, in the order they are encoded.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Settings {
    /// Apparent age of the voice.
    pub speaker_age: SpeakerAge,
    /// Sex of the voice.
    pub speaker_sex: SpeakerSex,
    /// Rate of speech.
    pub speech_rate: SpeechRate,
    /// Output destination.
    pub output_type: OutputType,
}

impl Settings {
    /// The settings used for every field the settings text does not determine.
    pub const DEFAULT: Settings = Settings {
        speaker_age: SpeakerAge::Adult,
        speaker_sex: SpeakerSex::Neutral,
        speech_rate: SpeechRate::Normal,
        output_type: OutputType::AudioDevice,
    };

    /// Creates settings from four explicit values.
    pub fn new(
        speaker_age: SpeakerAge,
        speaker_sex: SpeakerSex,
        speech_rate: SpeechRate,
        output_type: OutputType,
    ) -> Self {
        Self {
            speaker_age,
            speaker_sex,
            speech_rate,
            output_type,
        }
    }

    /// Iterates over every possible combination of settings values.
    pub fn all() -> impl Iterator<Item = Settings> {
        SpeakerAge::iter().flat_map(|age| {
            SpeakerSex::iter().flat_map(move |sex| {
                SpeechRate::iter().flat_map(move |rate| {
                    OutputType::iter().map(move |output| Settings::new(age, sex, rate, output))
                })
            })
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A settings field: its name in the settings text and the canonical tokens of its values.
///
/// The canonical token of a value is `EnumType.Value`, e.g. `SpeechRate.Fast`. The encoder and
/// the decoder both go through this trait, so every token the encoder writes is one the decoder
/// recognizes.
pub(crate) trait Field: Copy + FromStr + Into<&'static str> {
    /// Name of the field in the settings text, e.g. `speechRate`.
    const NAME: &'static str;
    /// Name of the enum type, used as the token prefix, e.g. `SpeechRate`.
    const TYPE: &'static str;

    fn get(settings: &Settings) -> Self;

    fn set(self, settings: &mut Settings);

    fn token(self) -> String {
        format!("{}.{}", Self::TYPE, Into::<&'static str>::into(self))
    }

    fn from_token(token: &str) -> Option<Self> {
        let variant = token.strip_prefix(Self::TYPE)?.strip_prefix('.')?;
        Self::from_str(variant).ok()
    }
}

macro_rules! impl_field {
    ($ty:ident, $name:literal, $member:ident) => {
        impl Field for $ty {
            const NAME: &'static str = $name;
            const TYPE: &'static str = stringify!($ty);

            fn get(settings: &Settings) -> Self {
                settings.$member
            }

            fn set(self, settings: &mut Settings) {
                settings.$member = self;
            }
        }
    };
}

impl_field!(SpeakerAge, "speakerAge", speaker_age);
impl_field!(SpeakerSex, "speakerSex", speaker_sex);
impl_field!(SpeechRate, "speechRate", speech_rate);
impl_field!(OutputType, "outputType", output_type);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_type_prefix() {
        assert_eq!(SpeakerAge::Senior.token(), "SpeakerAge.Senior");
        assert_eq!(OutputType::AudioDevice.token(), "OutputType.AudioDevice");
    }

    #[test]
    fn from_token_requires_exact_prefix_and_case() {
        assert_eq!(SpeechRate::from_token("SpeechRate.Faster"), Some(SpeechRate::Faster));
        assert_eq!(SpeechRate::from_token("SpeechRate.faster"), None);
        assert_eq!(SpeechRate::from_token("SpeakerAge.Fast"), None);
        assert_eq!(SpeechRate::from_token("SpeechRateFast"), None);
        assert_eq!(SpeechRate::from_token("SpeechRate."), None);
        assert_eq!(SpeechRate::from_token("Fast"), None);
    }

    #[test]
    fn all_enumerates_every_combination() {
        assert_eq!(Settings::all().count(), 4 * 3 * 7 * 2);
    }
}
