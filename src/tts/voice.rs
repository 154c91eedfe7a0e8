use strum_macros::IntoStaticStr;

use crate::settings::{SpeakerAge, SpeakerSex};

/// The `age` attribute of a SAPI voice.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, IntoStaticStr)]
#[allow(missing_docs)]
pub enum VoiceAge {
    Adult,
    Child,
    Senior,
    Teen,
}

impl From<SpeakerAge> for VoiceAge {
    fn from(age: SpeakerAge) -> Self {
        match age {
            SpeakerAge::Child => Self::Child,
            SpeakerAge::Teen => Self::Teen,
            SpeakerAge::Adult => Self::Adult,
            SpeakerAge::Senior => Self::Senior,
        }
    }
}

/// The `gender` attribute of a SAPI voice.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, IntoStaticStr)]
#[allow(missing_docs)]
pub enum VoiceGender {
    Female,
    Male,
    Neutral,
}

impl From<SpeakerSex> for VoiceGender {
    fn from(sex: SpeakerSex) -> Self {
        match sex {
            SpeakerSex::Male => Self::Male,
            SpeakerSex::Female => Self::Female,
            SpeakerSex::Neutral => Self::Neutral,
        }
    }
}

/// Criteria a SAPI voice is matched against, in SAPI's `attr=value;attr=value` syntax.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VoiceSelector {
    sapi_expr: String,
}

impl VoiceSelector {
    /// Creates a selector that matches any voice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches voices of the given age.
    pub fn age_eq(self, age: VoiceAge) -> Self {
        self.append_condition("age=", age.into())
    }

    /// Matches voices of the given gender.
    pub fn gender_eq(self, gender: VoiceGender) -> Self {
        self.append_condition("gender=", gender.into())
    }

    fn append_condition(mut self, prefix: &str, val: &str) -> Self {
        if !self.sapi_expr.is_empty() {
            self.sapi_expr.push(';')
        }
        self.sapi_expr.push_str(prefix);
        self.sapi_expr.push_str(val);
        self
    }

    pub(crate) fn into_sapi_expr(self) -> String {
        self.sapi_expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditions_are_joined_with_semicolons() {
        let expr = VoiceSelector::new()
            .gender_eq(VoiceGender::Female)
            .age_eq(VoiceAge::Child)
            .into_sapi_expr();
        assert_eq!(expr, "gender=Female;age=Child");
    }

    #[test]
    fn empty_selector() {
        assert_eq!(VoiceSelector::new().into_sapi_expr(), "");
    }

    #[test]
    fn speaker_traits_map_to_voice_attributes() {
        assert_eq!(VoiceAge::from(SpeakerAge::Teen), VoiceAge::Teen);
        assert_eq!(VoiceGender::from(SpeakerSex::Neutral), VoiceGender::Neutral);
    }
}
