use std::borrow::{Borrow, Cow};

mod builder;
mod types;

pub use builder::SpeechBuilder;
pub use types::Rate;

/// A speech to be rendered by a synthesizer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Speech<'s> {
    /// Plain text
    Text(Cow<'s, str>),
    /// XML-encoded speech
    Xml(Cow<'s, str>),
}

impl<'s> Speech<'s> {
    /// Returns the text or markup to hand to the synthesizer.
    pub fn contents(&self) -> &str {
        match self {
            Self::Text(cow) => cow.borrow(),
            Self::Xml(cow) => cow.borrow(),
        }
    }

    /// Returns `true` if the contents are SAPI XML rather than plain text.
    pub fn is_xml(&self) -> bool {
        matches!(self, Self::Xml(_))
    }
}

impl<'s> From<&'s str> for Speech<'s> {
    fn from(s: &'s str) -> Self {
        Self::Text(s.into())
    }
}

impl<'s> From<String> for Speech<'s> {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl<'s> From<&'s Speech<'s>> for Speech<'s> {
    fn from(s: &'s Speech<'s>) -> Self {
        match s {
            Speech::Text(s) => Self::Text(Cow::Borrowed(s.borrow())),
            Speech::Xml(s) => Self::Xml(Cow::Borrowed(s.borrow())),
        }
    }
}
