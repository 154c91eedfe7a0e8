use xml::writer::{Error as XmlError, XmlEvent};
use xml::{EmitterConfig, EventWriter};

use crate::tts::VoiceSelector;

use super::{Rate, Speech};

/// Helper type that can construct a [`Speech`] from a sequence of rendering instructions.
///
/// Plain text stays plain text until the first markup instruction, after which everything is
/// written as SAPI XML, with text escaped. The builder does not check that elements are balanced.
pub struct SpeechBuilder {
    state: SpeechBuilderState,
    error: Option<XmlError>,
}

enum SpeechBuilderState {
    Text(String),
    Xml(EventWriter<Vec<u8>>),
}

impl SpeechBuilder {
    /// Constructs a new, empty instance.
    pub fn new() -> Self {
        Self {
            state: SpeechBuilderState::Text(String::new()),
            error: None,
        }
    }

    /// Changes the rate of all subsequent speech until the corresponding
    /// [`end_rate`](SpeechBuilder::end_rate) call.
    pub fn start_rate<R: Into<Rate>>(&mut self, rate: R) -> &mut Self {
        self.append_xml(
            XmlEvent::start_element("rate").attr("absspeed", &rate.into().to_string()).into(),
        )
    }

    /// Switches to a voice that matches the specified criteria until the corresponding
    /// [`end_voice`](SpeechBuilder::end_voice) call.
    ///
    /// SAPI fails the speech if no installed voice meets the `required` criteria. The `optional`
    /// criteria only rank the voices that do, so they work as hints.
    pub fn select_and_start_voice(
        &mut self,
        required: VoiceSelector,
        optional: Option<VoiceSelector>,
    ) -> &mut Self {
        let mut event = XmlEvent::start_element("voice");

        let required_expr = required.into_sapi_expr();
        if !required_expr.is_empty() {
            event = event.attr("required", &required_expr);
        }

        let optional_expr = optional.map(VoiceSelector::into_sapi_expr);
        if let Some(optional_expr) = optional_expr.as_ref() {
            if !optional_expr.is_empty() {
                event = event.attr("optional", optional_expr);
            }
        }

        self.append_xml(event.into())
    }

    /// Appends text to pronounce.
    pub fn say<S: AsRef<str>>(&mut self, text: S) -> &mut Self {
        match &mut self.state {
            SpeechBuilderState::Text(contents) => {
                contents.push_str(text.as_ref());
            }
            SpeechBuilderState::Xml(writer) => {
                if let Err(err) = writer.write(text.as_ref()) {
                    self.error.get_or_insert(err);
                }
            }
        };
        self
    }

    /// Ends the effect of the corresponding [`start_rate`](SpeechBuilder::start_rate) call.
    pub fn end_rate(&mut self) -> &mut Self {
        self.end_element("rate")
    }

    /// Ends the effect of the corresponding
    /// [`select_and_start_voice`](SpeechBuilder::select_and_start_voice) call.
    pub fn end_voice(&mut self) -> &mut Self {
        self.end_element("voice")
    }

    /// Builds the [`Speech`] from instructions received so far and clears the builder.
    ///
    /// Fails with the first error the XML writer reported, if any.
    pub fn build<'s>(&mut self) -> Result<Speech<'s>, XmlError> {
        let state = std::mem::replace(&mut self.state, SpeechBuilderState::Text(String::new()));
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        Ok(match state {
            SpeechBuilderState::Text(contents) => Speech::Text(contents.into()),
            SpeechBuilderState::Xml(writer) => {
                Speech::Xml(String::from_utf8_lossy(&writer.into_inner()).into_owned().into())
            }
        })
    }

    fn end_element(&mut self, name: &str) -> &mut Self {
        self.append_xml(XmlEvent::end_element().name(name).into())
    }

    fn append_xml(&mut self, event: XmlEvent) -> &mut Self {
        let result = match &mut self.state {
            SpeechBuilderState::Text(contents) => {
                let mut writer = EventWriter::new_with_config(
                    Vec::new(),
                    EmitterConfig::new()
                        .keep_element_names_stack(false)
                        .write_document_declaration(false),
                );
                let result = if contents.is_empty() {
                    Ok(())
                } else {
                    writer.write(contents.as_str())
                };
                let result = result.and_then(|_| writer.write(event));
                self.state = SpeechBuilderState::Xml(writer);
                result
            }
            SpeechBuilderState::Xml(writer) => writer.write(event),
        };
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
        self
    }
}

impl Default for SpeechBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::VoiceGender;

    #[test]
    fn plain_text_stays_text() {
        let speech = SpeechBuilder::new().say("Hello, ").say("world").build().unwrap();
        assert_eq!(speech, Speech::Text("Hello, world".into()));
    }

    #[test]
    fn markup_switches_to_escaped_xml() {
        let speech = SpeechBuilder::new()
            .select_and_start_voice(
                VoiceSelector::new(),
                Some(VoiceSelector::new().gender_eq(VoiceGender::Female)),
            )
            .start_rate(3)
            .say("Tom & \"Jerry\" <3")
            .end_rate()
            .end_voice()
            .build()
            .unwrap();

        assert!(speech.is_xml());
        assert_eq!(
            speech.contents(),
            "<voice optional=\"gender=Female\"><rate absspeed=\"3\">Tom &amp; \"Jerry\" &lt;3</rate></voice>"
        );
    }

    #[test]
    fn build_clears_the_builder() {
        let mut builder = SpeechBuilder::new();
        builder.start_rate(1).say("x").end_rate();
        assert!(builder.build().unwrap().is_xml());
        assert_eq!(builder.build().unwrap(), Speech::Text("".into()));
    }
}
