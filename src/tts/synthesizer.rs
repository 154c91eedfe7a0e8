use std::ptr::null;
use std::time::Duration;

use log::debug;
use windows::core::IUnknown;
use windows::Win32::Media::Speech::{
    ISpVoice, SpVoice, SPF_ASYNC, SPF_DEFAULT, SPF_IS_XML, SPF_PARSE_SAPI,
};
use windows::Win32::System::Com::{CoCreateInstance, CoInitialize, CoUninitialize, CLSCTX_ALL};

use crate::audio::{AudioFormat, AudioStream};
use crate::Result;

use super::{wait_millis, Speech, SpeechOutput, SpeechRequest};

/// Initializes COM on the current thread. Must be called on every thread that uses SAPI.
pub fn initialize() -> Result<()> {
    unsafe { CoInitialize(null()) }?;
    Ok(())
}

/// Deinitializes COM for the current thread, once for every call to [`initialize`].
pub fn finalize() {
    unsafe { CoUninitialize() }
}

/// A speech synthesizer that blocks the current thread while rendering speech.
pub struct SyncSynthesizer {
    intf: ISpVoice,
    stream: Option<AudioStream>,
}

impl SyncSynthesizer {
    /// Creates a new synthesizer, configured to output its speech to the default audio device.
    pub fn new() -> Result<Self> {
        let intf: ISpVoice = unsafe { CoCreateInstance(&SpVoice, None, CLSCTX_ALL) }?;
        Ok(Self {
            intf,
            stream: None,
        })
    }

    /// Configures the synthesizer to render its speech to the given output destination.
    pub fn set_output(&mut self, output: &SpeechOutput) -> Result<()> {
        self.close_stream()?;
        match output {
            SpeechOutput::Default => unsafe { self.intf.SetOutput(None::<IUnknown>, true) }?,
            SpeechOutput::File(path) => {
                debug!("rendering speech to {}", path.display());
                let stream = AudioStream::create_file(path, &AudioFormat::default())?;
                let unknown: IUnknown = stream.to_sapi().into();
                unsafe { self.intf.SetOutput(Some(unknown), false) }?;
                self.stream = Some(stream);
            }
        }
        Ok(())
    }

    /// Renders the given speech, blocking the thread until done or until the given timeout expires.
    pub fn speak<'s, S: Into<Speech<'s>>>(&self, speech: S, timeout: Option<Duration>) -> Result<()> {
        let speech = speech.into();
        let flags = if speech.is_xml() {
            SPF_IS_XML.0 | SPF_PARSE_SAPI.0
        } else {
            SPF_DEFAULT.0
        };
        unsafe { self.intf.Speak(speech.contents(), (flags | SPF_ASYNC.0) as u32) }?;
        unsafe { self.intf.WaitUntilDone(wait_millis(timeout)) }?;
        Ok(())
    }

    /// Renders a prepared request to its output and waits until it is done.
    pub fn speak_request(&mut self, request: &SpeechRequest) -> Result<()> {
        self.set_output(&request.output)?;
        self.speak(&request.speech, None)?;
        self.close_stream()
    }

    fn close_stream(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            unsafe { self.intf.SetOutput(None::<IUnknown>, true) }?;
            stream.close()?;
        }
        Ok(())
    }
}
