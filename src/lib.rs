#![warn(missing_docs)]

//! Reads a text file aloud through Microsoft's Speech API (SAPI).
//!
//! # Overview
//!
//! The reader works from three files in one directory (see [`files`]): the message to read, a
//! small settings file, and a WAV file the speech can be rendered to.
//!
//! ## Settings
//!
//! The [settings] module defines the [`Settings`](settings::Settings) value (speaker age, speaker
//! sex, speech rate and output type) and the text format it is stored in. Decoding that format
//! never fails: the file is edited by hand, so anything unreadable falls back to the default for
//! the affected field instead of rejecting the whole file.
//!
//! ## Message
//!
//! The [message] module restricts the message to a small alphabet the synthesizer reads cleanly.
//! Sentence punctuation is normalized to periods, line breaks to spaces, and everything else
//! outside the alphabet is dropped.
//!
//! ## Speech
//!
//! The [tts] module maps settings onto SAPI parameters: voice hints, a rate in `[-10, 10]`, and
//! the output destination. The message and the voice hints are rendered together as SAPI XML.
//! On Windows, the module also provides a blocking synthesizer that speaks the result.
//!
//! Everything except the synthesizer itself is portable.

pub mod audio;
mod error;
pub mod files;
pub mod message;
pub mod settings;
pub mod tts;

pub use error::{Error, Result};
