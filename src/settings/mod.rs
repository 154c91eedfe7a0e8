//! The settings file format.
//!
//! Settings are stored as a list of `field=EnumType.Value` statements separated by `;`:
//!
//! ```text
//! speakerAge=SpeakerAge.Adult;speakerSex=SpeakerSex.Neutral;speechRate=SpeechRate.Normal;outputType=OutputType.AudioDevice
//! ```
//!
//! The file is meant to be edited by hand, so decoding is forgiving: it never fails, and any
//! field it cannot determine keeps its value from [`Settings::DEFAULT`].

mod codec;
mod statement;
mod types;

pub use self::codec::{clean_settings, decode, encode, slice_statements, VALID_SETTINGS_CHARS};
pub use self::statement::{Statement, StatementError};
pub use self::types::{OutputType, Settings, SpeakerAge, SpeakerSex, SpeechRate};
