use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use log::{debug, trace};

use super::statement::Statement;
use super::types::{Field, OutputType, Settings, SpeakerAge, SpeakerSex, SpeechRate};

/// Characters that survive the first stage of decoding. Everything else is dropped.
pub const VALID_SETTINGS_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ=.;";

const SEPARATOR: &str = ";";

type Updater = fn(&mut Settings, &str) -> bool;

/// Field name to the updater that recognizes that field's canonical tokens.
const UPDATERS: &[(&str, Updater)] = &[
    (SpeakerAge::NAME, update::<SpeakerAge>),
    (SpeakerSex::NAME, update::<SpeakerSex>),
    (SpeechRate::NAME, update::<SpeechRate>),
    (OutputType::NAME, update::<OutputType>),
];

fn update<F: Field>(settings: &mut Settings, token: &str) -> bool {
    match F::from_token(token) {
        Some(value) => {
            value.set(settings);
            true
        }
        None => false,
    }
}

fn statement<F: Field>(settings: &Settings) -> String {
    format!("{}={}", F::NAME, F::get(settings).token())
}

/// Encodes settings as four `field=EnumType.Value` statements separated by `;`.
pub fn encode(settings: &Settings) -> String {
    [
        statement::<SpeakerAge>(settings),
        statement::<SpeakerSex>(settings),
        statement::<SpeechRate>(settings),
        statement::<OutputType>(settings),
    ]
    .join(SEPARATOR)
}

/// Decodes settings text, filling in defaults for anything that is missing or unreadable.
///
/// Decoding never fails. Characters outside [`VALID_SETTINGS_CHARS`] are dropped, malformed
/// statements are skipped, and statements naming an unknown field or value have no effect. When
/// the same field is assigned more than once, the last valid assignment wins.
pub fn decode(text: &str) -> Settings {
    let cleaned = clean_settings(text);
    let mut settings = Settings::DEFAULT;

    let statements = slice_statements(&cleaned).into_iter().filter_map(|candidate| {
        Statement::parse(candidate)
            .map_err(|err| trace!("skipping settings statement {:?}: {}", candidate, err))
            .ok()
    });
    for statement in statements {
        apply(&mut settings, &statement);
    }

    settings
}

/// Drops every character that cannot appear in settings text.
pub fn clean_settings(text: &str) -> String {
    text.chars().filter(|&c| VALID_SETTINGS_CHARS.contains(c)).collect()
}

/// Splits settings text into statement candidates.
///
/// Empty candidates between separators are kept; a trailing fragment without a separator is
/// kept only if it is not empty.
pub fn slice_statements(text: &str) -> Vec<&str> {
    let mut candidates: Vec<&str> = text.split(SEPARATOR).collect();
    if candidates.last().map_or(false, |last| last.is_empty()) {
        candidates.pop();
    }
    candidates
}

fn apply(settings: &mut Settings, statement: &Statement) {
    let updater = UPDATERS
        .iter()
        .find(|(name, _)| *name == statement.target_variable())
        .map(|(_, updater)| updater);

    match updater {
        Some(updater) => {
            if !updater(settings, statement.target_value()) {
                debug!(
                    "ignoring unknown value {:?} for {}",
                    statement.target_value(),
                    statement.target_variable()
                );
            }
        }
        None => debug!("ignoring unknown settings field {:?}", statement.target_variable()),
    }
}

impl Settings {
    /// Encodes these settings. See [`encode`].
    pub fn encode(&self) -> String {
        encode(self)
    }

    /// Decodes settings text. See [`decode`].
    pub fn decode(text: &str) -> Self {
        decode(text)
    }
}

impl Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Settings {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode(s))
    }
}
