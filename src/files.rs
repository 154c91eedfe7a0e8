//! The files the reader works from: the message to read, the settings, and the rendered WAV.
//!
//! Every file is created with default contents the first time it is needed, so a fresh install
//! works without any setup and the user has something to edit.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::message::clean_message;
use crate::settings::Settings;
use crate::Result;

/// Name of the file holding the message to read.
pub const INPUT_FILE_NAME: &str = "TTSInput.txt";
/// Name of the file holding the encoded settings.
pub const SETTINGS_FILE_NAME: &str = "TTSSettings.txt";
/// Name of the WAV file speech is rendered to.
pub const OUTPUT_FILE_NAME: &str = "TTSOutput.wav";

/// Contents of a newly created input file.
pub const WELCOME_MESSAGE: &str = "Thanks for installing TTS Reader. To use this reader just \
                                   paste the text you want read into the TTSInput.txt file.";

/// The directory holding the reader's files.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Uses the given directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
        }
    }

    /// Uses the directory the running executable is in.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(dir))
    }

    /// The workspace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the message file.
    pub fn input_path(&self) -> PathBuf {
        self.dir.join(INPUT_FILE_NAME)
    }

    /// Path of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }

    /// Path of the rendered WAV file.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(OUTPUT_FILE_NAME)
    }

    /// Writes the welcome message to the input file unless it exists.
    pub fn ensure_input(&self) -> Result<()> {
        create_if_missing(&self.input_path(), WELCOME_MESSAGE.as_bytes())
    }

    /// Writes the default settings to the settings file unless it exists.
    pub fn ensure_settings(&self) -> Result<()> {
        create_if_missing(&self.settings_path(), Settings::DEFAULT.encode().as_bytes())
    }

    /// Creates an empty output file unless it exists.
    pub fn ensure_output(&self) -> Result<()> {
        create_if_missing(&self.output_path(), &[])
    }

    /// Creates every missing file.
    pub fn ensure_all(&self) -> Result<()> {
        self.ensure_input()?;
        self.ensure_settings()?;
        self.ensure_output()
    }

    /// Reads the message and cleans it for the synthesizer.
    pub fn load_message(&self) -> Result<String> {
        self.ensure_input()?;
        Ok(clean_message(&read_lossy(&self.input_path())?))
    }

    /// Reads and decodes the settings. Unreadable contents fall back to defaults field by field.
    pub fn load_settings(&self) -> Result<Settings> {
        self.ensure_settings()?;
        Ok(Settings::decode(&read_lossy(&self.settings_path())?))
    }
}

fn create_if_missing(path: &Path, contents: &[u8]) -> Result<()> {
    match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            info!("creating {}", path.display());
            file.write_all(contents)?;
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_inside_the_directory() {
        let workspace = Workspace::new("/data/reader");
        assert_eq!(workspace.input_path(), Path::new("/data/reader/TTSInput.txt"));
        assert_eq!(workspace.settings_path(), Path::new("/data/reader/TTSSettings.txt"));
        assert_eq!(workspace.output_path(), Path::new("/data/reader/TTSOutput.wav"));
    }
}
