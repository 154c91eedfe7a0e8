use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info};
use tts_reader::files::Workspace;
use tts_reader::tts::{SpeechOutput, SpeechRequest};

#[derive(Debug, Parser)]
#[command(name = "tts-reader", version, about = "Reads TTSInput.txt aloud using TTSSettings.txt")]
struct Cli {
    /// Directory holding TTSInput.txt, TTSSettings.txt and TTSOutput.wav
    /// [default: the directory of this executable]
    #[arg(long, env = "TTS_READER_DIR", global = true)]
    dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read the message aloud, or render it to TTSOutput.wav (the default).
    Speak,
    /// Print the message as it will be handed to the synthesizer.
    Clean,
    /// Print the settings as they were understood.
    Settings,
    /// Create any missing file with its default contents.
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let workspace = match cli.dir {
        Some(dir) => Workspace::new(dir),
        None => Workspace::beside_executable().context("failed to locate the executable")?,
    };
    debug!("using workspace {}", workspace.dir().display());

    match cli.command.unwrap_or(Command::Speak) {
        Command::Speak => speak(&workspace),
        Command::Clean => {
            println!("{}", workspace.load_message().context("failed to load the message")?);
            Ok(())
        }
        Command::Settings => {
            let settings = workspace.load_settings().context("failed to load the settings")?;
            println!("{}", settings);
            Ok(())
        }
        Command::Init => workspace.ensure_all().context("failed to create the workspace files"),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn speak(workspace: &Workspace) -> Result<()> {
    workspace.ensure_all().context("failed to create the workspace files")?;
    let message = workspace.load_message().context("failed to load the message")?;
    let settings = workspace.load_settings().context("failed to load the settings")?;
    debug!("speaking with settings {}", settings);

    let request = SpeechRequest::from_settings(&settings, &message, workspace.output_path())?;
    render(&request)?;

    if let SpeechOutput::File(path) = &request.output {
        info!("speech rendered to {}", path.display());
    }
    Ok(())
}

#[cfg(windows)]
fn render(request: &SpeechRequest) -> Result<()> {
    use tts_reader::tts::{finalize, initialize, SyncSynthesizer};

    initialize().context("failed to initialize SAPI")?;
    let result = SyncSynthesizer::new().and_then(|mut synth| synth.speak_request(request));
    finalize();
    result.context("failed to render speech")
}

#[cfg(not(windows))]
fn render(_request: &SpeechRequest) -> Result<()> {
    Err(tts_reader::Error::Unsupported("speech synthesis")).context("failed to render speech")
}
