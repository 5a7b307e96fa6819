//! CLI argument definitions and parsing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

/// The list flag, the only option the tool has.
///
/// clap only ever sees a lone argument here, so it cannot change how many
/// arguments the user passed. Help and version flags are disabled.
#[derive(Parser, Debug)]
#[command(name = "quick-tts")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ListArgs {
    /// List voice ids
    #[arg(short, long)]
    pub list: bool,
}

/// The arguments did not match either accepted shape.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid arguments")]
pub struct UsageError;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the voice table.
    List,
    /// Synthesize `text` with `voice_id` into `output`.
    Synthesize {
        voice_id: String,
        text: String,
        output: PathBuf,
    },
}

impl Invocation {
    /// Parse a full command line, program name first.
    ///
    /// The shape is decided by the raw argument count: one argument must be
    /// the list flag, three are taken verbatim as voice id, text and output
    /// path, anything else is a usage error.
    ///
    /// # Examples
    /// ```
    /// use quick_tts::cli::Invocation;
    /// let invocation = Invocation::parse_from(["quick-tts", "--list"]);
    /// assert_eq!(invocation, Ok(Invocation::List));
    /// ```
    pub fn parse_from<I, T>(argv: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("quick-tts"));
        let rest: Vec<OsString> = argv.collect();

        match <[OsString; 3]>::try_from(rest) {
            Ok([voice_id, text, output]) => Ok(Invocation::Synthesize {
                voice_id: voice_id.to_string_lossy().into_owned(),
                text: text.to_string_lossy().into_owned(),
                output: PathBuf::from(output),
            }),
            Err(rest) if rest.len() == 1 => Self::parse_list_flag(program, &rest[0]),
            Err(_) => Err(UsageError),
        }
    }

    fn parse_list_flag(program: OsString, arg: &OsString) -> Result<Self, UsageError> {
        let args = ListArgs::try_parse_from([program, arg.clone()]).map_err(|_| UsageError)?;
        if args.list {
            Ok(Invocation::List)
        } else {
            Err(UsageError)
        }
    }
}

/// Two-line usage text for `program`.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <voice_id> \"text\" \"/path/to/output.wav\"\n       {program} --list  # list voice ids"
    )
}

/// File name of the running executable, for usage text.
pub fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quick-tts".to_string())
}
