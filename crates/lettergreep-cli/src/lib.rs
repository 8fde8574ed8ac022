// lettergreep-cli: shared utilities for CLI tools.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use lettergreep_nl::{LettergreepHandle, SyllabifyError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Configuration file name looked up in the search directories.
const CONFIG_FILE: &str = "lettergreep.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "LETTERGREEP_CONFIG";

/// Options shared by every tool.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where a configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config` or `$LETTERGREEP_CONFIG`; must exist.
    Explicit(PathBuf),
    /// Found in one of the default locations.
    Discovered(PathBuf),
    /// Nothing found; the Dutch reference configuration applies.
    BuiltIn,
}

/// Locate the configuration file.
///
/// Search order:
/// 1. `config_path` argument (if provided)
/// 2. `LETTERGREEP_CONFIG` environment variable
/// 3. `$XDG_CONFIG_HOME/lettergreep/lettergreep.toml`
/// 4. `~/.config/lettergreep/lettergreep.toml`
/// 5. `./lettergreep.toml`
pub fn find_config(config_path: Option<&Path>) -> ConfigSource {
    if let Some(p) = config_path {
        return ConfigSource::Explicit(p.to_path_buf());
    }
    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(p));
    }
    search_paths()
        .into_iter()
        .find(|p| p.is_file())
        .map_or(ConfigSource::BuiltIn, ConfigSource::Discovered)
}

/// Default locations checked when no configuration is named explicitly.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(xdg).join("lettergreep").join(CONFIG_FILE));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".config").join("lettergreep").join(CONFIG_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_FILE));
    }

    paths
}

/// Find the configuration and build a handle from it.
pub fn load_handle(config_path: Option<&Path>) -> Result<LettergreepHandle> {
    match find_config(config_path) {
        ConfigSource::Explicit(path) => {
            if !path.is_file() {
                bail!("configuration file {} does not exist", path.display());
            }
            load_from(&path)
        }
        ConfigSource::Discovered(path) => load_from(&path),
        ConfigSource::BuiltIn => {
            debug!("no configuration file found, using built-in Dutch tables");
            LettergreepHandle::dutch().context("failed to build Dutch tables")
        }
    }
}

fn load_from(path: &Path) -> Result<LettergreepHandle> {
    debug!(path = %path.display(), "using configuration file");
    LettergreepHandle::from_toml_file(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` count.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Decode one input line. Returns `None` for blank lines.
///
/// `line_no` is 1-based and only used in the error message.
pub fn decode_line(bytes: &[u8], line_no: usize) -> Result<Option<String>> {
    let text = std::str::from_utf8(bytes)
        .map_err(SyllabifyError::from)
        .with_context(|| format!("line {line_no}"))?;
    let word = text.trim();
    Ok((!word.is_empty()).then(|| word.to_string()))
}

/// Non-blank input lines, plus the number of lines skipped as invalid.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InputWords {
    pub words: Vec<String>,
    pub skipped: usize,
}

/// Read every non-blank line.
///
/// A line that is not valid UTF-8 is reported on stderr and skipped; see
/// [`ensure_none_skipped`]. Read errors end the input.
pub fn read_words<R: BufRead>(reader: R) -> Result<InputWords> {
    let mut input = InputWords::default();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line.context("failed to read input")?;
        match decode_line(&line, i + 1) {
            Ok(Some(word)) => input.words.push(word),
            Ok(None) => {}
            Err(err) => {
                report_skipped(&err);
                input.skipped += 1;
            }
        }
    }
    Ok(input)
}

/// Report an undecodable input line that processing continues past.
pub fn report_skipped(err: &anyhow::Error) {
    eprintln!("error: {err:#} (skipped)");
}

/// Fail once all input is processed if any line was skipped.
pub fn ensure_none_skipped(skipped: usize) -> Result<()> {
    if skipped > 0 {
        bail!("{skipped} input line(s) skipped: not valid UTF-8");
    }
    Ok(())
}

/// Print an error chain and exit with code 1.
pub fn fatal(err: &anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    std::process::exit(1);
}
