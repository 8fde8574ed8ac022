// lettergreep-config: Print the effective configuration as TOML.
//
// Shows which file was used (on stderr) and the full configuration, with
// built-in defaults filled in, on stdout. The output is itself a valid
// configuration file.
//
// Usage:
//   lettergreep-config [-c CONFIG]

use anyhow::Result;
use clap::Parser;
use lettergreep_cli::{CommonArgs, ConfigSource, fatal, find_config, init_logging, load_handle};

/// Print the effective syllabifier configuration.
#[derive(Debug, Parser)]
#[command(name = "lettergreep-config", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print where the configuration comes from and exit
    #[arg(long)]
    source: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    if let Err(err) = run(&cli) {
        fatal(&err);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.common.config.as_deref();

    if cli.source {
        match find_config(config_path) {
            ConfigSource::Explicit(p) | ConfigSource::Discovered(p) => println!("{}", p.display()),
            ConfigSource::BuiltIn => println!("built-in"),
        }
        return Ok(());
    }

    let handle = load_handle(config_path)?;
    print!("{}", handle.config().to_toml_string()?);
    Ok(())
}
