// lettergreep-tokenize: Show how IPA words are tokenized.
//
// Prints every token with its category, one per line:
//   VOWEL     [ 2]: ɑ
//   CONSONANT [ 3]: ŋ
//
// Usage:
//   lettergreep-tokenize [-c CONFIG] [--merged] [WORD...]

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use lettergreep_cli::{
    CommonArgs, InputWords, ensure_none_skipped, fatal, init_logging, load_handle, read_words,
};

/// Print the tokens of IPA words with their categories.
#[derive(Debug, Parser)]
#[command(name = "lettergreep-tokenize", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Show tokens after the diphthong merge pass
    #[arg(short, long)]
    merged: bool,

    /// IPA words; read from stdin when absent
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    if let Err(err) = run(&cli) {
        fatal(&err);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let handle = load_handle(cli.common.config.as_deref())?;
    let InputWords { words, skipped } = if cli.words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        InputWords {
            words: cli.words.clone(),
            skipped: 0,
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== {word} ===")?;
        let tokens = if cli.merged {
            handle.merged_tokens(word)
        } else {
            handle.tokenize(word)
        };
        for (pos, token) in tokens.iter().enumerate() {
            writeln!(out, "{:9} [{pos:>2}]: {}", token.category.label(), token.text)?;
        }
    }

    out.flush()?;
    ensure_none_skipped(skipped)
}
