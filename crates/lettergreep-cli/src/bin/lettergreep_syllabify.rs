// lettergreep-syllabify: Split IPA transcriptions into syllables.
//
// Reads words from the command line, or from stdin (one per line), and
// prints one result per word. Stdin lines that are not valid UTF-8 are
// reported and skipped, and the exit status is then non-zero.
//
// Usage:
//   lettergreep-syllabify [-c CONFIG] [OPTIONS] [WORD...]

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use lettergreep_cli::{
    CommonArgs, decode_line, ensure_none_skipped, fatal, init_logging, load_handle, read_words,
    report_skipped,
};
use lettergreep_core::syllable::SyllabifiedWord;
use lettergreep_nl::format::join_syllables;
use lettergreep_nl::{LettergreepHandle, StressPolicy};

/// Split IPA transcriptions into syllables (maximal onset).
#[derive(Debug, Parser)]
#[command(name = "lettergreep-syllabify", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Text placed between syllables (overrides the configuration)
    #[arg(short, long, value_name = "SEP")]
    separator: Option<String>,

    /// Keep stress marks in front of the syllable they precede
    #[arg(long)]
    retain_stress: bool,

    /// Print the syllable count instead of the syllables
    #[arg(long)]
    count: bool,

    /// Prefix each result with the input and a tab
    #[arg(long)]
    with_input: bool,

    /// Syllabify stdin as one batch on N worker threads
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// IPA words; read from stdin when absent
    words: Vec<String>,
}

impl Cli {
    fn render(&self, handle: &LettergreepHandle, ipa: &str, word: &SyllabifiedWord) -> String {
        let result = if self.count {
            word.len().to_string()
        } else {
            join_syllables(word, &handle.config().separator)
        };
        if self.with_input {
            format!("{ipa}\t{result}")
        } else {
            result
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    if let Err(err) = run(&cli) {
        fatal(&err);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut handle = load_handle(cli.common.config.as_deref())?;
    if let Some(sep) = &cli.separator {
        handle.set_separator(sep.as_str());
    }
    if cli.retain_stress {
        handle.set_stress_policy(StressPolicy::RetainLeading);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let skipped = match (cli.words.is_empty(), cli.jobs) {
        // Arguments are always a batch.
        (false, jobs) => {
            write_batch(cli, &handle, &cli.words, jobs, &mut out)?;
            0
        }
        (true, Some(jobs)) => {
            let input = read_words(io::stdin().lock())?;
            write_batch(cli, &handle, &input.words, Some(jobs), &mut out)?;
            input.skipped
        }
        (true, None) => {
            let mut skipped = 0;
            for (i, line) in io::stdin().lock().split(b'\n').enumerate() {
                let line = line.context("failed to read stdin")?;
                match decode_line(&line, i + 1) {
                    Ok(Some(ipa)) => {
                        let word = handle.syllabify(&ipa);
                        writeln!(out, "{}", cli.render(&handle, &ipa, &word))?;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        report_skipped(&err);
                        skipped += 1;
                    }
                }
            }
            skipped
        }
    };

    out.flush()?;
    ensure_none_skipped(skipped)
}

fn write_batch(
    cli: &Cli,
    handle: &LettergreepHandle,
    words: &[String],
    jobs: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let results = match jobs {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("failed to start worker threads")?
            .install(|| handle.syllabify_batch(words)),
        None => words.iter().map(|w| handle.syllabify(w)).collect(),
    };
    for (ipa, word) in words.iter().zip(&results) {
        writeln!(out, "{}", cli.render(handle, ipa, word))?;
    }
    Ok(())
}
