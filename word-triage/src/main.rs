//! `word-triage`: sort a word list into known, unknown and skipped words.
//!
//! Shows each word that is not in `known.txt`, `unknown.txt` or `skip.txt`
//! yet and waits for a single key press: `y` known, `n`/space unknown,
//! `s` skip, anything else quits (progress is saved either way).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use word_triage::exit_codes;
use word_triage::io::config::resolve_config;
use word_triage::io::prompter::TerminalPrompter;
use word_triage::io::store::CategoryPaths;
use word_triage::logging;
use word_triage::triage::run_triage;

const USAGE: [&str; 2] = [
    "word-triage words.txt",
    "type y (known), n or space (unknown), s (skip); any other key quits",
];

#[derive(Parser)]
#[command(
    name = "word-triage",
    version,
    about = "Classify each unseen word of a list as known, unknown or skipped"
)]
struct Cli {
    /// Config file (defaults to `triage.toml` in the working directory, if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Word list to triage, one word per line. Exactly one is expected.
    #[arg(value_name = "WORDS_FILE")]
    words: Vec<PathBuf>,
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let [input] = cli.words.as_slice() else {
        for line in USAGE {
            println!("{line}");
        }
        return Ok(());
    };

    let workdir = std::env::current_dir().context("resolve working directory")?;
    let config = resolve_config(cli.config.as_deref(), &workdir)?;
    let paths = CategoryPaths::from_config(&workdir, &config.files);

    let summary = run_triage(input, &paths, TerminalPrompter::new())?;
    println!("{summary}");
    Ok(())
}
