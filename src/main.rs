mod cli;
mod init;

use std::{
    io::{self, BufRead, BufWriter, Write},
    path::Path,
};

use clap::Parser;
use serde::Serialize;

use cli::Commands;
use trierank::{config::CompleteConfig, importer, AlphabetRanker};

/// One line of `complete --json` output.
#[derive(Serialize)]
struct Match<'a> {
    term: &'a str,
    weight: f64,
}

fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    match cli.command {
        // Generate a new config file.
        Commands::NewConfig { path } => match trierank::config::generate_sample(&path) {
            Ok(_) => {
                log::info!("config file generated: {}", path.display());
            }
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        },

        // Sort words by a custom alphabet.
        Commands::Sort { input } => {
            let config = init::init_config(&cli.config);

            if let Err(e) = sort(input.as_deref(), config.sort.log_discarded) {
                log::error!("error sorting: {}", e);
                std::process::exit(1);
            }
        }

        // Answer prefix queries against a weighted dictionary.
        Commands::Complete { dict, k, json } => {
            let config = init::init_config(&cli.config);
            let k = k.unwrap_or(config.complete.top_k);

            if let Err(e) = complete(&dict, k, json, &config.complete) {
                log::error!("error completing: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn sort(input: Option<&Path>, log_discarded: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = importer::read_sort_input(init::open_input(input)?)?;
    let mut ranker = AlphabetRanker::new(input.alphabet);

    let mut discarded = 0;
    for word in &input.words {
        if word.is_empty() || !ranker.alphabet().admits(word) {
            if log_discarded {
                log::info!("discarding '{}'", word);
            } else {
                log::debug!("discarding '{}'", word);
            }
            discarded += 1;
            continue;
        }
        ranker.insert(word)?;
    }
    log::debug!("sorting {} words, {} discarded", ranker.len(), discarded);

    let mut out = BufWriter::new(io::stdout().lock());
    for word in ranker.emit() {
        writeln!(out, "{}", word)?;
    }
    out.flush()?;

    Ok(())
}

fn complete(
    dict: &Path,
    k: usize,
    json: bool,
    cfg: &CompleteConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let ac = init::init_completer(dict)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for line in io::stdin().lock().split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let prefix = match String::from_utf8(line) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("skipping query that is not valid UTF-8: {}", e);
                continue;
            }
        };

        for term in ac.top_matches(&prefix, k) {
            let weight = ac.weight_of(term);
            if json {
                writeln!(out, "{}", serde_json::to_string(&Match { term, weight })?)?;
            } else {
                writeln!(
                    out,
                    "{:>width$.prec$}  {}",
                    weight,
                    term,
                    width = cfg.weight_width,
                    prec = cfg.precision
                )?;
            }
        }

        // Queries may be interactive.
        out.flush()?;
    }

    Ok(())
}
