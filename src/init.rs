use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use trierank::{config, config::Config, WeightedCompleter};

/// Initialize logger. Logs go to stderr, leaving stdout to command output.
/// Warnings and errors carry a level tag; everything else is untagged.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let tag = match record.level() {
                log::Level::Error => "[error] ",
                log::Level::Warn => "[warn] ",
                _ => "",
            };
            writeln!(
                buf,
                "{} {} {}{}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.target(),
                tag,
                record.args()
            )
        })
        .init();
}

/// Load and merge config files, exiting on error.
pub fn init_config(paths: &[PathBuf]) -> Config {
    match config::load_all(paths) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Open the given file, or stdin if there's none.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

/// Load a weighted dictionary file into a completer.
pub fn init_completer(path: &Path) -> Result<WeightedCompleter, Box<dyn std::error::Error>> {
    log::info!("loading dictionary from {} ...", path.display());

    let file = File::open(path)?;
    let entries = trierank::importer::read_dictionary(file)?;
    let completer = WeightedCompleter::from_entries(entries)?;

    log::info!("loaded {} terms", completer.len());
    Ok(completer)
}
