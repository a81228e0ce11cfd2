use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub complete: CompleteConfig,

    #[serde(default)]
    pub sort: SortConfig,
}

/// Settings for the `complete` command.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default = "default_weight_width")]
    pub weight_width: usize,

    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_top_k() -> usize {
    5
}

fn default_weight_width() -> usize {
    14
}

fn default_precision() -> usize {
    1
}

impl Default for CompleteConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            weight_width: default_weight_width(),
            precision: default_precision(),
        }
    }
}

/// Settings for the `sort` command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortConfig {
    #[serde(default)]
    pub log_discarded: bool,
}

/// Load and merge one or more config files. No paths means built-in defaults.
pub fn load_all(paths: &[PathBuf]) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::default();

    for path in paths {
        log::info!("loading config: {}", path.display());
        let c = read_file(path)
            .map_err(|e| format!("error loading config {}: {}", path.display(), e))?;
        merge(&mut config, c);
    }

    Ok(config)
}

/// Write the sample config to `path`. An existing file is never overwritten.
pub fn generate_sample(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(format!("{} already exists", path.display()).into());
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(SAMPLE_CONFIG.as_bytes())?;
    Ok(())
}

/// Load configuration from a given TOML file.
fn read_file(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let cfg: Config = toml::from_str(content)?;
    Ok(cfg)
}

/// Merge the given src config into the dest config struct. Values left at
/// their defaults in src don't override dest.
fn merge(dest: &mut Config, src: Config) {
    let defaults = CompleteConfig::default();

    // Merge complete config.
    if src.complete.top_k != defaults.top_k {
        dest.complete.top_k = src.complete.top_k;
    }
    if src.complete.weight_width != defaults.weight_width {
        dest.complete.weight_width = src.complete.weight_width;
    }
    if src.complete.precision != defaults.precision {
        dest.complete.precision = src.complete.precision;
    }

    // Merge sort config.
    if src.sort.log_discarded {
        dest.sort.log_discarded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let cfg = parse(SAMPLE_CONFIG).unwrap();
        assert_eq!(cfg.complete.top_k, 5);
        assert_eq!(cfg.complete.weight_width, 14);
        assert_eq!(cfg.complete.precision, 1);
        assert!(!cfg.sort.log_discarded);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let cfg = parse("[complete]\ntop_k = 10\n").unwrap();
        assert_eq!(cfg.complete.top_k, 10);
        assert_eq!(cfg.complete.weight_width, 14);
        assert!(!cfg.sort.log_discarded);
    }

    #[test]
    fn test_merge_in_order() {
        let mut cfg = Config::default();
        merge(&mut cfg, parse("[complete]\ntop_k = 10\nprecision = 3\n").unwrap());
        merge(&mut cfg, parse("[complete]\ntop_k = 2\n[sort]\nlog_discarded = true\n").unwrap());

        assert_eq!(cfg.complete.top_k, 2);
        assert_eq!(cfg.complete.precision, 3);
        assert!(cfg.sort.log_discarded);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse("[complete]\ntop_k = \"many\"\n").is_err());
    }

    #[test]
    fn test_generate_sample_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        generate_sample(&path).unwrap();
        let cfg = read_file(&path).unwrap();
        assert_eq!(cfg.complete.top_k, 5);

        std::fs::write(&path, "[complete]\ntop_k = 9\n").unwrap();
        assert!(generate_sample(&path).is_err());
        assert_eq!(read_file(&path).unwrap().complete.top_k, 9);
    }

    #[test]
    fn test_no_paths_gives_defaults() {
        let cfg = load_all(&[]).unwrap();
        assert_eq!(cfg.complete.top_k, 5);
    }
}
