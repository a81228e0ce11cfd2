use std::io::{BufRead, Read};

use crate::trie::{Alphabet, Error as TrieError};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Trie(#[from] TrieError),
    #[error("{0}")]
    Validation(String),
}

/// Input of the `sort` command: an alphabet line followed by word lines.
#[derive(Debug)]
pub struct SortInput {
    pub alphabet: Alphabet,
    pub words: Vec<String>,
}

/// Read the alphabet permutation from the first line and the words from
/// every line after it.
pub fn read_sort_input<R: BufRead>(reader: R) -> Result<SortInput, ImportError> {
    let mut lines = reader.lines();

    let alphabet = match lines.next() {
        Some(line) => Alphabet::new(&line?)?,
        None => return Err(ImportError::Validation("no alphabet".to_string())),
    };

    let words = lines.collect::<Result<Vec<String>, _>>()?;
    if words.is_empty() {
        return Err(ImportError::Validation("no words".to_string()));
    }

    log::debug!(
        "read alphabet of {} symbols and {} words",
        alphabet.len(),
        words.len()
    );

    Ok(SortInput { alphabet, words })
}

/// Read a weighted dictionary. The first line holds the number of entries,
/// followed by one `weight<TAB>term` line per entry.
pub fn read_dictionary<R: Read>(reader: R) -> Result<Vec<(String, f64)>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();

    let count = match records.next() {
        Some(r) => {
            let r = r?;
            let raw = r.get(0).unwrap_or("").trim();
            raw.parse::<usize>().map_err(|_| {
                ImportError::Validation(format!("line 1: invalid entry count '{}'", raw))
            })?
        }
        None => return Err(ImportError::Validation("empty dictionary".to_string())),
    };

    let mut entries = Vec::with_capacity(count);
    for result in records {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if entries.len() == count {
            log::warn!(
                "line {}: ignoring entries beyond the declared count of {}",
                line,
                count
            );
            break;
        }

        if record.len() < 2 {
            return Err(ImportError::Validation(format!(
                "line {}: expected 'weight<TAB>term'",
                line
            )));
        }

        let raw = record.get(0).unwrap_or("").trim();
        let weight: f64 = raw.parse().map_err(|_| {
            ImportError::Validation(format!("line {}: invalid weight '{}'", line, raw))
        })?;

        // Tabs inside the term split it into extra fields.
        let term = record.iter().skip(1).collect::<Vec<_>>().join("\t");

        entries.push((term, weight));
    }

    if entries.len() < count {
        return Err(ImportError::Validation(format!(
            "expected {} entries, found {}",
            count,
            entries.len()
        )));
    }

    Ok(entries)
}
