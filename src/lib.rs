//! # trierank
//!
//! A character-indexed prefix tree with two retrieval modes built on the same
//! nodes:
//!
//! - [`AlphabetRanker`] re-emits a set of words in the order of an arbitrary
//!   alphabet permutation.
//! - [`WeightedCompleter`] answers weighted prefix queries: the single best
//!   completion of a prefix, or its top-k completions by descending weight.
//!
//! ```
//! use trierank::WeightedCompleter;
//!
//! let ac = WeightedCompleter::from_batch(&["ab", "abed", "bed"], &[50.0, 25.0, 9000.0])?;
//! assert_eq!(ac.top_match(""), Some("bed"));
//! assert_eq!(ac.top_matches("a", 5), vec!["ab", "abed"]);
//! # Ok::<(), trierank::Error>(())
//! ```

pub mod config;
pub mod importer;
pub mod trie;

pub use trie::{Alphabet, AlphabetRanker, Emission, Error, Trie, TrieNode, WeightedCompleter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
