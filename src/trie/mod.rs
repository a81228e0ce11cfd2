mod alphabet;
mod fringe;
mod weighted;

pub use alphabet::{Alphabet, AlphabetRanker, Emission};
pub use weighted::WeightedCompleter;

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("word is empty")]
    EmptyWord,
    #[error("symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(char),
    #[error("symbol '{0}' is not in the alphabet")]
    UnknownSymbol(char),
    #[error("invalid weight {weight} for term '{term}': weights must be non-negative")]
    NegativeWeight { term: String, weight: f64 },
    #[error("duplicate term: {0}")]
    DuplicateTerm(String),
    #[error("got {terms} terms but {weights} weights")]
    MismatchedBatch { terms: usize, weights: usize },
}

/// A node in the prefix tree. Children are keyed by the character on the edge
/// leading to them and kept ordered so traversals are deterministic.
#[derive(Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    // Set iff an inserted word ends exactly here.
    word: Option<String>,

    // Alphabet mode only.
    rank: i64,

    // Weighted mode only.
    weight: f64,
    max_weight: f64,
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// The word ending at this node, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Largest weight among this node and every terminal node below it.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, n)| (*c, n))
    }
}

// Shallow: a derived impl would recurse once per level.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("word", &self.word)
            .field("rank", &self.rank)
            .field("weight", &self.weight)
            .field("max_weight", &self.max_weight)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Position of a node on an insertion path, handed to the visitor of
/// [`Trie::insert_with`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step {
    /// 0 for the root's direct children.
    pub depth: usize,
    pub symbol: char,
    /// Whether the node was created by this insertion.
    pub created: bool,
}

/// Character-indexed prefix tree.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: HashSet<String>,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Returns false if the word was already present, in which
    /// case nothing changes.
    pub fn insert(&mut self, word: &str) -> Result<bool, Error> {
        Ok(self.insert_with(word, |_, _| {})?.is_some())
    }

    /// Look up a word. With `require_full_word` unset, any inserted word that
    /// starts with `word` is a match.
    pub fn find(&self, word: &str, require_full_word: bool) -> Result<bool, Error> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }

        Ok(match self.descend(word) {
            Some(node) => !require_full_word || node.is_terminal(),
            None => false,
        })
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut TrieNode {
        &mut self.root
    }

    /// Walk `prefix` from the root. None if the path does not exist.
    pub(crate) fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Walk and extend the path for `word`, calling `visit` on every node of
    /// the path below the root, in order. Returns the terminal node if the
    /// word was new and None if it was already present (the tree is left
    /// untouched and `visit` is never called).
    pub(crate) fn insert_with<F>(
        &mut self,
        word: &str,
        mut visit: F,
    ) -> Result<Option<&mut TrieNode>, Error>
    where
        F: FnMut(&mut TrieNode, Step),
    {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }
        if !self.words.insert(word.to_string()) {
            return Ok(None);
        }

        let mut node = &mut self.root;
        for (depth, symbol) in word.chars().enumerate() {
            let created = !node.children.contains_key(&symbol);
            node = node.children.entry(symbol).or_default();
            visit(
                &mut *node,
                Step {
                    depth,
                    symbol,
                    created,
                },
            );
        }
        node.word = Some(word.to_string());

        Ok(Some(node))
    }
}

// Nodes are torn down from an explicit stack. The default drop glue recurses
// once per level and overflows on long words.
impl Drop for Trie {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.root.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
