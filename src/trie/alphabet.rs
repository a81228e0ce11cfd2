use std::collections::HashMap;

use super::{fringe::Fringe, Error, Trie, TrieNode};

/// A total order over a set of symbols, given as a permutation string.
#[derive(Debug, Clone)]
pub struct Alphabet {
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from a permutation. The i-th character gets index i.
    pub fn new(permutation: &str) -> Result<Self, Error> {
        let mut index = HashMap::new();
        for (i, c) in permutation.chars().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(Error::DuplicateSymbol(c));
            }
        }
        Ok(Self { index })
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Whether every character of `word` belongs to the alphabet.
    pub fn admits(&self, word: &str) -> bool {
        word.chars().all(|c| self.index.contains_key(&c))
    }

    /// Check that every character of `word` belongs to the alphabet,
    /// reporting the first one that doesn't.
    fn check(&self, word: &str) -> Result<(), Error> {
        match word.chars().find(|c| !self.index.contains_key(c)) {
            Some(c) => Err(Error::UnknownSymbol(c)),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Sorts words by a custom alphabet.
///
/// Every node gets a rank of `index(c) - depth * alphabet_len` when it is
/// created. Ranks of deeper nodes are always lower than ranks of shallower
/// ones, and siblings are ordered by their symbol's index, so popping nodes
/// in ascending rank order walks the tree depth-first in alphabetical order
/// and emits every word before the words it is a prefix of.
#[derive(Debug)]
pub struct AlphabetRanker {
    alphabet: Alphabet,
    trie: Trie,
}

impl AlphabetRanker {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            trie: Trie::new(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Read-only access to the underlying tree, e.g. for [`Trie::find`].
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Insert a word made only of alphabet symbols. Returns false if the word
    /// was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool, Error> {
        self.alphabet.check(word)?;

        let alphabet = &self.alphabet;
        let size = alphabet.len() as i64;
        let inserted = self.trie.insert_with(word, |node, step| {
            if !step.created {
                return;
            }
            if let Some(index) = alphabet.index_of(step.symbol) {
                node.rank = index as i64 - step.depth as i64 * size;
            }
        })?;

        Ok(inserted.is_some())
    }

    /// Lazily yield every inserted word in alphabetical order.
    pub fn emit(&self) -> Emission<'_> {
        let mut fringe = Fringe::new();
        for (_, child) in self.trie.root().children() {
            fringe.push(child.rank, child);
        }
        Emission { fringe }
    }
}

/// Iterator over the words of an [`AlphabetRanker`] in alphabetical order.
pub struct Emission<'a> {
    fringe: Fringe<i64, &'a TrieNode>,
}

impl<'a> Iterator for Emission<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((_, node)) = self.fringe.pop() {
            for (_, child) in node.children() {
                self.fringe.push(child.rank, child);
            }
            if let Some(word) = node.word() {
                return Some(word);
            }
        }
        None
    }
}
