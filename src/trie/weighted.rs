use std::{cmp::Reverse, collections::HashSet};

use super::{
    fringe::{Fringe, Weight},
    Error, Trie, TrieNode,
};

/// Weighted prefix autocomplete.
///
/// Every node tracks the largest weight found in its subtree. Queries follow
/// those maxima down the tree instead of scanning every completion of a
/// prefix.
#[derive(Debug, Default)]
pub struct WeightedCompleter {
    trie: Trie,
    // First term to reach the root's max weight.
    best: Option<String>,
}

/// A candidate on the top-k fringe.
enum Candidate<'a> {
    Node(&'a TrieNode),
    // A terminal node re-queued with its own weight after a heavier term was
    // found below it. Carries no children.
    Leaf(&'a str),
}

impl WeightedCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a completer from parallel term and weight slices.
    pub fn from_batch<S: AsRef<str>>(terms: &[S], weights: &[f64]) -> Result<Self, Error> {
        if terms.len() != weights.len() {
            return Err(Error::MismatchedBatch {
                terms: terms.len(),
                weights: weights.len(),
            });
        }
        Self::from_entries(terms.iter().zip(weights.iter().copied()))
    }

    /// Build a completer from (term, weight) pairs. The whole batch is
    /// validated first: on error nothing is built.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let entries: Vec<(S, f64)> = entries.into_iter().collect();

        let mut seen = HashSet::with_capacity(entries.len());
        for (term, weight) in &entries {
            let term = term.as_ref();
            check_entry(term, *weight)?;
            if !seen.insert(term) {
                return Err(Error::DuplicateTerm(term.to_string()));
            }
        }

        let mut out = Self::default();
        for (term, weight) in &entries {
            out.insert(term.as_ref(), *weight)?;
        }
        log::debug!("built completer with {} terms", out.len());

        Ok(out)
    }

    /// Add a term. Returns false if the term was already present, in which
    /// case its weight is left as it was.
    pub fn insert(&mut self, term: &str, weight: f64) -> Result<bool, Error> {
        check_entry(term, weight)?;

        let node = match self.trie.insert_with(term, |node, _| {
            node.max_weight = node.max_weight.max(weight);
        })? {
            Some(node) => node,
            None => return Ok(false),
        };
        node.weight = weight;

        let root = self.trie.root_mut();
        if self.best.is_none() || weight > root.max_weight {
            self.best = Some(term.to_string());
        }
        root.max_weight = root.max_weight.max(weight);

        Ok(true)
    }

    /// Weight of a complete term, 0.0 if absent.
    pub fn weight_of(&self, term: &str) -> f64 {
        if term.is_empty() || !self.trie.contains(term) {
            return 0.0;
        }
        self.trie.descend(term).map_or(0.0, TrieNode::weight)
    }

    /// The heaviest term starting with `prefix`.
    pub fn top_match(&self, prefix: &str) -> Option<&str> {
        if prefix.is_empty() {
            return self.best.as_deref();
        }

        let mut node = self.trie.descend(prefix)?;
        let target = node.max_weight;
        while !(node.is_terminal() && node.weight == target) {
            node = node.children.values().find(|c| c.max_weight == target)?;
        }
        node.word()
    }

    /// Up to `k` terms starting with `prefix`, heaviest first. Terms of equal
    /// weight come out in the order they are reached.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<&str> {
        let mut out = Vec::with_capacity(k.min(self.len()));
        if k == 0 {
            return out;
        }
        let start = match self.trie.descend(prefix) {
            Some(n) => n,
            None => return out,
        };

        let mut fringe = Fringe::new();
        fringe.push(Reverse(Weight(start.max_weight)), Candidate::Node(start));

        while out.len() < k {
            let Some((_, candidate)) = fringe.pop() else {
                break;
            };

            let node = match candidate {
                Candidate::Leaf(word) => {
                    out.push(word);
                    continue;
                }
                Candidate::Node(node) => node,
            };

            if let Some(word) = node.word() {
                if node.weight == node.max_weight {
                    out.push(word);
                } else {
                    fringe.push(Reverse(Weight(node.weight)), Candidate::Leaf(word));
                }
            }
            for child in node.children.values() {
                fringe.push(Reverse(Weight(child.max_weight)), Candidate::Node(child));
            }
        }

        log::trace!("top_matches({:?}, {}): {} results", prefix, k, out.len());
        out
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
}

fn check_entry(term: &str, weight: f64) -> Result<(), Error> {
    if term.is_empty() {
        return Err(Error::EmptyWord);
    }
    if weight.is_nan() || weight < 0.0 {
        return Err(Error::NegativeWeight {
            term: term.to_string(),
            weight,
        });
    }
    Ok(())
}
