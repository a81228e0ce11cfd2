// Property tests for the trie and both retrieval modes

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use trierank::{Alphabet, AlphabetRanker, Trie, WeightedCompleter};

/// Terms paired with distinct weights in random order.
fn distinct_weighted() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::hash_set("[abc]{1,6}", 1..60).prop_flat_map(|terms| {
        let terms: Vec<String> = terms.into_iter().collect();
        let n = terms.len();
        (Just(terms), Just((0..n).collect::<Vec<_>>()).prop_shuffle()).prop_map(
            |(terms, ranks)| {
                terms
                    .into_iter()
                    .zip(ranks)
                    .map(|(t, r)| (t, r as f64 * 1.5))
                    .collect::<Vec<_>>()
            },
        )
    })
}

fn brute_force(entries: &[(String, f64)], prefix: &str, k: usize) -> Vec<String> {
    let mut matches: Vec<_> = entries
        .iter()
        .filter(|(t, _)| t.starts_with(prefix))
        .collect();
    matches.sort_by(|a, b| b.1.total_cmp(&a.1));
    matches.into_iter().take(k).map(|(t, _)| t.clone()).collect()
}

proptest! {
    #[test]
    fn find_after_insert(words in prop::collection::vec("[a-d]{1,8}", 1..40)) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w).unwrap();
        }
        let inserted: HashSet<&str> = words.iter().map(String::as_str).collect();

        for w in &words {
            prop_assert!(trie.find(w, true).unwrap());
            prop_assert!(trie.find(w, false).unwrap());

            for (i, _) in w.char_indices().skip(1) {
                let p = &w[..i];
                prop_assert!(trie.find(p, false).unwrap());
                if !inserted.contains(p) {
                    prop_assert!(!trie.find(p, true).unwrap());
                }
            }
        }
        prop_assert_eq!(trie.len(), inserted.len());
    }

    #[test]
    fn all_terms_sorted_by_weight(entries in distinct_weighted()) {
        let ac = WeightedCompleter::from_entries(entries.clone()).unwrap();
        let got = ac.top_matches("", entries.len());
        prop_assert_eq!(got, brute_force(&entries, "", entries.len()));
    }

    #[test]
    fn top_matches_equal_brute_force(
        entries in distinct_weighted(),
        prefix in "[abc]{0,3}",
        k in 0usize..70,
    ) {
        let ac = WeightedCompleter::from_entries(entries.clone()).unwrap();
        prop_assert_eq!(ac.top_matches(&prefix, k), brute_force(&entries, &prefix, k));

        let best = brute_force(&entries, &prefix, 1);
        prop_assert_eq!(ac.top_match(&prefix).map(String::from), best.first().cloned());
    }

    #[test]
    fn top_matches_unique_with_ties(
        entries in prop::collection::btree_map("[ab]{1,7}", 0u8..4, 1..50),
        prefix in "[ab]{0,2}",
        k in 1usize..60,
    ) {
        let entries: BTreeMap<String, f64> =
            entries.into_iter().map(|(t, w)| (t, w as f64)).collect();
        let ac = WeightedCompleter::from_entries(entries.iter().map(|(t, w)| (t.as_str(), *w)))
            .unwrap();

        let got = ac.top_matches(&prefix, k);
        let unique: HashSet<&str> = got.iter().copied().collect();
        prop_assert_eq!(unique.len(), got.len());

        let total = entries.keys().filter(|t| t.starts_with(prefix.as_str())).count();
        prop_assert_eq!(got.len(), total.min(k));

        for pair in got.windows(2) {
            prop_assert!(entries[pair[0]] >= entries[pair[1]]);
        }
        for t in &got {
            prop_assert!(t.starts_with(prefix.as_str()));
            prop_assert_eq!(ac.weight_of(t), entries[*t]);
        }

        if let Some(top) = ac.top_match(&prefix) {
            prop_assert_eq!(entries[top], entries[got[0]]);
        } else {
            prop_assert!(got.is_empty());
        }
    }

    #[test]
    fn first_weight_wins(term in "[a-z]{1,5}", first in 0.0f64..100.0, second in 0.0f64..100.0) {
        let mut ac = WeightedCompleter::new();
        ac.insert(&term, first).unwrap();
        ac.insert(&term, second).unwrap();
        prop_assert_eq!(ac.weight_of(&term), first);
        prop_assert_eq!(ac.trie().root().max_weight(), first);
    }

    #[test]
    fn emission_matches_alphabet_order(
        perm in Just(vec!['a', 'b', 'c', 'd']).prop_shuffle(),
        words in prop::collection::vec("[abcd]{1,6}", 1..40),
    ) {
        let alphabet: String = perm.iter().collect();
        let mut ranker = AlphabetRanker::new(Alphabet::new(&alphabet).unwrap());
        for w in &words {
            ranker.insert(w).unwrap();
        }

        let key = |w: &String| -> Vec<usize> {
            w.chars().map(|c| perm.iter().position(|p| *p == c).unwrap()).collect()
        };
        let mut expected: Vec<String> = words.clone();
        expected.sort_by_key(key);
        expected.dedup();

        let got: Vec<String> = ranker.emit().map(String::from).collect();
        prop_assert_eq!(got, expected);
    }
}
