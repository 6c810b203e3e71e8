use crate::KeywordTrie;
use crate::structs::TrieNode;

/// A fuzzy landing spot inside the trie: the node reached by transforming
/// the lookahead token, the edit distance spent to get there, and how many
/// trie edges were walked from the start node.
pub(crate) struct Candidate<'a> {
    pub(crate) node: &'a TrieNode,
    pub(crate) cost: usize,
    /// Trie edges walked from the start node; read by tests and tracing.
    #[allow(dead_code)]
    pub(crate) depth: usize,
}

impl KeywordTrie {
    /// Searches the subtree under `start` for the first node reachable from
    /// `word` with total edit distance within `max_cost` that is a legitimate
    /// landing spot (terminal, or continuing with a word delimiter).
    ///
    /// The exploration is a depth-first walk carrying one row of the classic
    /// edit-distance table per visited node, pruned as soon as the row
    /// minimum exceeds the budget. Children live in a `BTreeMap`, so the
    /// visit order is deterministic and so is the winning candidate.
    /// Only the first acceptable candidate is ever needed, hence the
    /// early-return instead of a full result set.
    pub(crate) fn fuzzy_candidate<'a>(
        &self,
        start: &'a TrieNode,
        word: &[char],
        max_cost: usize,
    ) -> Option<Candidate<'a>> {
        let first_row: Vec<usize> = (0..=word.len()).collect();
        for (&ch, child) in &start.children {
            if let Some(found) = self.descend(ch, child, word, &first_row, max_cost, 1) {
                return Some(found);
            }
        }
        None
    }

    fn descend<'a>(
        &self,
        ch: char,
        node: &'a TrieNode,
        word: &[char],
        prev_row: &[usize],
        max_cost: usize,
        depth: usize,
    ) -> Option<Candidate<'a>> {
        let mut row = Vec::with_capacity(word.len() + 1);
        row.push(prev_row[0] + 1);
        for col in 1..=word.len() {
            let insert = row[col - 1] + 1;
            let delete = prev_row[col] + 1;
            let replace = prev_row[col - 1] + usize::from(word[col - 1] != ch);
            row.push(insert.min(delete).min(replace));
        }

        let cost = *row.last().unwrap_or(&0);
        if cost <= max_cost && node.is_fuzzy_landing(&self.word_delimiters) {
            return Some(Candidate { node, cost, depth });
        }
        // Branch-and-bound: the row minimum is a lower bound on every cost
        // reachable through this node.
        if row.iter().min().copied().unwrap_or(0) <= max_cost {
            for (&next_ch, child) in &node.children {
                if let Some(found) = self.descend(next_ch, child, word, &row, max_cost, depth + 1) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Returns the longest run of word-internal characters at the front of
    /// `chars`, i.e. the lookahead token a fuzzy step consumes.
    pub(crate) fn next_word_len(&self, chars: &[(usize, char)]) -> usize {
        chars
            .iter()
            .position(|&(_, c)| !self.non_word_boundaries.contains(&c))
            .unwrap_or(chars.len())
    }
}
