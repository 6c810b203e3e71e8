mod builder;
mod error;
mod fuzzy;
mod loader;
mod replacer;
mod store;
mod structs;

pub use builder::KeywordTrieBuilder;
pub use error::Error;
pub use structs::{KeywordMatch, KeywordTrie};

#[allow(unused_macros)]
#[cfg(test)]
macro_rules! trace {
    ($($arg:tt)*) => { println!($($arg)*); };
}
#[allow(unused_macros)]
#[cfg(not(test))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[allow(unused_imports)]
pub(crate) use trace;

/// Longest-match keyword scanner
impl KeywordTrie {
    /// Extracts every keyword occurrence from `text`, returning the clean
    /// names in scan order. `max_cost` is the shared edit-distance budget per
    /// candidate match; `0` means exact matching only.
    ///
    /// ```rust
    /// use keyword_trie::KeywordTrie;
    ///
    /// let mut trie = KeywordTrie::new();
    /// trie.add_with("skype", "messenger").unwrap();
    /// assert_eq!(trie.extract("do you have skpe ?", 1), ["messenger"]);
    /// assert!(trie.extract("do you have skpe ?", 0).is_empty());
    /// ```
    #[must_use]
    pub fn extract(&self, text: &str, max_cost: usize) -> Vec<String> {
        self.extract_spans(text, max_cost)
            .into_iter()
            .map(|m| m.clean_name)
            .collect()
    }

    /// Like [`extract`](Self::extract), but each result carries the byte span
    /// of the occurrence in `text` (end-exclusive).
    ///
    /// The scan is a single left-to-right pass. While characters are
    /// word-internal and trie edges exist, the cursor walks down the trie; at
    /// every word boundary the walk either commits the longest terminal seen
    /// so far or keeps extending across the boundary (keywords may contain
    /// spaces or hyphens). A shorter keyword that prefixes a longer one never
    /// wins when the longer one also matches.
    #[must_use]
    pub fn extract_spans(&self, text: &str, max_cost: usize) -> Vec<KeywordMatch> {
        let mut found = Vec::new();
        if text.is_empty() {
            return found;
        }
        let chars: Vec<(usize, char)> = text
            .char_indices()
            .map(|(b, c)| (b, self.fold(c)))
            .collect();
        let n = chars.len();
        let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

        let mut current = &self.root;
        let mut seq_start = 0usize;
        let mut idx = 0usize;
        let mut curr_cost = max_cost;
        let mut reset = false;

        while idx < n {
            let ch = chars[idx].1;
            if !self.non_word_boundaries.contains(&ch) {
                // Word boundary: commit what we have, or keep walking past it
                // if the trie continues through this very character.
                if current.clean_name.is_some() || current.children.contains_key(&ch) {
                    let mut longest: Option<&str> = current.clean_name.as_deref();
                    if let Some(node) = current.children.get(&ch) {
                        let mut cont = node;
                        let mut idy = idx + 1;
                        loop {
                            if idy >= n {
                                if let Some(name) = &cont.clean_name {
                                    longest = Some(name);
                                    idx = idy;
                                }
                                break;
                            }
                            let inner = chars[idy].1;
                            if !self.non_word_boundaries.contains(&inner) {
                                if let Some(name) = &cont.clean_name {
                                    longest = Some(name);
                                    idx = idy;
                                }
                            }
                            if let Some(next) = cont.children.get(&inner) {
                                cont = next;
                            } else if curr_cost > 0 {
                                let wl = self.next_word_len(&chars[idy..]);
                                let token: Vec<char> =
                                    chars[idy..idy + wl].iter().map(|&(_, c)| c).collect();
                                match self.fuzzy_candidate(cont, &token, curr_cost) {
                                    Some(step) => {
                                        trace!(
                                            "fuzzy continue {token:?} cost={} depth={}",
                                            step.cost, step.depth
                                        );
                                        curr_cost -= step.cost;
                                        cont = step.node;
                                        idy += wl.saturating_sub(1);
                                    }
                                    None => break,
                                }
                            } else {
                                break;
                            }
                            idy += 1;
                        }
                    }
                    current = &self.root;
                    if let Some(name) = longest {
                        found.push(KeywordMatch {
                            clean_name: name.to_string(),
                            start: byte_at(seq_start),
                            end: byte_at(idx),
                        });
                    }
                    reset = true;
                } else {
                    current = &self.root;
                    reset = true;
                }
            } else if let Some(node) = current.children.get(&ch) {
                current = node;
            } else {
                // No edge for a word-internal character: try a fuzzy step,
                // otherwise abandon the attempt and skip the token.
                let mut stepped = false;
                if curr_cost > 0 {
                    let wl = self.next_word_len(&chars[idx..]);
                    let token: Vec<char> = chars[idx..idx + wl].iter().map(|&(_, c)| c).collect();
                    if let Some(step) = self.fuzzy_candidate(current, &token, curr_cost) {
                        trace!("fuzzy step {token:?} cost={} depth={}", step.cost, step.depth);
                        curr_cost -= step.cost;
                        current = step.node;
                        idx += wl.saturating_sub(1);
                        stepped = true;
                    }
                }
                if !stepped {
                    current = &self.root;
                    reset = true;
                    let mut idy = idx + 1;
                    while idy < n && self.non_word_boundaries.contains(&chars[idy].1) {
                        idy += 1;
                    }
                    idx = idy;
                }
            }
            // A terminal sitting on the cursor when input ends is a match.
            if idx + 1 >= n {
                if let Some(name) = &current.clean_name {
                    found.push(KeywordMatch {
                        clean_name: name.clone(),
                        start: byte_at(seq_start),
                        end: text.len(),
                    });
                }
            }
            idx += 1;
            if reset {
                reset = false;
                seq_start = idx;
                curr_cost = max_cost;
            }
        }
        found
    }
}
