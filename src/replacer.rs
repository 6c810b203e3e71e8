use crate::KeywordTrie;

impl KeywordTrie {
    /// Rewrites `text`, substituting every matched keyword with its clean
    /// name. Unmatched spans are copied verbatim in their original casing,
    /// and the boundary character trailing each match is preserved. The scan
    /// and the longest-match policy are the same as in
    /// [`extract`](Self::extract); `max_cost` enables fuzzy matching.
    ///
    /// ```rust
    /// use keyword_trie::KeywordTrie;
    ///
    /// let mut trie = KeywordTrie::new();
    /// trie.add_with("Big Apple", "New York").unwrap();
    /// trie.add("Bay Area").unwrap();
    /// assert_eq!(
    ///     trie.replace("I love Big Apple and Bay Area.", 0),
    ///     "I love New York and Bay Area."
    /// );
    /// ```
    #[must_use]
    pub fn replace(&self, text: &str, max_cost: usize) -> String {
        if text.is_empty() {
            return String::new();
        }
        let chars: Vec<(char, char)> = text.chars().map(|c| (c, self.fold(c))).collect();
        let n = chars.len();

        let mut out = String::with_capacity(text.len());
        // Original-cased text of the candidate walked since the last flush.
        let mut pending = String::new();
        // Boundary character to re-emit after a committed clean name.
        let mut boundary: Option<char> = None;
        let mut current = &self.root;
        let mut idx = 0usize;
        let mut curr_cost = max_cost;

        while idx < n {
            let (orig, ch) = chars[idx];
            pending.push(orig);
            if !self.non_word_boundaries.contains(&ch) {
                boundary = Some(orig);
                if current.clean_name.is_some() || current.children.contains_key(&ch) {
                    let mut longest: Option<&str> = current.clean_name.as_deref();
                    if let Some(node) = current.children.get(&ch) {
                        let mut cont = node;
                        let mut idy = idx + 1;
                        loop {
                            if idy >= n {
                                if let Some(name) = &cont.clean_name {
                                    longest = Some(name);
                                    boundary = None;
                                    idx = idy;
                                }
                                break;
                            }
                            let (inner_orig, inner) = chars[idy];
                            if !self.non_word_boundaries.contains(&inner) {
                                if let Some(name) = &cont.clean_name {
                                    longest = Some(name);
                                    boundary = Some(inner_orig);
                                    idx = idy;
                                }
                            }
                            if let Some(next) = cont.children.get(&inner) {
                                cont = next;
                            } else if curr_cost > 0 {
                                let wl = self.next_word_len_folded(&chars[idy..]);
                                let token: Vec<char> =
                                    chars[idy..idy + wl].iter().map(|&(_, c)| c).collect();
                                match self.fuzzy_candidate(cont, &token, curr_cost) {
                                    Some(step) => {
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
                        out.push_str(name);
                        if let Some(b) = boundary {
                            out.push(b);
                        }
                    } else {
                        out.push_str(&pending);
                    }
                    pending.clear();
                    boundary = None;
                    curr_cost = max_cost;
                } else {
                    current = &self.root;
                    out.push_str(&pending);
                    pending.clear();
                    boundary = None;
                    curr_cost = max_cost;
                }
            } else if let Some(node) = current.children.get(&ch) {
                current = node;
            } else {
                let mut stepped = false;
                if curr_cost > 0 {
                    let wl = self.next_word_len_folded(&chars[idx..]);
                    let token: Vec<char> = chars[idx..idx + wl].iter().map(|&(_, c)| c).collect();
                    if let Some(step) = self.fuzzy_candidate(current, &token, curr_cost) {
                        curr_cost -= step.cost;
                        current = step.node;
                        for &(o, _) in &chars[idx + 1..idx + wl] {
                            pending.push(o);
                        }
                        idx += wl.saturating_sub(1);
                        stepped = true;
                    }
                }
                if !stepped {
                    // Flush the failed token verbatim, boundary included.
                    current = &self.root;
                    let mut idy = idx + 1;
                    while idy < n {
                        let (o, c) = chars[idy];
                        pending.push(o);
                        if !self.non_word_boundaries.contains(&c) {
                            break;
                        }
                        idy += 1;
                    }
                    idx = idy;
                    out.push_str(&pending);
                    pending.clear();
                    boundary = None;
                    curr_cost = max_cost;
                }
            }
            if idx + 1 >= n {
                if let Some(name) = &current.clean_name {
                    out.push_str(name);
                } else {
                    out.push_str(&pending);
                }
                pending.clear();
            }
            idx += 1;
        }
        out
    }

    /// [`next_word_len`](Self::next_word_len) over `(original, folded)`
    /// character pairs.
    #[inline]
    fn next_word_len_folded(&self, chars: &[(char, char)]) -> usize {
        chars
            .iter()
            .position(|&(_, c)| !self.non_word_boundaries.contains(&c))
            .unwrap_or(chars.len())
    }
}
