use crate::structs::TrieNode;
use crate::{Error, KeywordTrie};
use std::collections::BTreeMap;

impl KeywordTrie {
    /// Adds `keyword` mapped to itself as clean name. Returns `true` if a new
    /// term was created, `false` if an existing term was merely updated.
    pub fn add(&mut self, keyword: impl AsRef<str>) -> Result<bool, Error> {
        let keyword = keyword.as_ref();
        self.add_with(keyword, keyword)
    }

    /// Adds `keyword` mapped to `clean_name`.
    ///
    /// Re-adding an existing keyword overwrites its clean name without
    /// changing [`len`](Self::len).
    ///
    /// # Errors
    /// [`Error::EmptyKeyword`] if `keyword` is empty.
    pub fn add_with(
        &mut self,
        keyword: impl AsRef<str>,
        clean_name: impl Into<String>,
    ) -> Result<bool, Error> {
        let keyword = keyword.as_ref();
        if keyword.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        let path = self.fold_chars(keyword);
        let mut node = &mut self.root;
        for ch in path {
            node = node.children.entry(ch).or_default();
        }
        let created = node.clean_name.is_none();
        node.clean_name = Some(clean_name.into());
        if created {
            self.len += 1;
        }
        Ok(created)
    }

    /// Removes `keyword` if present, pruning every node on its path that no
    /// longer leads to any other keyword. Returns `true` iff the keyword
    /// existed; removing a missing keyword is not an error.
    pub fn remove(&mut self, keyword: impl AsRef<str>) -> bool {
        let path = self.fold_chars(keyword.as_ref());
        if path.is_empty() {
            return false;
        }
        if remove_rec(&mut self.root, &path).is_some() {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Exact whole-word lookup. A stored keyword whose path merely passes
    /// through `word` (without terminating there) does not count.
    #[must_use]
    pub fn get(&self, word: impl AsRef<str>) -> Option<&str> {
        let mut node = &self.root;
        for ch in word.as_ref().chars() {
            node = node.children.get(&self.fold(ch))?;
        }
        node.clean_name.as_deref()
    }

    /// Boolean form of [`get`](Self::get).
    #[must_use]
    pub fn contains(&self, word: impl AsRef<str>) -> bool {
        self.get(word).is_some()
    }

    /// Number of distinct stored keywords, maintained incrementally.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no keywords are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Enumerates every stored keyword and its clean name, reconstructing
    /// each keyword from its trie path. This is the only bulk access path;
    /// the node tree itself stays private.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let mut prefix = String::new();
        collect_entries(&self.root, &mut prefix, &mut out);
        out
    }

    /// Replaces the set of characters treated as word-internal. Affects
    /// subsequent scans only; stored keywords are untouched.
    pub fn set_non_word_boundaries(&mut self, chars: impl IntoIterator<Item = char>) {
        self.non_word_boundaries = chars.into_iter().collect();
    }

    /// Adds a single character to the word-internal set.
    pub fn add_non_word_boundary(&mut self, ch: char) {
        self.non_word_boundaries.insert(ch);
    }
}

/// Unwinds the descent on return: a child is pruned when the removal left it
/// without children and without a terminal, stopping at the first ancestor
/// that still branches or terminates. `Some(prune)` means the keyword was
/// found and removed.
fn remove_rec(node: &mut TrieNode, path: &[char]) -> Option<bool> {
    match path.split_first() {
        None => {
            node.clean_name.take()?;
            Some(node.children.is_empty())
        }
        Some((ch, rest)) => {
            let child = node.children.get_mut(ch)?;
            if remove_rec(child, rest)? {
                node.children.remove(ch);
            }
            Some(node.clean_name.is_none() && node.children.is_empty())
        }
    }
}

fn collect_entries(node: &TrieNode, prefix: &mut String, out: &mut BTreeMap<String, String>) {
    if let Some(name) = &node.clean_name {
        out.insert(prefix.clone(), name.clone());
    }
    for (&ch, child) in &node.children {
        prefix.push(ch);
        collect_entries(child, prefix, out);
        prefix.pop();
    }
}
