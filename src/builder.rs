use crate::KeywordTrie;
use crate::structs::{TrieNode, default_non_word_boundaries, word_delimiters};
use std::collections::BTreeSet;

/// Builder for [`KeywordTrie`].
///
/// ```rust
/// use keyword_trie::KeywordTrieBuilder;
///
/// let mut trie = KeywordTrieBuilder::new()
///     .case_sensitive(true)
///     .build();
/// trie.add_with("J2EE", "Java").unwrap();
/// assert!(trie.contains("J2EE"));
/// assert!(!trie.contains("j2ee"));
/// ```
#[derive(Debug, Default)]
pub struct KeywordTrieBuilder {
    case_sensitive: bool,
    non_word_boundaries: Option<BTreeSet<char>>,
}

impl KeywordTrieBuilder {
    /// Start with the defaults: case-insensitive, `[0-9A-Za-z_]` treated as
    /// word-internal characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match keywords exactly as stored instead of case-folding both sides.
    #[must_use]
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    /// Replace the set of characters treated as "inside a word". Scans treat
    /// every other character as a word boundary.
    #[must_use]
    pub fn non_word_boundaries(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.non_word_boundaries = Some(chars.into_iter().collect());
        self
    }

    /// Builds an empty [`KeywordTrie`]; keywords are added afterwards through
    /// the store operations or the bulk loaders.
    #[must_use]
    pub fn build(self) -> KeywordTrie {
        KeywordTrie {
            root: TrieNode::default(),
            len: 0,
            case_sensitive: self.case_sensitive,
            non_word_boundaries: self
                .non_word_boundaries
                .unwrap_or_else(default_non_word_boundaries),
            word_delimiters: word_delimiters(),
        }
    }
}
