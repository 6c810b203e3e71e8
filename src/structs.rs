use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Characters considered part of a continuous token unless reconfigured:
/// ASCII alphanumerics plus underscore.
pub(crate) fn default_non_word_boundaries() -> BTreeSet<char> {
    ('0'..='9')
        .chain('a'..='z')
        .chain('A'..='Z')
        .chain(std::iter::once('_'))
        .collect()
}

/// Characters that terminate the lookahead token of a fuzzy step. A fuzzy
/// substitution may only land on a trie node that is terminal or continues
/// with one of these, so it never matches into the interior of another word.
/// Fixed internal policy, narrower than the `non_word_boundaries` complement.
pub(crate) fn word_delimiters() -> BTreeSet<char> {
    ['.', '\t', '\n', '\u{7}', ' ', ','].into_iter().collect()
}

/// A single node inside the keyword trie.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Outgoing edges keyed by the next (case-folded) character.
    pub(crate) children: BTreeMap<char, TrieNode>,
    /// Terminal slot: the clean name of the keyword whose path ends here.
    pub(crate) clean_name: Option<String>,
}

impl TrieNode {
    /// Whether a fuzzy lookahead may legitimately stop on this node.
    #[inline]
    pub(crate) fn is_fuzzy_landing(&self, delimiters: &BTreeSet<char>) -> bool {
        self.clean_name.is_some() || self.children.keys().any(|c| delimiters.contains(c))
    }
}

/// An in-memory keyword dictionary backed by a character trie, scanned in a
/// single left-to-right pass by [`extract`](KeywordTrie::extract) and
/// [`replace`](KeywordTrie::replace).
///
/// ```rust
/// use keyword_trie::KeywordTrie;
///
/// let mut trie = KeywordTrie::new();
/// trie.add_with("Big Apple", "New York").unwrap();
/// trie.add("Bay Area").unwrap();
/// let found = trie.extract("I love Big Apple and Bay Area.", 0);
/// assert_eq!(found, ["New York", "Bay Area"]);
/// ```
pub struct KeywordTrie {
    pub(crate) root: TrieNode,
    pub(crate) len: usize,
    pub(crate) case_sensitive: bool,
    pub(crate) non_word_boundaries: BTreeSet<char>,
    pub(crate) word_delimiters: BTreeSet<char>,
}

impl Default for KeywordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeywordTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = &mut f.debug_struct("KeywordTrie");
        if self.case_sensitive {
            s = s.field("case_sensitive", &self.case_sensitive);
        }
        s.field("len", &self.len).finish()
    }
}

impl KeywordTrie {
    /// Creates an empty, case-insensitive trie with the default character
    /// classes. Use [`KeywordTrieBuilder`](crate::KeywordTrieBuilder) for
    /// anything else.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
            case_sensitive: false,
            non_word_boundaries: default_non_word_boundaries(),
            word_delimiters: word_delimiters(),
        }
    }

    /// Case-folds a single character according to the configured policy.
    /// Folding is per-character (first scalar of the lowercase mapping) and
    /// is applied identically at insert and scan time.
    #[inline]
    pub(crate) fn fold(&self, c: char) -> char {
        if self.case_sensitive {
            c
        } else {
            c.to_lowercase().next().unwrap_or(c)
        }
    }

    #[inline]
    pub(crate) fn fold_chars(&self, s: &str) -> Vec<char> {
        s.chars().map(|c| self.fold(c)).collect()
    }
}

/// A single extraction result returned by [`KeywordTrie::extract_spans`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Clean name associated with the matched keyword.
    pub clean_name: String,
    /// Inclusive start byte index into the scanned text.
    pub start: usize,
    /// Exclusive end byte index into the scanned text.
    pub end: usize,
}
