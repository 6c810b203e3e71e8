use crate::{Error, KeywordTrie};
use std::fs;
use std::path::Path;

/// Bulk ingestion collaborators. These are thin drivers over
/// [`add_with`](KeywordTrie::add_with) and [`remove`](KeywordTrie::remove);
/// the trie itself owns no file format.
impl KeywordTrie {
    /// Adds keywords from a line-oriented source. Each non-empty line is
    /// either `keyword=>clean_name` or a bare keyword mapped to itself.
    /// Returns how many lines created a new term.
    ///
    /// ```rust
    /// use keyword_trie::KeywordTrie;
    ///
    /// let mut trie = KeywordTrie::new();
    /// trie.add_keywords_from_lines("java_2e=>java\npython\n".lines())
    ///     .unwrap();
    /// assert_eq!(trie.get("java_2e"), Some("java"));
    /// assert_eq!(trie.get("python"), Some("python"));
    /// ```
    pub fn add_keywords_from_lines<'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<usize, Error> {
        let mut created = 0;
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fresh = match line.split_once("=>") {
                Some((keyword, clean_name)) => self.add_with(keyword, clean_name.trim())?,
                None => self.add(line)?,
            };
            if fresh {
                created += 1;
            }
        }
        Ok(created)
    }

    /// Reads a keyword file and feeds it through
    /// [`add_keywords_from_lines`](Self::add_keywords_from_lines).
    ///
    /// # Errors
    /// [`Error::Io`] if the path cannot be read.
    pub fn add_keywords_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, Error> {
        let contents = fs::read_to_string(path)?;
        self.add_keywords_from_lines(contents.lines())
    }

    /// Adds every keyword in `keywords` as a synonym of `clean_name`.
    /// Returns how many of them were new terms.
    pub fn add_synonyms<I>(&mut self, clean_name: &str, keywords: I) -> Result<usize, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut created = 0;
        for keyword in keywords {
            if self.add_with(keyword.as_ref(), clean_name)? {
                created += 1;
            }
        }
        Ok(created)
    }

    /// Removes every keyword in `keywords`; the clean name they map to is
    /// irrelevant. Returns how many were actually present.
    pub fn remove_synonyms<I>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keywords
            .into_iter()
            .filter(|keyword| self.remove(keyword.as_ref()))
            .count()
    }

    /// Adds a flat list of self-mapped keywords. Returns how many were new.
    pub fn add_keywords_from_list<I>(&mut self, keywords: I) -> Result<usize, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut created = 0;
        for keyword in keywords {
            if self.add(keyword.as_ref())? {
                created += 1;
            }
        }
        Ok(created)
    }

    /// Removes a flat list of keywords. Returns how many were present.
    pub fn remove_keywords_from_list<I>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.remove_synonyms(keywords)
    }
}
