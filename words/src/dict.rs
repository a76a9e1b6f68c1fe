//! Dictionary loading and membership lookups.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Typed failure for dictionary loading.
#[derive(Debug)]
pub enum DictError {
    /// The word file could not be read.
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// The file loaded but held no words of the requested length.
    NoWords {
        /// The file that was loaded.
        path: PathBuf,
        /// The requested word length.
        word_len: usize,
    },
}

impl std::fmt::Display for DictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read dictionary {}: {source}", path.display())
            }
            Self::NoWords { path, word_len } => write!(
                f,
                "dictionary {} holds no words of length {word_len}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NoWords { .. } => None,
        }
    }
}

/// A fixed-length word list with O(1) membership lookups.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    word_len: usize,
}

impl Dictionary {
    /// Load all words of length `word_len` from a newline-delimited file.
    /// Words are trimmed and lowercased; other lengths are skipped.
    ///
    /// # Errors
    ///
    /// [`DictError::Io`] if the file cannot be read, [`DictError::NoWords`]
    /// if no word of the requested length survives filtering.
    pub fn load(path: &Path, word_len: usize) -> Result<Self, DictError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_words(text.lines(), word_len);
        if dict.is_empty() {
            return Err(DictError::NoWords {
                path: path.to_path_buf(),
                word_len,
            });
        }
        Ok(dict)
    }

    /// Build a dictionary from raw word lines, keeping only `word_len`
    /// characters after trimming and lowercasing.
    pub fn from_words<I, W>(words: I, word_len: usize) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| w.chars().count() == word_len)
            .collect();
        Self { words, word_len }
    }

    /// Whether `word` is a legal word of this dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The fixed word length this dictionary was filtered to.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }
}
