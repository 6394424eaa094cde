//! Common-password dictionary - flat-file backed membership checks.
//!
//! The engine only needs "is this string a member"; the flat file (one
//! entry per line) is loaded once into a hash set, so lookups are O(1)
//! amortized rather than the original linear scan.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read dictionary file: {0}")]
    Read(#[from] std::io::Error),
    #[error("dictionary file is empty")]
    EmptyFile,
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `BRUTUS_DICTIONARY_PATH`
/// 2. Default path `./assets/dictionary.txt`
pub fn dictionary_path() -> PathBuf {
    std::env::var("BRUTUS_DICTIONARY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/dictionary.txt"))
}

/// An immutable, lowercased set of common passwords and dictionary terms.
///
/// Constructed once at startup and shared read-only with the evaluator.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads the dictionary from [`dictionary_path`].
    ///
    /// # Errors
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load_default() -> Result<Self, DictionaryError> {
        Self::load(dictionary_path())
    }

    /// Loads the dictionary from a specific file path.
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: file not found {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary loaded: {} entries from {:?}", words.len(), path);

        Ok(Self { words })
    }

    /// Builds a dictionary from an in-memory word list, lowercasing each
    /// entry. Useful for tests and embedded lists.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.into().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_dictionary_path_default() {
        remove_env("BRUTUS_DICTIONARY_PATH");

        let path = dictionary_path();
        assert_eq!(path, PathBuf::from("./assets/dictionary.txt"));
    }

    #[test]
    #[serial]
    fn test_dictionary_path_from_env() {
        let custom_path = "/custom/path/dictionary.txt";
        set_env("BRUTUS_DICTIONARY_PATH", custom_path);

        let path = dictionary_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("BRUTUS_DICTIONARY_PATH");
    }

    #[test]
    fn test_load_file_not_found() {
        let result = Dictionary::load("/nonexistent/path/dictionary.txt");
        assert!(matches!(result, Err(DictionaryError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = Dictionary::load(temp_file.path());
        assert!(matches!(result, Err(DictionaryError::EmptyFile)));
    }

    #[test]
    fn test_load_success() {
        let temp_file = setup_with_tempfile(&["Password123", "qwerty", "", "  admin  "]);

        let dictionary = Dictionary::load(temp_file.path()).expect("load");
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("password123"));
        assert!(dictionary.contains("ADMIN"));
    }

    #[test]
    #[serial]
    fn test_load_default_honors_env() {
        let temp_file = setup_with_tempfile(&["letmein"]);
        set_env(
            "BRUTUS_DICTIONARY_PATH",
            temp_file.path().to_str().unwrap(),
        );

        let dictionary = Dictionary::load_default().expect("load");
        assert!(dictionary.contains("letmein"));

        remove_env("BRUTUS_DICTIONARY_PATH");
    }

    #[test]
    fn test_from_words_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["Qwerty", "password"]);
        assert!(dictionary.contains("qwerty"));
        assert!(dictionary.contains("QWERTY"));
        assert!(!dictionary.contains("hunter2"));
    }
}
