//! Per-evaluation view of a password with derived character-class counts.

/// A borrowed password plus the counts every check needs.
///
/// Created inside a single evaluation call and discarded with it; nothing
/// here outlives the exposed secret.
#[derive(Debug, Clone, Copy)]
pub struct PasswordCandidate<'a> {
    text: &'a str,
    length: usize,
    lowercase: usize,
    uppercase: usize,
    digits: usize,
    symbols: usize,
}

impl<'a> PasswordCandidate<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut length = 0;
        let mut lowercase = 0;
        let mut uppercase = 0;
        let mut digits = 0;
        let mut symbols = 0;
        for c in text.chars() {
            length += 1;
            if c.is_lowercase() {
                lowercase += 1;
            }
            if c.is_uppercase() {
                uppercase += 1;
            }
            if c.is_ascii_digit() {
                digits += 1;
            }
            if !c.is_alphanumeric() {
                symbols += 1;
            }
        }
        Self {
            text,
            length,
            lowercase,
            uppercase,
            digits,
            symbols,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length in characters, not bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn lowercase(&self) -> usize {
        self.lowercase
    }

    pub fn uppercase(&self) -> usize {
        self.uppercase
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn symbols(&self) -> usize {
        self.symbols
    }
}
