use smallvec::SmallVec;

use std::error::Error;
use std::fmt;

use super::letter::Letter;

/// Errors produced when validating a word at the API boundary.
///
/// The trie never computes a child index from an unvalidated character: a
/// word containing anything outside `a`–`z` is rejected here, before any node
/// is touched.
#[derive(Debug, PartialEq, Eq)]
pub enum WordError {
    /// The empty word cannot be stored; the root node never carries a count.
    Empty,
    /// A character outside `a`–`z`.
    Letter {
        /// The offending character.
        ch: char,
        /// 0-based position of the character in the word.
        position: usize,
    },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::Empty => write!(f, "empty word"),
            WordError::Letter { ch, position } => {
                write!(f, "character {ch:?} at position {position} is outside a-z")
            }
        }
    }
}

impl Error for WordError {}

/// Trait for types that can be used as a word when inserting into or querying
/// a trie.
///
/// Implemented for common string types so that
/// [`Trie::insert`](super::tree::Trie::insert) and
/// [`Trie::lookup`](super::tree::Trie::lookup) accept them directly, and for
/// letter sequences, which are already validated and collect as-is.
pub trait IntoWord {
    /// Collects this word into a validated letter buffer.
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError>;
}

fn collect_chars(
    chars: impl Iterator<Item = char>,
) -> Result<SmallVec<[Letter; 32]>, WordError> {
    chars
        .enumerate()
        .map(|(position, ch)| Letter::from_char(ch).ok_or(WordError::Letter { ch, position }))
        .collect()
}

// String types

impl IntoWord for &str {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError> {
        collect_chars(self.chars())
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError> {
        collect_chars(self.chars())
    }
}

impl IntoWord for String {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError> {
        collect_chars(self.chars())
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError> {
        collect_chars(self.chars())
    }
}

// Pre-validated letter sequences

impl IntoWord for &[Letter] {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError> {
        Ok(self.iter().copied().collect())
    }
}

impl IntoWord for Vec<Letter> {
    fn collect_word(self) -> Result<SmallVec<[Letter; 32]>, WordError> {
        Ok(self.into_iter().collect())
    }
}
