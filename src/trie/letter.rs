use std::fmt;

/// A single lowercase letter `a`–`z`, the only edge label this trie supports.
///
/// `Letter` is the validated form of a character: holding one proves the
/// character sits inside the closed 26-symbol alphabet, so node code can use
/// [`index`](Letter::index) for direct slot addressing with no bounds concern.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters, the fixed branching width of every node.
    pub const ALPHABET: usize = 26;

    /// Converts a character to a `Letter`, returning `None` for anything
    /// outside `a`–`z`.
    #[inline]
    pub fn from_char(ch: char) -> Option<Letter> {
        ch.is_ascii_lowercase().then(|| Letter(ch as u8 - b'a'))
    }

    /// The 0-based position of this letter in the alphabet.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The character this letter stands for.
    #[inline]
    pub fn to_char(self) -> char {
        char::from(self.0 + b'a')
    }

    /// Builds a `Letter` from a slot index already known to be in range.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Letter {
        debug_assert!(index < Self::ALPHABET);
        Letter(index as u8)
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({:?})", self.to_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_lowercase_letter_round_trips() {
        for (i, ch) in ('a'..='z').enumerate() {
            let letter = Letter::from_char(ch).unwrap();
            assert_eq!(letter.index(), i);
            assert_eq!(letter.to_char(), ch);
        }
    }

    #[test]
    fn rejects_uppercase() {
        assert_eq!(Letter::from_char('A'), None);
        assert_eq!(Letter::from_char('Z'), None);
    }

    #[test]
    fn rejects_digits_whitespace_and_punctuation() {
        for ch in ['0', '9', ' ', '\t', '\n', '-', '\'', '_'] {
            assert_eq!(Letter::from_char(ch), None);
        }
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(Letter::from_char('é'), None);
        assert_eq!(Letter::from_char('渔'), None);
    }

    #[test]
    fn displays_as_its_character() {
        let letter = Letter::from_char('q').unwrap();
        assert_eq!(letter.to_string(), "q");
        assert_eq!(format!("{letter:?}"), "Letter('q')");
    }
}
