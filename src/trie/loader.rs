//! Loading word dictionaries from text sources.
//!
//! The dictionary format is plain text: a word count followed by that many
//! whitespace-separated words. Lines starting with `#` are treated as
//! comments and ignored. Blank lines are skipped.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::tree::Trie;
use super::word::{IntoWord, WordError};

/// Errors describing a malformed dictionary stream.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The stream ended before a word count was found.
    MissingHeader,
    /// The first token was not a word count.
    Header(String),
    /// The stream promised more words than it carried.
    Truncated {
        /// The count announced in the header.
        expected: usize,
        /// How many words were actually present.
        found: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::MissingHeader => write!(f, "dictionary has no word count header"),
            LoadError::Header(token) => {
                write!(f, "dictionary word count {token:?} is not a number")
            }
            LoadError::Truncated { expected, found } => {
                write!(f, "dictionary promised {expected} words but held {found}")
            }
        }
    }
}

impl Error for LoadError {}

/// Reads a dictionary from any buffered source and returns its words in
/// order.
///
/// The first token is the word count N; exactly N following tokens are
/// collected, and anything past them is ignored. The returned sequence
/// preserves order and multiplicity, so repeated words stay repeated.
pub fn read_dictionary_from(mut reader: impl BufRead) -> Result<Vec<String>, Box<dyn Error>> {
    let mut expected: Option<usize> = None;
    let mut words = Vec::new();

    // One line buffer reused across the whole read instead of a fresh
    // allocation per line.
    let mut buf = String::with_capacity(80);
    loop {
        match reader.read_line(&mut buf) {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        if !is_comment(&buf) {
            for token in buf.split_whitespace() {
                match expected {
                    None => {
                        let count = token
                            .parse()
                            .map_err(|_| LoadError::Header(token.to_string()))?;
                        expected = Some(count);
                    }
                    Some(count) if words.len() < count => words.push(token.to_string()),
                    Some(_) => {}
                }
            }
        }
        if expected.is_some_and(|count| words.len() == count) {
            break;
        }
        buf.clear();
    }

    match expected {
        None => Err(LoadError::MissingHeader.into()),
        Some(count) if words.len() < count => Err(LoadError::Truncated {
            expected: count,
            found: words.len(),
        }
        .into()),
        Some(_) => Ok(words),
    }
}

/// Reads a dictionary file and returns its words in order.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::loader::read_dictionary;
///
/// let words = read_dictionary("dictionary.txt").unwrap();
/// ```
pub fn read_dictionary(filename: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let file = File::open(filename)?;
    read_dictionary_from(BufReader::new(file))
}

/// Builds a trie holding one occurrence per word in the iterator.
///
/// Unlike dictionary structures built from sorted input, insertion order
/// carries no requirement here: any permutation of the same words produces
/// the same counts.
///
/// # Errors
///
/// The first invalid word ([`WordError`]) aborts the build.
///
/// # Examples
///
/// ```
/// use libtrie::trie::loader::build_trie;
///
/// let trie = build_trie(["ucf", "is", "a", "great", "ucf"]).unwrap();
/// assert_eq!(trie.lookup("ucf").unwrap(), 2);
/// assert_eq!(trie.lookup("great").unwrap(), 1);
/// ```
pub fn build_trie<W>(words: impl IntoIterator<Item = W>) -> Result<Trie, WordError>
where
    W: IntoWord,
{
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word)?;
    }
    Ok(trie)
}

/// Builds a trie from a dictionary file, counting repeated words.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::loader::build_trie_from_file;
///
/// let trie = build_trie_from_file("dictionary.txt").unwrap();
/// ```
pub fn build_trie_from_file(filename: &str) -> Result<Trie, Box<dyn Error>> {
    let words = read_dictionary(filename)?;
    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word)?;
    }
    Ok(trie)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn words_come_back_in_order() {
        let words = read_dictionary_from(Cursor::new("3\nfoo\nbar\nbaz\n")).unwrap();
        assert_eq!(words, ["foo", "bar", "baz"]);
    }

    #[test]
    fn header_can_share_a_line_with_words() {
        let words = read_dictionary_from(Cursor::new("2 alpha beta")).unwrap();
        assert_eq!(words, ["alpha", "beta"]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let input = "# word list\n3\n\nalpha\n# interlude\nbeta\ngamma\n";
        let words = read_dictionary_from(Cursor::new(input)).unwrap();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn tokens_past_the_promised_count_are_ignored() {
        let words = read_dictionary_from(Cursor::new("1 alpha beta gamma")).unwrap();
        assert_eq!(words, ["alpha"]);
    }

    #[test]
    fn repeated_words_are_preserved() {
        let words = read_dictionary_from(Cursor::new("3 ucf is ucf")).unwrap();
        assert_eq!(words, ["ucf", "is", "ucf"]);
    }

    #[test]
    fn zero_word_dictionary_is_valid() {
        let words = read_dictionary_from(Cursor::new("0\n")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn empty_stream_has_no_header() {
        let err = read_dictionary_from(Cursor::new("")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::MissingHeader)
        );
    }

    #[test]
    fn non_numeric_header_is_rejected() {
        let err = read_dictionary_from(Cursor::new("many\nwords\n")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::Header("many".to_string()))
        );
    }

    #[test]
    fn truncated_dictionary_is_rejected() {
        let err = read_dictionary_from(Cursor::new("5\nalpha beta")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::Truncated {
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn build_counts_repeats() {
        let trie = build_trie(["ucf", "is", "ucf"]).unwrap();
        assert_eq!(trie.lookup("ucf").unwrap(), 2);
        assert_eq!(trie.lookup("is").unwrap(), 1);
        assert_eq!(trie.lookup("notaword").unwrap(), 0);
    }

    #[test]
    fn build_rejects_invalid_words() {
        let err = build_trie(["alpha", "Beta"]).unwrap_err();
        assert_eq!(err, WordError::Letter { ch: 'B', position: 0 });
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("reverberate"));
        assert!(!is_comment(" reverberate"));
    }
}
