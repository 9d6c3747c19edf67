//! # libtrie
//!
//! A fixed-alphabet counting [trie](https://en.wikipedia.org/wiki/Trie) for
//! exact-word occurrence queries.
//!
//! The trie stores words over the closed alphabet `a`–`z` and answers one
//! question: how many times was this exact word inserted? Every node carries
//! a 26-slot direct-index child table, so insertion and lookup both run in
//! O(word length), independent of how many words are stored. Characters
//! outside the alphabet are rejected at the API boundary and never reach the
//! index computation.
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["ucf", "is", "a", "great", "university", "and", "ucf", "knights", "win"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! assert_eq!(trie.lookup("ucf").unwrap(), 2);
//! assert_eq!(trie.lookup("is").unwrap(), 1);
//! assert_eq!(trie.lookup("notaword").unwrap(), 0);
//! assert_eq!(trie.lookup("u").unwrap(), 0); // prefixes of stored words don't count
//! ```
//!
//! ## Loading a dictionary file
//!
//! Dictionaries are plain text: a word count header followed by that many
//! whitespace-separated words. Lines starting with `#` are comments.
//!
//! ```no_run
//! use libtrie::trie::loader::build_trie_from_file;
//!
//! let trie = build_trie_from_file("dictionary.txt").unwrap();
//! ```
//!
//! ## Traversal
//!
//! The node graph is open for manual walks, one validated letter at a time:
//!
//! ```
//! use libtrie::trie::{Letter, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("an").unwrap();
//! trie.insert("and").unwrap();
//!
//! let node = trie.root();
//! let node = node.get(Letter::from_char('a').unwrap()).unwrap();
//! assert!(!node.is_word());
//! let node = node.get(Letter::from_char('n').unwrap()).unwrap();
//! assert!(node.is_word());
//! assert_eq!(node.count(), 1);
//! ```

#![warn(missing_docs)]

/// Core trie data structure: letters, nodes, the counting container, and the
/// dictionary loader.
pub mod trie;
