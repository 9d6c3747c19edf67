use std::fmt;

use super::node::TrieNode;
use super::word::{IntoWord, WordError};

/// A trie that counts exact-word occurrences over the alphabet `a`–`z`.
///
/// Words are inserted one at a time; inserting the same word again raises its
/// count. Lookups walk at most one node per character and never allocate.
/// The trie exclusively owns its node graph, so teardown is just dropping it.
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("ucf").unwrap();
/// trie.insert("ucf").unwrap();
/// trie.insert("is").unwrap();
///
/// assert_eq!(trie.lookup("ucf").unwrap(), 2);
/// assert_eq!(trie.lookup("is").unwrap(), 1);
/// assert_eq!(trie.lookup("u").unwrap(), 0); // prefix only, never inserted
/// ```
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie with a fresh root node.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Inserts one occurrence of `word`.
    ///
    /// Walks from the root one letter at a time, creating missing nodes along
    /// the way, and increments the count on the final node by one.
    ///
    /// # Errors
    ///
    /// [`WordError::Empty`] for the empty word, [`WordError::Letter`] if any
    /// character falls outside `a`–`z`. The word is validated in full before
    /// the walk starts, so a rejected insert leaves the trie unchanged.
    pub fn insert(&mut self, word: impl IntoWord) -> Result<(), WordError> {
        let word = word.collect_word()?;
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        let mut node = &mut self.root;
        for &letter in &word {
            node = node.child_or_insert(letter);
        }
        node.increment();
        Ok(())
    }

    /// Returns the number of times `word` was inserted.
    ///
    /// Walks the same path as [`insert`](Trie::insert) without creating
    /// nodes: the first missing edge means the word was never stored, and the
    /// walk stops at 0. A word that only ever appeared as a prefix of longer
    /// words also reports 0. Runs in O(word length) regardless of how many
    /// words the trie holds, and never mutates the trie.
    ///
    /// # Errors
    ///
    /// [`WordError::Letter`] if any character falls outside `a`–`z`. The
    /// empty word is allowed here and reports 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("note").unwrap();
    ///
    /// assert_eq!(trie.lookup("note").unwrap(), 1);
    /// assert_eq!(trie.lookup("no").unwrap(), 0);
    /// assert!(trie.lookup("no!").is_err());
    /// ```
    pub fn lookup(&self, word: impl IntoWord) -> Result<u64, WordError> {
        let word = word.collect_word()?;
        let mut node = &self.root;
        for &letter in &word {
            match node.get(letter) {
                Some(child) => node = child,
                None => return Ok(0),
            }
        }
        Ok(node.count())
    }

    /// Returns `true` if `word` was inserted at least once.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Trie::lookup).
    pub fn contains(&self, word: impl IntoWord) -> Result<bool, WordError> {
        Ok(self.lookup(word)? > 0)
    }

    /// Returns a reference to the root node for manual traversal.
    ///
    /// The root represents the empty prefix; its own count is always zero
    /// because empty words are rejected at insertion.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns `true` if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }

    /// Returns the number of live nodes, the root included.
    ///
    /// Computed by walking the graph, so this is O(nodes); it exists for
    /// inspection and tests rather than hot paths.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Returns every stored word with its count, in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["win", "and", "a", "and"] {
    ///     trie.insert(word).unwrap();
    /// }
    /// assert_eq!(
    ///     trie.words(),
    ///     vec![
    ///         ("a".to_string(), 1),
    ///         ("and".to_string(), 2),
    ///         ("win".to_string(), 1),
    ///     ]
    /// );
    /// ```
    pub fn words(&self) -> Vec<(String, u64)> {
        let mut words = Vec::new();
        let mut prefix = String::new();
        let mut stack = vec![self.root.children()];
        loop {
            let next = match stack.last_mut() {
                Some(children) => children.next(),
                None => break,
            };
            match next {
                Some((letter, child)) => {
                    prefix.push(letter.to_char());
                    if child.is_word() {
                        words.push((prefix.clone(), child.count()));
                    }
                    stack.push(child.children());
                }
                None => {
                    stack.pop();
                    prefix.pop();
                }
            }
        }
        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("node_count", &self.node_count())
            .finish()
    }
}
