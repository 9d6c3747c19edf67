/// The closed-alphabet edge label: validated lowercase letters.
pub mod letter;
/// Dictionary loading: word-list files and bulk trie construction.
pub mod loader;
/// The trie node: fixed-width child table plus occurrence count.
pub mod node;
/// The counting trie container and its operations.
pub mod tree;
/// Word validation and the `IntoWord` collection trait.
pub mod word;

pub use letter::Letter;
pub use node::TrieNode;
pub use tree::Trie;
pub use word::{IntoWord, WordError};

#[cfg(test)]
mod test {
    use super::loader::build_trie_from_file;

    #[test]
    fn dictionary_file_scenario() {
        let trie = build_trie_from_file("demos/dictionary.txt").unwrap();
        assert_eq!(trie.lookup("ucf").unwrap(), 2);
        assert_eq!(trie.lookup("is").unwrap(), 1);
        assert_eq!(trie.lookup("university").unwrap(), 1);
        assert_eq!(trie.lookup("notaword").unwrap(), 0);
        // "no" is a path prefix of nothing stored and "note" was never
        // inserted; both report zero.
        assert_eq!(trie.lookup("no").unwrap(), 0);
        assert_eq!(trie.lookup("note").unwrap(), 0);
        // 9 insertions, 8 distinct words ("ucf" appears twice).
        assert_eq!(trie.words().len(), 8);
    }
}
