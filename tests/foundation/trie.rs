//! Integration tests for the completion trie

use lantern_foundation::CompletionTrie;
use proptest::prelude::*;

fn verbs() -> CompletionTrie {
    let mut trie = CompletionTrie::new();
    trie.insert_all(["go", "go to", "go to the", "grab", "save", "save as"]);
    trie
}

#[test]
fn search_lists_prefix_then_extensions() {
    let trie = verbs();
    assert_eq!(trie.search("go"), vec!["go", "go to", "go to the"]);
    assert_eq!(trie.search("g"), vec!["go", "go to", "go to the", "grab"]);
    assert!(trie.search("x").is_empty());
}

#[test]
fn empty_prefix_lists_everything() {
    assert_eq!(verbs().search("").len(), 6);
}

#[test]
fn delete_keeps_extensions() {
    let mut trie = verbs();
    assert!(trie.delete("go to"));
    assert!(!trie.contains("go to"));
    assert!(trie.contains("go"));
    assert!(trie.contains("go to the"));
    assert_eq!(trie.search("go"), vec!["go", "go to the"]);
    assert!(!trie.delete("go to"));
}

#[test]
fn duplicate_insert_is_ignored() {
    let mut trie = verbs();
    assert!(!trie.insert("save"));
    assert_eq!(trie.len(), 6);
}

proptest! {
    #[test]
    fn inserted_words_are_found(words in prop::collection::vec("[a-z ]{1,8}", 1..16)) {
        let mut trie = CompletionTrie::new();
        for word in &words {
            trie.insert(word);
        }
        for word in &words {
            prop_assert!(trie.contains(word));
            prop_assert!(trie.search(word).contains(word));
        }
    }

    #[test]
    fn deleting_one_word_keeps_the_rest(words in prop::collection::btree_set("[a-c]{1,4}", 2..10)) {
        let words: Vec<String> = words.into_iter().collect();
        let mut trie = CompletionTrie::new();
        trie.insert_all(words.iter().map(String::as_str));
        let (gone, kept) = words.split_first().unwrap();
        prop_assert!(trie.delete(gone));
        prop_assert!(!trie.search("").contains(gone));
        for word in kept {
            prop_assert!(trie.contains(word));
        }
    }
}
