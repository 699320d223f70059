use darting::alphabet::Alphabet;
use darting::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Build an alphabet from the grapheme clusters we expect to see
    let s = "a̐éö̲\r\n";
    let alphabet = Alphabet::from_symbols("$", s.graphemes(true)).expect("unique graphemes");

    // Create our trie and insert some graphemes
    let mut trie = Trie::with_alphabet(alphabet);
    let input = s.graphemes(true);
    trie.insert(input.clone());
    assert!(trie.contains(input.clone()));
    assert!(!trie.contains(input.clone().take(2)));
    assert!(trie.remove(input.clone()));
    assert!(!trie.contains(input));
}
