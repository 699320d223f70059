use darting::trie::Trie;
use rand::{rng, Rng};

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new();
    let mut searches = vec![];

    // Store 10 random lowercase words composed of between 1 and 10
    // characters in our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = (0..rng().random_range(1..=SIZE))
            .map(|_| char::from(b'a' + rng().random_range(0..26u8)))
            .collect();
        trie.insert(entry.chars());
        searches.push(entry);
    }

    // Every stored word can be found again
    for entry in &searches {
        assert!(trie.contains(entry.chars()));
        println!("found: {}", entry);
    }

    println!(
        "base/check: {} slots, tail: {} symbols",
        trie.base().len(),
        trie.tail().len()
    );

    // Removing a word detaches it, the others stay put
    let gone = &searches[0];
    trie.remove(gone.chars());
    assert!(!trie.contains(gone.chars()));
    for entry in searches.iter().filter(|e| *e != gone) {
        assert!(trie.contains(entry.chars()));
    }
}
