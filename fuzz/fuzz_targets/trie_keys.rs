//! Fuzz harness for trie insert/remove bookkeeping
//!
//! Every byte is a key of one to three symbols; odd bytes remove instead of
//! insert. Once all keys are gone the trie must be back to a lone root.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_trie::Trie;

fuzz_target!(|data: &[u8]| {
    let mut trie = Trie::new();
    let mut live = std::collections::BTreeSet::new();

    for &byte in data {
        let len = usize::from(byte % 3) + 1;
        let key: String = (0..len)
            .map(|i| char::from(b'a' + (byte >> i) % 4))
            .collect();
        if byte & 1 == 0 {
            let _ = trie.insert(&key, byte);
            live.insert(key);
        } else {
            trie.remove(&key);
            live.remove(&key);
        }
        assert_eq!(trie.len(), live.len());
    }

    for key in &live {
        assert!(trie.remove(key).is_some());
    }
    assert_eq!(trie.node_count(), 1);
});
