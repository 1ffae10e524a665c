//! Fuzz harness for the line-based trie interpreter

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_config::SdaConfig;
use sda_repl::Exercise;

fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let _ = Exercise::Trie.run(data, &mut out, &SdaConfig::default());
});
