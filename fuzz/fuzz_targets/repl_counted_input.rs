//! Fuzz harness for the exercises that read a count and then that many values

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_config::SdaConfig;
use sda_repl::Exercise;

const COUNTED: [Exercise; 8] = [
    Exercise::Parity,
    Exercise::StackCheck,
    Exercise::QueueCheck,
    Exercise::Dedupe,
    Exercise::Bipartite,
    Exercise::Components,
    Exercise::TreeHeight,
    Exercise::PathSum,
];

fuzz_target!(|data: &[u8]| {
    let config = SdaConfig::default();
    for exercise in COUNTED {
        let mut out = Vec::new();
        let _ = exercise.run(data, &mut out, &config);
    }
});
