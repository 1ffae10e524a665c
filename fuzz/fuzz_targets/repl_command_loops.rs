//! Fuzz harness for the command-loop interpreters
//!
//! Arbitrary bytes are fed to every exercise driven by named commands.
//! Errors are fine; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_config::SdaConfig;
use sda_repl::Exercise;

const COMMAND_LOOPS: [Exercise; 5] = [
    Exercise::List,
    Exercise::Dlist,
    Exercise::Friends,
    Exercise::MatrixGraph,
    Exercise::ListGraph,
];

fuzz_target!(|data: &[u8]| {
    let config = SdaConfig::default();
    for exercise in COMMAND_LOOPS {
        let mut out = Vec::new();
        let _ = exercise.run(data, &mut out, &config);
    }
});
