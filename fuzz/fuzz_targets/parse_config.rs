//! Fuzz harness for configuration files (sda.yaml / sda.json)
//!
//! Parsing and validation must reject malformed input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sda_config::SdaConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = serde_yaml::from_str::<SdaConfig>(input) {
        let _ = config.validate();
    }
    if let Ok(config) = serde_json::from_str::<SdaConfig>(input) {
        let _ = config.validate();
    }
});
