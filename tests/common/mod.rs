// Shared fixtures for the integration tests.

use std::path::{Path, PathBuf};

pub const OPCODES_JSON: &str = r#"{
    "unprefixed": {
        "00": { "mnemonic": "NOP", "bytes": 1, "cycles": [4], "operands": [], "immediate": true },
        "20": { "mnemonic": "JR_NZ", "bytes": 2, "cycles": [8, 12], "operands": [], "immediate": true }
    },
    "cbprefixed": {
        "00": { "mnemonic": "RLC_B", "bytes": 2, "cycles": [8], "operands": [], "immediate": true }
    }
}"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
