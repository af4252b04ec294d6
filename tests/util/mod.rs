#![allow(dead_code, unused_macros)]
use std::path::PathBuf;

use dd_vectors::generator::GeneratorConfig;

pub const SEED: u64 = 64;

/// A fresh path under the system temp dir, unique to this process and `name`.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dd_vectors_{}_{}", std::process::id(), name))
}

pub fn seeded(sample_count: usize, output: &str) -> GeneratorConfig {
    GeneratorConfig {
        sample_count,
        output_path: temp_path(output),
        seed: Some(SEED),
        ..Default::default()
    }
}

macro_rules! assert_malformed {
    ($result:expr) => {
        match $result {
            Err(e) => assert!(e.is_malformed(), "unexpected error: {}", e),
            Ok(_) => panic!("expected malformed input"),
        }
    };
}
