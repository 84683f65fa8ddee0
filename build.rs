//! Build script for the info service.
//!
//! Records the compiler version so the `system` report can name the toolchain
//! the binary was built with.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|text| parse_version(&text))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=DEVOPS_INFO_RUSTC_VERSION={}", version);
}

/// Extract `1.82.0` from `rustc 1.82.0 (f6e511eec 2024-10-15)`.
fn parse_version(text: &str) -> Option<String> {
    text.split_whitespace().nth(1).map(str::to_string)
}
