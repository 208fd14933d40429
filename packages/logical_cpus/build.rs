//! Warns at build time when the target has no logical processor count query, because the
//! library then always reports a single processor.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Build scripts run on the host, so the target is only known through Cargo's CFG variables.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let is_unix = env::var_os("CARGO_CFG_UNIX").is_some();
    let is_windows = env::var_os("CARGO_CFG_WINDOWS").is_some();

    if !is_unix && !is_windows {
        println!(
            "cargo:warning=logical_cpus: unsupported platform '{target_os}', logical CPU count will always be 1"
        );
    }
}
