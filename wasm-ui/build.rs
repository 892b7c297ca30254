//! Build script to capture build information.
//!
//! Sets environment variables at compile time:
//! - BUILD_HOST: hostname of the build machine
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: ISO 8601 timestamp
//!
//! `PLAYGROUND_API_BASE` is read by the crate itself via `option_env!`.

use std::process::Command;

fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let hostname = command_output("hostname", &["-s"]);
    let commit = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let timestamp = command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]);

    println!("cargo:rustc-env=BUILD_HOST={}", hostname);
    println!("cargo:rustc-env=BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp);

    println!("cargo:rerun-if-env-changed=PLAYGROUND_API_BASE");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
