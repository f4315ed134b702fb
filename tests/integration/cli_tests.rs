//! Integration tests for the command-line binary

use std::process::Command;

#[test]
fn test_missing_seed_exits_successfully() {
    let output = Command::new(env!("CARGO_BIN_EXE_asset-mapper"))
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No URL specified\n");
}

#[test]
fn test_invalid_seed_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_asset-mapper"))
        .args(["--quiet", "http://exa mple.com"])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
