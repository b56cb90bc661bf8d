use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_hey");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("hey ").unwrap_or("");
    assert_eq!(
        version,
        env!("CARGO_PKG_VERSION"),
        "Binary version should match CARGO_PKG_VERSION"
    );
}

#[test]
fn test_unknown_command_fails() {
    let binary_path = env!("CARGO_BIN_EXE_hey");

    let output = Command::new(binary_path)
        .arg("mirror")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown command: mirror"));
}
