use crate::common::{make_temp_dir, run, stderr_of, stdout_of};

#[test]
fn help_prints_usage_and_succeeds() {
    let dir = make_temp_dir("help");
    let output = run(&dir, &["--help"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Usage: level-extractor"));
}

#[test]
fn unknown_flag_exits_with_usage_error() {
    let dir = make_temp_dir("badflag");
    let output = run(&dir, &["--nope"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Usage error: Unknown argument: --nope"), "{stderr}");
    assert!(stderr.contains("Usage: level-extractor"));
}

#[test]
fn missing_flag_value_exits_with_usage_error() {
    let dir = make_temp_dir("novalue");
    let output = run(&dir, &["--output"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Missing value for --output"));
}

#[test]
fn missing_config_file_fails() {
    let dir = make_temp_dir("nocfg");
    let output = run(&dir, &["--config", "absent.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Configuration file 'absent.json' not found."));
}

#[test]
fn show_config_lists_effective_settings() {
    let dir = make_temp_dir("showcfg");
    let output = run(
        &dir,
        &["--show-config", "--output", "out", "--dimension-policy", "warn"],
    );
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for key in [
        "INPUT_PATH",
        "OUTPUT_DIR",
        "LEVEL_PREFIX",
        "DIMENSION_POLICY",
        "FILE_LOGGING_ENABLED",
        "TOKEN_OVERRIDES",
    ] {
        assert!(stdout.contains(key), "missing {key} in {stdout}");
    }
    let output_row = stdout.lines().find(|l| l.starts_with("OUTPUT_DIR")).unwrap();
    assert!(output_row.contains(" out "));
    let policy_row = stdout
        .lines()
        .find(|l| l.starts_with("DIMENSION_POLICY"))
        .unwrap();
    assert!(policy_row.contains(" warn "));
    assert!(!dir.join("export").exists());
}
