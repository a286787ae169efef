use std::fs;

use level_extractor::core::types::{DimensionPolicy, LevelPrefix};
use level_extractor::dictionary::TokenDictionary;
use level_extractor::extract::Extractor;

use crate::common::{LEVELS_DATA, make_temp_dir, run, stderr_of, stdout_of, write_levels_data};

#[test]
fn default_run_exports_every_level_into_export_dir() {
    let dir = make_temp_dir("export");
    write_levels_data(&dir);

    let output = run(&dir, &[]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    assert_eq!(
        fs::read_to_string(dir.join("export/level1.txt")).unwrap(),
        "EMPTY, BABA, WALL\nROCK, FLAG, EMPTY"
    );
    assert_eq!(
        fs::read_to_string(dir.join("export/level22.txt")).unwrap(),
        "TEXT_BABA, TEXT_IS, TEXT_YOU, EMPTY\n\
         TEXT_FLAG, TEXT_IS, TEXT_WIN, EMPTY\n\
         TEXT_ROCK, TEXT_IS, TEXT_PUSH, EMPTY"
    );

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Extracting level1..."), "{stdout}");
    assert!(stdout.contains("Extracting level22..."), "{stdout}");
    assert!(stdout.contains("Export complete: 2 level(s) written to 'export'."));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("level22 (line 11): 1 unknown token(s) replaced with EMPTY: MYSTERY"));
}

#[test]
fn second_run_produces_identical_files() {
    let dir = make_temp_dir("idempotent");
    write_levels_data(&dir);

    assert!(run(&dir, &[]).status.success());
    let first = fs::read(dir.join("export/level22.txt")).unwrap();
    assert!(run(&dir, &[]).status.success());
    let second = fs::read(dir.join("export/level22.txt")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_levels_is_a_successful_no_op() {
    let dir = make_temp_dir("nolevels");
    fs::write(dir.join("levels_data.cpp"), "int x = 0;\n").unwrap();

    let output = run(&dir, &[]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("No levels found in levels_data.cpp."));
    assert!(!dir.join("export").exists());
}

#[test]
fn missing_input_fails_with_exit_one() {
    let dir = make_temp_dir("noinput");
    let output = run(&dir, &["--input", "absent.cpp"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Cannot read input file 'absent.cpp'"));
}

#[test]
fn strict_policy_aborts_on_ragged_level() {
    let dir = make_temp_dir("strict");
    fs::write(
        dir.join("levels_data.cpp"),
        "const uint8_t level5[] = {\n  WALL, WALL, WALL,\n  WALL, WALL,\n};\n",
    )
    .unwrap();

    let output = run(&dir, &["--dimension-policy", "strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Level 'level5' holds 5 token(s)"));
    assert!(!dir.join("export/level5.txt").exists());
}

#[test]
fn config_file_and_flags_redirect_output() {
    let dir = make_temp_dir("configured");
    write_levels_data(&dir);
    fs::write(
        dir.join("extract.json"),
        r#"{
  "output_dir": { "value": "editor/levels", "description": "dest" },
  "token_overrides": { "value": { "MYSTERY": "KEY" }, "description": "extra" }
}"#,
    )
    .unwrap();

    let output = run(&dir, &["--config", "extract.json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let level22 = fs::read_to_string(dir.join("editor/levels/level22.txt")).unwrap();
    assert!(level22.ends_with("TEXT_PUSH, KEY"));
    assert!(!stderr_of(&output).contains("unknown token"));
}

#[test]
fn logs_flag_writes_session_file() {
    let dir = make_temp_dir("logs");
    write_levels_data(&dir);

    let output = run(&dir, &["--logs", "logs"]);
    assert!(output.status.success());
    let entries: Vec<_> = fs::read_dir(dir.join("logs")).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().unwrap().path();
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("INFO  Extracting level1..."));
    assert!(contents.contains("WARN"));
}

#[test]
fn library_extractor_matches_binary_output() {
    let dir = make_temp_dir("library");
    write_levels_data(&dir);
    assert!(run(&dir, &[]).status.success());

    let prefix = LevelPrefix::default();
    let extractor = Extractor::new(
        TokenDictionary::builtin(),
        &prefix,
        DimensionPolicy::Permissive,
    );
    for record in extractor.extract_levels(LEVELS_DATA) {
        let written = fs::read_to_string(dir.join(format!("export/{}.txt", record.name))).unwrap();
        assert_eq!(written, record.render());
    }
}
