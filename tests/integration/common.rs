use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_level-extractor"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "level-extractor-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub const LEVELS_DATA: &str = "\
#include \"levels.h\"
#include \"defines.h\"

namespace baba {

const uint8_t level1[META_FULL_SIZE] = {
    EMPTY, BABA, WALL,
    ROCK, FLAG, EMPTY,
};

const uint8_t level22[] = {
    W_BABA, W_IS, W_YOU, EMPTY,
    W_FLAG, W_IS, W_WIN, EMPTY,
    W_ROCK, W_IS, W_PUSH, MYSTERY,
};

} // namespace baba
";

pub fn write_levels_data(dir: &Path) -> PathBuf {
    let path = dir.join("levels_data.cpp");
    fs::write(&path, LEVELS_DATA).unwrap();
    path
}

/// Runs the binary inside `dir` with the given arguments.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
