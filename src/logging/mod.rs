#[cfg(test)]
mod tests;

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use once_cell::unsync::OnceCell;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

trait LogSink {
    fn log(&self, level: LogLevel, line: &str);
}

struct StdoutSink;
impl LogSink for StdoutSink {
    fn log(&self, level: LogLevel, line: &str) {
        if level == LogLevel::Info {
            println!("{line}");
        }
    }
}

struct StderrSink;
impl LogSink for StderrSink {
    fn log(&self, level: LogLevel, line: &str) {
        if matches!(level, LogLevel::Warn | LogLevel::Error) {
            eprintln!("{line}");
        }
    }
}

struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    fn open(dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("extract-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { file, path })
    }
}

impl LogSink for FileSink {
    fn log(&self, level: LogLevel, line: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = &self.file;
        let _ = writeln!(file, "[{timestamp}] {level:<5} {line}");
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

/// Console logger with an optional session file.
///
/// The session file is only opened on the first file-targeted message, so a
/// run that never logs to file leaves no trace in the logs directory. If the
/// file cannot be opened the logger warns once and keeps logging to console.
pub struct Logger {
    console_sinks: Vec<Box<dyn LogSink>>,
    file_sink: OnceCell<Option<FileSink>>,
    file_enabled: bool,
    log_dir: PathBuf,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            console_sinks: vec![Box::new(StdoutSink), Box::new(StderrSink)],
            file_sink: OnceCell::new(),
            file_enabled: false,
            log_dir: PathBuf::from("logs"),
        }
    }

    fn file_sink(&self) -> Option<&FileSink> {
        self.file_sink
            .get_or_init(|| match FileSink::open(&self.log_dir) {
                Ok(sink) => Some(sink),
                Err(err) => {
                    eprintln!(
                        "WARN: File logging unavailable; continuing without a log file. ({err})"
                    );
                    None
                }
            })
            .as_ref()
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            for sink in &self.console_sinks {
                sink.log(level, message);
            }
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly) && self.file_enabled
        {
            if let Some(sink) = self.file_sink() {
                sink.log(level, message);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&mut self, enabled: bool) {
        self.file_enabled = enabled;
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Has no effect once the session file exists.
    pub fn set_log_dir(&mut self, dir: impl AsRef<Path>) {
        if self.file_sink.get().is_none() {
            self.log_dir = dir.as_ref().to_path_buf();
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.file_sink
            .get()
            .and_then(|sink| sink.as_ref())
            .map(|sink| sink.path.as_path())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("file_enabled", &self.file_enabled)
            .field("log_dir", &self.log_dir)
            .field("log_path", &self.log_path())
            .finish()
    }
}
