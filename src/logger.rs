//! Logging setup: `simple_logger` on stderr, optionally mirrored into an
//! append-only log file.

use crate::error::{CdsError, CdsResult};

use log::{Level, Log, Metadata, Record};
use simple_logger::SimpleLogger;

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

/// Forwards every record to stderr and, when configured, to a log file.
pub struct TeeLogger {
    level: Level,
    stderr: SimpleLogger,
    file: Option<Mutex<File>>,
}

impl TeeLogger {
    pub fn new(level: Level, log_file: Option<&Path>) -> CdsResult<Self> {
        let file = match log_file {
            Some(path) => Some(Mutex::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| CdsError::io(path, e))?,
            )),
            None => None,
        };

        Ok(TeeLogger {
            level,
            stderr: SimpleLogger::new().with_level(level.to_level_filter()),
            file,
        })
    }
}

impl Log for TeeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        self.stderr.log(record);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // write errors on the mirror are ignored
                let _ = writeln!(file, "{:<5} [{}] {}", record.level(), record.target(), record.args());
            }
        }
    }

    fn flush(&self) {
        self.stderr.flush();
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Installs the global logger. Can only succeed once per process.
pub fn init_logging(level: Level, log_file: Option<&Path>) -> CdsResult<()> {
    let logger = TeeLogger::new(level, log_file)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level.to_level_filter()))
        .map_err(|e| CdsError::InvalidArgument(format!("cannot install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_receives_lines() {
        let temp = TempDir::new().expect("failed to create temporary directory");
        let path = temp.path().join("run.log");
        let logger = TeeLogger::new(Level::Info, Some(&path)).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("cdsample")
                .args(format_args!("Extracted {} records", 3))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("cdsample")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Extracted 3 records"));
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn test_log_file_is_appended() {
        let temp = TempDir::new().expect("failed to create temporary directory");
        let path = temp.path().join("run.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let logger = TeeLogger::new(Level::Warn, Some(&path)).unwrap();
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("boom"))
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("previous run\n"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let result = TeeLogger::new(Level::Info, Some(Path::new("/nonexistent/dir/run.log")));

        assert!(matches!(result, Err(CdsError::Io { .. })));
    }
}
