//! File appender implementation

use crate::core::{Appender, LoggerError, Result, UserContext};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
    locked: bool,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path,
            locked: false,
        })
    }

    /// Open `path` and hold an exclusive advisory lock on it
    ///
    /// Fails with [`LoggerError::FileLockError`] if another process already
    /// holds the lock.
    ///
    /// ```no_run
    /// use slot_logger::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new_locked("/var/log/app.log").unwrap();
    /// ```
    pub fn new_locked(path: impl Into<PathBuf>) -> Result<Self> {
        let mut appender = Self::new(path)?;
        if let Some(ref writer) = appender.writer {
            FileExt::try_lock_exclusive(writer.get_ref())
                .map_err(|_| LoggerError::file_lock(appender.path.display().to_string()))?;
        }
        appender.locked = true;
        Ok(appender)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &str, _context: Option<&UserContext>) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        writer.write_all(entry.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
        if self.locked {
            if let Some(ref writer) = self.writer {
                let _ = FileExt::unlock(writer.get_ref());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_and_flushes() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");

        let mut appender = FileAppender::new(&path).expect("Failed to create appender");
        appender.append("[INFO ] first\n", None).unwrap();
        appender.append("[WARN ] second\n", None).unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(&path).expect("Failed to read log file");
        assert_eq!(content, "[INFO ] first\n[WARN ] second\n");
        assert_eq!(appender.path(), path.as_path());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("existing.log");
        std::fs::write(&path, "old\n").unwrap();

        {
            let mut appender = FileAppender::new(&path).unwrap();
            appender.append("new\n", None).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "old\nnew\n");
    }

    #[test]
    fn test_locked_appender() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("locked.log");

        let appender = FileAppender::new_locked(&path).expect("Failed to lock file");
        assert!(appender.is_locked());
    }
}
