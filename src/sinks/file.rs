//! File sink implementation

use crate::core::{LogError, Result, Sink};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

enum Backing {
    /// File opened by this sink; finalize syncs and closes it.
    Owned(File),
    /// Handle adopted from the caller; finalize flushes but never closes.
    Adopted(Box<dyn Write + Send>),
}

/// A sink backed by an open file handle.
///
/// Every `write` delivers the record, appends one newline, and flushes
/// immediately. That trades throughput for the guarantee that a crash right
/// after a write loses nothing.
pub struct FileSink {
    backing: Option<Backing>,
    path: String,
}

impl FileSink {
    /// Open (create or truncate) `path` for writing.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let display = path.display().to_string();
        let file = File::create(&path)
            .map_err(|e| LogError::io("opening", display.clone(), e))?;
        Ok(Self {
            backing: Some(Backing::Owned(file)),
            path: display,
        })
    }

    /// Adopt an already-open handle without taking close-ownership.
    ///
    /// `finalize` flushes the handle but leaves closing to the caller.
    pub fn adopt<W: Write + Send + 'static>(handle: W) -> Self {
        Self {
            backing: Some(Backing::Adopted(Box::new(handle))),
            path: "<adopted>".to_string(),
        }
    }

    /// A sink writing to the process standard error stream.
    pub fn stderr() -> Self {
        Self::adopt(io::stderr())
    }

    /// Path this sink was opened with, `"<adopted>"` for adopted handles.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        let Some(backing) = self.backing.as_mut() else {
            debug_assert!(false, "file sink '{}' written after finalize", self.path);
            return Err(LogError::SinkFinalized(self.path.clone()));
        };
        let writer: &mut dyn Write = match backing {
            Backing::Owned(file) => file,
            Backing::Adopted(handle) => handle.as_mut(),
        };

        writer
            .write_all(record)
            .map_err(|e| LogError::io("writing", self.path.as_str(), e))?;
        writer
            .write_all(b"\n")
            .map_err(|e| LogError::io("writing", self.path.as_str(), e))?;
        writer
            .flush()
            .map_err(|e| LogError::io("flushing", self.path.as_str(), e))?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        match self.backing.take() {
            Some(Backing::Owned(file)) => {
                // Surface close-time failures; dropping alone would swallow them.
                file.sync_all()
                    .map_err(|e| LogError::io("closing", self.path.as_str(), e))?;
                Ok(())
            }
            Some(Backing::Adopted(mut handle)) => handle
                .flush()
                .map_err(|e| LogError::io("flushing", self.path.as_str(), e)),
            None => {
                debug_assert!(false, "file sink '{}' finalized twice", self.path);
                Err(LogError::SinkFinalized(self.path.clone()))
            }
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Best effort for sinks dropped without finalize.
        if let Some(backing) = self.backing.as_mut() {
            let _ = match backing {
                Backing::Owned(file) => file.flush(),
                Backing::Adopted(handle) => handle.flush(),
            };
        }
    }
}
