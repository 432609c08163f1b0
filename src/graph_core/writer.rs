//! Append-only writer for the average degree stream

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one fixed-point average per accepted record to the target file
///
/// The file is opened in append mode so successive runs extend it rather
/// than truncating. Each line is flushed as it is written; `Drop` flushes
/// once more for whatever the buffer still holds.
pub struct AverageDegreeWriter {
    file: BufWriter<File>,
    path: PathBuf,
}

impl AverageDegreeWriter {
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        log::info!("📝 Writing average degrees to: {}", path.display());

        Ok(Self {
            file: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Append one average as a two-decimal line
    pub fn write_average(&mut self, average: f64) -> std::io::Result<()> {
        writeln!(self.file, "{:.2}", average)?;
        self.file.flush()
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for AverageDegreeWriter {
    fn drop(&mut self) {
        let _ = self.file.flush();
    }
}
