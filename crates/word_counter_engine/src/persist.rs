use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use counter_logging::counter_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{0} exists and is not a directory")]
    NotADirectory(PathBuf),
    #[error("cannot write into {path}: {source}")]
    Unwritable { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Directory that receives rendered reports.
///
/// Files are staged next to their destination and renamed into place, so an
/// existing report is either left untouched or replaced whole.
#[derive(Debug, Clone)]
pub struct ReportDir {
    path: PathBuf,
}

impl ReportDir {
    /// Creates `path` when missing and checks that files can be created in it.
    pub fn prepare(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();
        if path.exists() && !path.is_dir() {
            return Err(PersistError::NotADirectory(path));
        }
        let unwritable = |source: io::Error| PersistError::Unwritable {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&path).map_err(unwritable)?;
        NamedTempFile::new_in(&path).map_err(unwritable)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        self.write_with(filename, |out| out.write_all(content.as_bytes()))
    }

    /// Streams a report into `filename` through `fill`.
    ///
    /// If `fill` fails, or the final rename does, the staged file is discarded
    /// and any previous `filename` keeps its content.
    pub fn write_with<F>(&self, filename: &str, fill: F) -> Result<PathBuf, PersistError>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let target = self.path.join(filename);
        let failed = |source: io::Error| PersistError::Write {
            path: target.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.path).map_err(failed)?;
        {
            let mut out = BufWriter::new(staged.as_file_mut());
            fill(&mut out).map_err(failed)?;
            out.flush().map_err(failed)?;
        }
        staged.as_file().sync_all().map_err(failed)?;
        staged.persist(&target).map_err(|e| failed(e.error))?;

        counter_debug!("Replaced {}", target.display());
        Ok(target)
    }
}
