use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{ReportError, Result};

pub trait ReportWrite {
    ///
    /// Render the complete report text, trailing newline included.
    ///
    fn render(&self) -> String;

    ///
    /// Write the report to disk, replacing any previous report at `path`.
    ///
    /// # Arguments
    /// - path: the final path of the report. Its directory must exist.
    fn write_report<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        write_atomically(path.as_ref(), &self.render())
    }
}

///
/// Write `contents` to `path` so that readers either see the previous file or the complete
/// new one, never a partial write.
///
/// The directory is not created here: a missing directory is reported as
/// [ReportError::OutputDirectoryMissing].
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(ReportError::OutputDirectoryMissing(parent.to_path_buf()));
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;

    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| ReportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
