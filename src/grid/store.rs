//! Reading and atomically replacing the grid file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

pub(crate) fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `contents` without ever truncating it in place.
///
/// The new content goes to a temporary file in the same directory, which
/// is then renamed over the destination. A failure at any point leaves
/// the previous grid intact.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Keep whatever permissions the viewer was given on the old file
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "grid written");
    Ok(())
}
