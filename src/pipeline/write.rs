//! Output stage: make sure the destination directory exists and persist the
//! rendered HTML.
//!
//! Atomic mode writes to a [`tempfile::NamedTempFile`] created next to the
//! target and renames it into place, so an interrupted run never leaves a
//! truncated HTML file. The temp file is deleted on every error path when
//! the handle is dropped.
//!
//! The renamed file must end up with the same mode a plain `fs::write` would
//! give it: umask-default for a new file, the old mode for an overwrite.

use crate::error::Md2HtmlError;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Create the parent directory of `path` (and any missing ancestors).
///
/// A path without a directory component (`page.html`) needs nothing; an
/// existing directory is left untouched.
pub fn ensure_parent_dir(path: &Path) -> Result<(), Md2HtmlError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            if !parent.is_dir() {
                debug!("Creating output directory {}", parent.display());
            }
            std::fs::create_dir_all(parent).map_err(|e| Md2HtmlError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}

/// Write `html` to `path` in full.
pub fn write_html(path: &Path, html: &str, atomic: bool) -> Result<(), Md2HtmlError> {
    let fail = |source: std::io::Error| Md2HtmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if !atomic {
        std::fs::write(path, html).map_err(fail)?;
        debug!("Wrote {} bytes to {}", html.len(), path.display());
        return Ok(());
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".md2html");
    // tempfile defaults to 0600; 0666 here is masked by the umask like open(2).
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(fail)?;
    tmp.write_all(html.as_bytes()).map_err(fail)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(fail)?;
    }
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    debug!("Atomically wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
