use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::{CommentsError, Result};
use super::record::{CommentRecord, HEADERS};

/// Lets spreadsheet tools detect UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `records` as CSV to `path`, replacing any existing file.
///
/// Rows go to a temporary file next to `path` that is renamed into place
/// once complete, so a failed write leaves no partial file behind.
pub fn save_to_csv(records: &[CommentRecord], path: &Path) -> Result<()> {
    let to_error = |source: io::Error| CommentsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(to_error)?;
    write_csv(tmp.as_file_mut(), records).map_err(to_error)?;
    set_readable(&tmp).map_err(to_error)?;
    tmp.persist(path).map_err(|e| to_error(e.error))?;

    debug!(path = %path.display(), rows = records.len(), "csv written");
    Ok(())
}

/// BOM, header row, then one row per record in the given order.
pub fn write_csv<W: Write>(mut writer: W, records: &[CommentRecord]) -> io::Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADERS)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()
}

// NamedTempFile is created 0600; give the export regular file permissions.
#[cfg(unix)]
fn set_readable(file: &NamedTempFile) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.as_file()
        .set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_file: &NamedTempFile) -> io::Result<()> {
    Ok(())
}
