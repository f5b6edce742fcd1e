use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use miette::Diagnostic;
use thiserror::Error;

/// The stylesheet could not be written.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to write {path}")]
#[diagnostic(code(lacquer::write))]
pub struct WriteError {
    pub path: Utf8PathBuf,
    #[source]
    pub source: io::Error,
}

/// Replace `path` with `contents` so that readers see either the old file or
/// the complete new one.
///
/// The parent directory is created if needed. The bytes go to a temporary
/// file next to `path`, are synced, and the file is then renamed over
/// `path`. On failure the temporary file is removed and `path` is untouched.
pub fn write_atomic(path: impl AsRef<Utf8Path>, contents: impl AsRef<[u8]>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let fail = |source: io::Error| WriteError {
        path: path.to_owned(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    fs_err::create_dir_all(parent).map_err(fail)?;

    let mut temp = tempfile::Builder::new()
        .prefix(".lacquer-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(fail)?;
    temp.write_all(contents.as_ref()).map_err(fail)?;
    temp.as_file().sync_all().map_err(fail)?;
    temp.persist(path).map_err(|err| fail(err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_creates_parent_dirs() {
        let (_guard, dir) = utf8_tempdir();
        let path = dir.join("public/css/theme.css");
        write_atomic(&path, ":root {\n}\n").unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), ":root {\n}\n");
    }

    #[test]
    fn test_replaces_existing_file() {
        let (_guard, dir) = utf8_tempdir();
        let path = dir.join("theme.css");
        fs_err::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs_err::read_dir(&dir).unwrap().count(), 1);
    }

    #[test]
    fn test_failure_leaves_no_temp_file() {
        let (_guard, dir) = utf8_tempdir();
        let path = dir.join("taken");
        fs_err::create_dir(&path).unwrap();

        let err = write_atomic(&path, "body").unwrap_err();
        assert_eq!(err.path, path);
        // Only the directory that blocked the rename remains
        assert_eq!(fs_err::read_dir(&dir).unwrap().count(), 1);
    }
}
