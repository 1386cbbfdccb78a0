//! Capability-based file access for catalog and configuration inputs.
//!
//! Paths are UTF-8 (`camino`) and every open goes through `cap-std` with
//! ambient authority, so callers never touch `std::fs` directly.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading.
///
/// # Errors
/// Propagates the I/O error from `cap-std`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 file into a string.
///
/// # Errors
/// Returns an I/O error when the parent directory cannot be opened, the file
/// is missing, or its contents are not UTF-8.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.read_to_string(name.as_str())
}

/// Open the parent directory of `path` and return it with the file name.
///
/// A path without a parent resolves against the current directory.
///
/// # Errors
/// Returns an I/O error when `path` has no file name or the directory cannot
/// be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Returns an I/O error (including `NotFound`) when the path cannot be
/// inspected.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path")
    }

    #[rstest]
    fn reads_existing_file(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "notes.txt");
        std::fs::write(path.as_std_path(), "hello").expect("write fixture");
        assert!(file_is_file(&path).expect("inspect file"));
        assert_eq!(read_to_string(&path).expect("read file"), "hello");
    }

    #[rstest]
    fn directories_are_not_files(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "nested");
        std::fs::create_dir(path.as_std_path()).expect("create dir");
        assert!(!file_is_file(&path).expect("inspect dir"));
    }

    #[rstest]
    fn missing_file_reports_not_found(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "absent.csv");
        let err = file_is_file(&path).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
