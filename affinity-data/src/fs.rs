//! Capability-based file helpers for dataset files.

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing dataset file for reading.
pub fn open_dataset_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a dataset file, creating missing parent directories.
pub fn create_dataset_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("dataset path should include a file name"))?;
    let (root, relative) = split_root(parent_or_current(path))?;
    let dir = if relative.as_str().is_empty() {
        root
    } else {
        root.create_dir_all(&relative)?;
        root.open_dir(&relative)?
    };
    dir.create(file_name)
}

/// Whether `path` names an existing regular file.
///
/// Missing files and missing parent directories both report `false`.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let Some(name) = path.file_name() else {
        return Ok(false);
    };
    let metadata = fs_utf8::Dir::open_ambient_dir(parent_or_current(path), ambient_authority())
        .and_then(|dir| dir.metadata(name));
    match metadata {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

fn parent_or_current(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Open the ambient root of `dir` and return the remaining relative part.
///
/// cap-std refuses absolute paths inside a `Dir`, so absolute locations are
/// split at the filesystem root (or Windows prefix) first.
fn split_root(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let root: Utf8PathBuf = match dir.as_std_path().components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR.to_string())
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if root.as_str() == "." {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&root)
            .map_err(|_| io::Error::other("failed to strip root from dataset path"))?
            .to_path_buf()
    };
    let handle = fs_utf8::Dir::open_ambient_dir(&root, ambient_authority())?;
    Ok((handle, relative))
}
