//! Small file abstraction used by the JSON helpers.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Permissions given to files created by [fopen_w]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Readable by everyone (0o644)
    #[default]
    Public,
    /// Readable by the owner only (0o600)
    Secret,
}

impl Visibility {
    pub fn mode(self) -> u32 {
        match self {
            Visibility::Public => 0o644,
            Visibility::Secret => 0o600,
        }
    }
}

/// Open a file for writing, creating or truncating it
pub fn fopen_w<P: AsRef<Path>>(path: P, visibility: Visibility) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);
    #[cfg(unix)]
    options.mode(visibility.mode());
    #[cfg(not(unix))]
    let _ = visibility;
    options.open(path)
}

/// Open an existing file for reading
pub fn fopen_r<P: AsRef<Path>>(path: P) -> std::io::Result<File> {
    OpenOptions::new().read(true).open(path)
}

/// Read the whole file at `path`
pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    fopen_r(path)?.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Replace the contents of the file at `path` with `data`
pub fn write_file<P: AsRef<Path>>(
    path: P,
    data: &[u8],
    visibility: Visibility,
) -> std::io::Result<()> {
    let mut file = fopen_w(path, visibility)?;
    file.write_all(data)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("data.bin");

        write_file(&path, b"first, longer content", Visibility::Public).unwrap();
        write_file(&path, b"second", Visibility::Public).unwrap();
        assert_eq!(read_file(&path).unwrap(), b"second");
    }

    #[test]
    fn test_read_missing_file() {
        let tmp_dir = tempdir().unwrap();
        let err = read_file(tmp_dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_secret_visibility() {
        use std::os::unix::fs::PermissionsExt;

        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("secret");
        write_file(&path, b"s", Visibility::Secret).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
