//! Extension trait for file-system paths, plus lookup of the cloud-synced
//! documents directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Environment variable naming the cloud-synced container directory.
///
/// Takes precedence over platform discovery in [try_cloud_documents_dir].
pub const CLOUD_CONTAINER_ENV: &str = "EXTKIT_CLOUD_CONTAINER";

/// Helpers for working with file-system paths
pub trait PathExt {
    /// The path with the extension of its last component removed.
    ///
    /// Only the last extension goes, and parent directories are never touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use extkit_util::path::PathExt;
    ///
    /// assert_eq!(Path::new("notes.d/a.tar.gz").without_extension(), Path::new("notes.d/a.tar"));
    /// assert_eq!(Path::new("notes.d/readme").without_extension(), Path::new("notes.d/readme"));
    /// ```
    fn without_extension(&self) -> PathBuf;

    /// The path with the extension of its last component replaced by (or extended with) `ext`.
    ///
    /// The new name is always `<base name>.<ext>`, so an empty `ext` leaves a
    /// trailing dot instead of removing the extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use extkit_util::path::PathExt;
    ///
    /// assert_eq!(Path::new("out/a.txt").replacing_extension("md"), Path::new("out/a.md"));
    /// assert_eq!(Path::new("out/a.txt").replacing_extension(""), Path::new("out/a."));
    /// ```
    fn replacing_extension(&self, ext: &str) -> PathBuf;

    /// Last path component without its extension; empty if there is no file name
    fn file_base_name(&self) -> String;

    /// Mark the file as excluded from (or, with `false`, included in) automatic backups.
    ///
    /// Best effort: failures are logged at debug level and otherwise ignored.
    /// Use [Self::try_set_excluded_from_backup] to observe them.
    fn set_excluded_from_backup(&self, excluded: bool);

    /// Like [Self::set_excluded_from_backup], but reports OS errors.
    ///
    /// On macOS this sets the Time Machine exclusion attribute, on Linux the
    /// freedesktop `user.xdg.robots.backup` attribute. On other platforms it
    /// does nothing.
    fn try_set_excluded_from_backup(&self, excluded: bool) -> std::io::Result<()>;
}

impl PathExt for Path {
    fn without_extension(&self) -> PathBuf {
        self.with_extension("")
    }

    fn replacing_extension(&self, ext: &str) -> PathBuf {
        let Some(stem) = self.file_stem() else {
            return self.to_path_buf();
        };
        let mut name = OsString::from(stem);
        name.push(".");
        name.push(ext);
        self.with_file_name(name)
    }

    fn file_base_name(&self) -> String {
        self.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn set_excluded_from_backup(&self, excluded: bool) {
        if let Err(e) = self.try_set_excluded_from_backup(excluded) {
            debug!("Could not set backup exclusion on {:?}: {e}", self);
        }
    }

    fn try_set_excluded_from_backup(&self, excluded: bool) -> std::io::Result<()> {
        backup_attr::set_excluded(self, excluded)
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
mod backup_attr {
    use std::ffi::CString;
    use std::io;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    #[cfg(target_os = "linux")]
    const ATTR_NAME: &str = "user.xdg.robots.backup";
    #[cfg(target_os = "linux")]
    const ATTR_VALUE: &[u8] = b"false";
    #[cfg(target_os = "linux")]
    const ENOATTR: i32 = libc::ENODATA;

    #[cfg(target_os = "macos")]
    const ATTR_NAME: &str = "com.apple.metadata:com_apple_backup_excludeItem";
    /// Binary plist holding the string `com.apple.backupd`
    #[cfg(target_os = "macos")]
    const ATTR_VALUE: &[u8] = &[
        0x62, 0x70, 0x6c, 0x69, 0x73, 0x74, 0x30, 0x30, 0x5f, 0x10, 0x11, 0x63, 0x6f, 0x6d, 0x2e,
        0x61, 0x70, 0x70, 0x6c, 0x65, 0x2e, 0x62, 0x61, 0x63, 0x6b, 0x75, 0x70, 0x64, 0x08, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x1c,
    ];
    #[cfg(target_os = "macos")]
    const ENOATTR: i32 = libc::ENOATTR;

    fn c_string(bytes: &[u8]) -> io::Result<CString> {
        CString::new(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    #[cfg(target_os = "linux")]
    unsafe fn set_attr(path: &CString, name: &CString) -> libc::c_int {
        libc::setxattr(
            path.as_ptr(),
            name.as_ptr(),
            ATTR_VALUE.as_ptr().cast(),
            ATTR_VALUE.len(),
            0,
        )
    }

    #[cfg(target_os = "linux")]
    unsafe fn remove_attr(path: &CString, name: &CString) -> libc::c_int {
        libc::removexattr(path.as_ptr(), name.as_ptr())
    }

    #[cfg(target_os = "macos")]
    unsafe fn set_attr(path: &CString, name: &CString) -> libc::c_int {
        libc::setxattr(
            path.as_ptr(),
            name.as_ptr(),
            ATTR_VALUE.as_ptr().cast(),
            ATTR_VALUE.len(),
            0,
            0,
        )
    }

    #[cfg(target_os = "macos")]
    unsafe fn remove_attr(path: &CString, name: &CString) -> libc::c_int {
        libc::removexattr(path.as_ptr(), name.as_ptr(), 0)
    }

    pub fn set_excluded(path: &Path, excluded: bool) -> io::Result<()> {
        let c_path = c_string(path.as_os_str().as_bytes())?;
        let c_name = c_string(ATTR_NAME.as_bytes())?;

        // SAFETY: both pointers come from live CStrings and the value slice is static
        let ret = unsafe {
            match excluded {
                true => set_attr(&c_path, &c_name),
                false => remove_attr(&c_path, &c_name),
            }
        };
        if ret == 0 {
            return Ok(());
        }

        let err = io::Error::last_os_error();
        match err.raw_os_error() {
            // Including a file that was never excluded
            Some(code) if !excluded && code == ENOATTR => Ok(()),
            _ => Err(err),
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod backup_attr {
    use std::path::Path;

    pub fn set_excluded(_path: &Path, _excluded: bool) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn platform_cloud_container() -> Option<PathBuf> {
    let dir = home::home_dir()?.join("Library/Mobile Documents/com~apple~CloudDocs");
    dir.is_dir().then_some(dir)
}

#[cfg(not(target_os = "macos"))]
fn platform_cloud_container() -> Option<PathBuf> {
    None
}

/// The `Documents` folder inside the cloud-synced container.
///
/// The container is taken from [CLOUD_CONTAINER_ENV] if set. Otherwise, on
/// macOS, iCloud Drive is used when it is enabled for the current user.
///
/// # Errors
///
/// [Error::NoCloudContainer] if neither source provides a container.
pub fn try_cloud_documents_dir() -> Result<PathBuf> {
    let container = match std::env::var_os(CLOUD_CONTAINER_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => platform_cloud_container().ok_or(Error::NoCloudContainer(CLOUD_CONTAINER_ENV))?,
    };
    Ok(container.join("Documents"))
}

/// The `Documents` folder inside the cloud-synced container.
///
/// # Panics
///
/// Panics if no container is configured, see [try_cloud_documents_dir].
pub fn cloud_documents_dir() -> PathBuf {
    match try_cloud_documents_dir() {
        Ok(dir) => dir,
        Err(e) => panic!("{e}"),
    }
}
