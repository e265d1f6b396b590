//! Platform resolution for native library storage.
//!
//! Maps the running operating system and CPU architecture to the
//! subdirectory and file name of the SQLite driver's native library.
//! Pure mapping, no side effects.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported platform families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    Mac,
    /// No native library is published for BSDs
    Bsd,
    Linux,
}

impl Platform {
    /// Classify an OS name string, case-insensitively.
    ///
    /// Anything that is not Windows, Mac, or a BSD is treated as Linux;
    /// that default is deliberate and load-bearing for unknown platforms.
    pub fn from_os_name(os_name: &str) -> Self {
        let name = os_name.to_lowercase();
        if name.contains("windows") {
            Platform::Windows
        } else if name.contains("mac") {
            Platform::Mac
        } else if name.contains("bsd") {
            Platform::Bsd
        } else {
            Platform::Linux
        }
    }

    /// Platform of the running process
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// File name of the native library, `None` when unsupported
    pub fn native_file_name(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("sqlitejdbc.dll"),
            Platform::Mac => Some("libsqlitejdbc.jnilib"),
            Platform::Bsd => None,
            Platform::Linux => Some("libsqlitejdbc.so"),
        }
    }

    fn folder_name(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("Windows"),
            Platform::Mac => Some("Mac"),
            Platform::Bsd => None,
            Platform::Linux => Some("Linux"),
        }
    }
}

/// Resolves native library locations under a library root
#[derive(Debug, Clone)]
pub struct PlatformResolver {
    lib_root: PathBuf,
    platform: Platform,
    arch: String,
}

impl PlatformResolver {
    pub fn new(lib_root: impl Into<PathBuf>, platform: Platform, arch: impl Into<String>) -> Self {
        Self {
            lib_root: lib_root.into(),
            platform,
            arch: arch.into().to_lowercase(),
        }
    }

    /// Resolver for the running process
    pub fn current(lib_root: impl Into<PathBuf>) -> Self {
        Self::new(lib_root, Platform::current(), std::env::consts::ARCH)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// `<lib-root>/native/<OS>/<arch>`, `None` when unsupported
    pub fn native_folder(&self) -> Option<PathBuf> {
        let folder = self.platform.folder_name()?;
        Some(self.lib_root.join("native").join(folder).join(&self.arch))
    }

    /// File name of the native library, `None` when unsupported
    pub fn native_file_name(&self) -> Option<&'static str> {
        self.platform.native_file_name()
    }

    /// Full path to the native library, `None` if either part is absent
    pub fn native_lib_path(&self) -> Option<PathBuf> {
        let folder = self.native_folder()?;
        let file_name = self.native_file_name()?;
        Some(folder.join(file_name))
    }

    pub fn lib_root(&self) -> &Path {
        &self.lib_root
    }
}
