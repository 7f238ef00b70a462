//! Data directory resolution.
//!
//! [`DataPaths`] is resolved once by the driver and handed to whichever
//! component needs to locate tabulated data. There is no process-wide
//! cache: two drivers may resolve different roots in the same process.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable consulted by [`DataPaths::resolve`].
pub const DATA_PATH_ENV: &str = "RADIANT_DATA_PATH";

/// Fallback root used when no other candidate is an existing directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Data directory relative to the directory holding the executable.
pub const EXE_RELATIVE_DATA_DIR: &str = "../data";

/// Root directory for tabulated interaction data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Use `root` as-is, without checking that it exists.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the data root, trying in order:
    ///
    /// 1. the explicit directory;
    /// 2. [`DATA_PATH_ENV`];
    /// 3. [`EXE_RELATIVE_DATA_DIR`] next to the running executable;
    /// 4. [`DEFAULT_DATA_DIR`].
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let env = std::env::var_os(DATA_PATH_ENV);
        let exe = std::env::current_exe().ok();
        let exe_dir = exe.as_deref().and_then(Path::parent);
        Self::resolve_with(explicit, env.as_deref(), exe_dir)
    }

    /// [`resolve`](Self::resolve) with the environment value and the
    /// executable's directory passed in.
    ///
    /// Candidates that are not existing directories are skipped.
    pub fn resolve_with(
        explicit: Option<&Path>,
        env: Option<&OsStr>,
        exe_dir: Option<&Path>,
    ) -> Self {
        if let Some(dir) = explicit.filter(|p| p.is_dir()) {
            log::info!("data path: explicit directory {}", dir.display());
            return Self::new(dir);
        }
        if let Some(dir) = env.map(Path::new).filter(|p| p.is_dir()) {
            log::info!("data path: {DATA_PATH_ENV}={}", dir.display());
            return Self::new(dir);
        }
        if let Some(dir) = exe_dir
            .map(|d| d.join(EXE_RELATIVE_DATA_DIR))
            .filter(|p| p.is_dir())
        {
            log::info!("data path: executable-relative {}", dir.display());
            return Self::new(dir);
        }
        log::info!("data path: default '{DEFAULT_DATA_DIR}'");
        Self::new(DEFAULT_DATA_DIR)
    }

    /// The resolved root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `relative` below the root.
    pub fn file(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let tmp = std::env::temp_dir();
        let paths = DataPaths::resolve_with(Some(&tmp), Some(OsStr::new("/nonexistent")), None);
        assert_eq!(paths.root(), tmp.as_path());
    }

    #[test]
    fn env_used_when_explicit_missing() {
        let tmp = std::env::temp_dir();
        let paths = DataPaths::resolve_with(
            Some(Path::new("/definitely/not/here")),
            Some(tmp.as_os_str()),
            Some(&tmp),
        );
        assert_eq!(paths.root(), tmp.as_path());
    }

    #[test]
    fn falls_back_to_default() {
        let paths = DataPaths::resolve_with(
            None,
            Some(OsStr::new("/definitely/not/here")),
            Some(Path::new("/definitely/not/here/bin")),
        );
        assert_eq!(paths.root(), Path::new(DEFAULT_DATA_DIR));
    }

    #[test]
    fn executable_relative_data_used_before_default() {
        let install = std::env::temp_dir().join(format!("radiant-paths-{}", std::process::id()));
        let bin = install.join("bin");
        let data = install.join("data");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::create_dir_all(&data).unwrap();

        let paths = DataPaths::resolve_with(None, None, Some(&bin));
        assert_eq!(paths.root(), bin.join(EXE_RELATIVE_DATA_DIR).as_path());
        assert!(paths.root().is_dir());

        // The environment variable still takes precedence.
        let tmp = std::env::temp_dir();
        let paths = DataPaths::resolve_with(None, Some(tmp.as_os_str()), Some(&bin));
        assert_eq!(paths.root(), tmp.as_path());

        std::fs::remove_dir_all(&install).unwrap();
    }

    #[test]
    fn file_joins_below_root() {
        let paths = DataPaths::new("/opt/radiant");
        assert_eq!(
            paths.file("ElasticScattering/rate_CMB.txt"),
            PathBuf::from("/opt/radiant/ElasticScattering/rate_CMB.txt")
        );
    }
}
