use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::utils::{normalize_path, resolve_user_path};

/// Header holding the `OPENAPTX_MAJOR`/`MINOR`/`PATCH` definitions.
pub const HEADER_FILE_NAME: &str = "openaptx.h";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("executable path {} has no parent directory", .0.display())]
    NoParent(PathBuf),
}

/// Where to look for the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub source_root: PathBuf,
    pub header_name: String,
}

impl ExtractorConfig {
    /// Build the config, falling back to the executable's directory and
    /// `openaptx.h` when no override is given.
    pub fn resolve(
        source_root: Option<&str>,
        header_name: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let source_root = match source_root {
            Some(dir) if !dir.trim().is_empty() => resolve_user_path(dir),
            _ => resolve_source_root()?,
        };
        let header_name = header_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(HEADER_FILE_NAME)
            .to_string();
        debug!(source_root = %source_root.display(), header = %header_name, "resolved config");
        Ok(Self {
            source_root,
            header_name,
        })
    }

    pub fn header_path(&self) -> PathBuf {
        resolve_header_path(&self.source_root, &self.header_name)
    }
}

/// The normalized directory containing the running executable.
pub fn resolve_source_root() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::CurrentExe)?;
    source_root_of(&exe)
}

fn source_root_of(exe: &Path) -> Result<PathBuf, ConfigError> {
    let exe = normalize_path(exe);
    match exe.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Err(ConfigError::NoParent(exe)),
    }
}

pub fn resolve_header_path(source_root: &Path, header_name: &str) -> PathBuf {
    source_root.join(header_name)
}
