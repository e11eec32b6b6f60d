use crate::api::DocwatchApi;
use crate::config::DocwatchConfig;
use crate::error::{DocwatchError, Result};
use crate::store::fs::FileBlobStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HOME_ENV: &str = "DOCWATCH_HOME";

pub struct DocwatchContext {
    pub api: DocwatchApi<FileBlobStore>,
}

/// Picks the data directory: explicit override, then `DOCWATCH_HOME`, then the
/// platform data dir (e.g. `~/.local/share/docwatch` on Linux).
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "docwatch", "docwatch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DocwatchError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(explicit_data_dir: Option<&Path>) -> Result<DocwatchContext> {
    let data_dir = resolve_data_dir(explicit_data_dir)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = DocwatchConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "config unreadable, using defaults");
        DocwatchConfig::default()
    });

    let backend = FileBlobStore::new(&data_dir);
    let api = DocwatchApi::new(backend, config, data_dir);

    Ok(DocwatchContext { api })
}
