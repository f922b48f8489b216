//! Per-application directories

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::base::require_home;
use crate::env::{known_folders_or_env, Environment, SystemEnvironment};
use crate::error::Result;
use crate::known_folder::KnownFolder;
use crate::platform::{Family, Platform};
use crate::resolve::{join_single_slash, resolve_extended, runtime_dir};
use crate::sanitize::ApplicationIdentity;
use crate::write_field;

/// Locations an application should use for its own files
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectDirectories {
    /// Fragment appended to each base directory
    pub project_path: String,
    pub cache_dir: Option<String>,
    pub config_dir: Option<String>,
    pub data_dir: Option<String>,
    pub data_local_dir: Option<String>,
    pub preference_dir: Option<String>,
    pub runtime_dir: Option<String>,
}

impl ProjectDirectories {
    /// Directories for a verbatim path fragment on the running host
    pub fn from_path(path: &str) -> Result<Self> {
        Self::compute_from_path(Platform::detect()?, &SystemEnvironment::default(), path)
    }

    /// Directories for an application identity on the running host
    pub fn from(qualifier: &str, organization: &str, application: &str) -> Result<Self> {
        let identity = ApplicationIdentity::new(qualifier, organization, application);
        Self::compute(Platform::detect()?, &SystemEnvironment::default(), &identity)
    }

    /// Sanitize `identity` for `platform`, then build its directories.
    pub fn compute(
        platform: Platform,
        env: &dyn Environment,
        identity: &ApplicationIdentity,
    ) -> Result<Self> {
        let path = identity.project_path(platform)?;
        Self::compute_from_path(platform, env, &path)
    }

    /// Build directories for a fragment used exactly as given.
    pub fn compute_from_path(platform: Platform, env: &dyn Environment, path: &str) -> Result<Self> {
        debug!("◆ computing project directories for {:?} on {}", path, platform);
        let dirs = match platform.family() {
            Family::Xdg => {
                let home = require_home(env)?;
                let cache = resolve_extended(
                    env.var("XDG_CACHE_HOME").as_deref(),
                    path,
                    &format!("{}/.cache/", home),
                    path,
                );
                let config = resolve_extended(
                    env.var("XDG_CONFIG_HOME").as_deref(),
                    path,
                    &format!("{}/.config/", home),
                    path,
                );
                let data = resolve_extended(
                    env.var("XDG_DATA_HOME").as_deref(),
                    path,
                    &format!("{}/.local/share/", home),
                    path,
                );
                Self {
                    project_path: path.to_string(),
                    cache_dir: Some(cache),
                    preference_dir: Some(config.clone()),
                    config_dir: Some(config),
                    data_local_dir: Some(data.clone()),
                    data_dir: Some(data),
                    runtime_dir: runtime_dir(env.var("XDG_RUNTIME_DIR").as_deref(), Some(path)),
                }
            }
            Family::MacOs => {
                let home = require_home(env)?;
                let library = |sub: &str| join_single_slash(&format!("{}/Library/{}/", home, sub), path);
                let data = library("Application Support");
                Self {
                    project_path: path.to_string(),
                    cache_dir: Some(library("Caches")),
                    config_dir: Some(data.clone()),
                    data_local_dir: Some(data.clone()),
                    data_dir: Some(data),
                    preference_dir: Some(library("Preferences")),
                    runtime_dir: None,
                }
            }
            Family::Windows => {
                let mut folders = known_folders_or_env(
                    env,
                    &[KnownFolder::RoamingAppData, KnownFolder::LocalAppData],
                )
                .into_iter();
                let roaming = folders.next().flatten().map(|r| format!("{}\\{}", r, path));
                let local = folders.next().flatten().map(|l| format!("{}\\{}", l, path));
                let under = |root: &Option<String>, leaf: &str| {
                    root.as_ref().map(|r| format!("{}\\{}", r, leaf))
                };
                let config = under(&roaming, "config");
                Self {
                    project_path: path.to_string(),
                    data_dir: under(&roaming, "data"),
                    data_local_dir: under(&local, "data"),
                    cache_dir: under(&local, "cache"),
                    preference_dir: config.clone(),
                    config_dir: config,
                    runtime_dir: None,
                }
            }
        };
        Ok(dirs)
    }
}

impl fmt::Display for ProjectDirectories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProjectDirectories:")?;
        write_field(f, "project_path", Some(self.project_path.as_str()))?;
        write_field(f, "cache_dir", self.cache_dir.as_deref())?;
        write_field(f, "config_dir", self.config_dir.as_deref())?;
        write_field(f, "data_dir", self.data_dir.as_deref())?;
        write_field(f, "data_local_dir", self.data_local_dir.as_deref())?;
        write_field(f, "preference_dir", self.preference_dir.as_deref())?;
        write_field(f, "runtime_dir", self.runtime_dir.as_deref())
    }
}
