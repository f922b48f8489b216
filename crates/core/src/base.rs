//! Per-user base directories

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::env::{known_folders_or_env, Environment, SystemEnvironment};
use crate::error::{DirsError, Result};
use crate::known_folder::KnownFolder;
use crate::platform::{Family, Platform};
use crate::resolve::{executable_dir, non_empty, resolve, runtime_dir};
use crate::write_field;

/// Standard locations for user-invisible files
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BaseDirectories {
    pub home_dir: Option<String>,
    pub cache_dir: Option<String>,
    pub config_dir: Option<String>,
    pub data_dir: Option<String>,
    pub data_local_dir: Option<String>,
    pub executable_dir: Option<String>,
    pub preference_dir: Option<String>,
    pub runtime_dir: Option<String>,
}

impl BaseDirectories {
    /// Snapshot for the running host
    pub fn get() -> Result<Self> {
        Self::compute(Platform::detect()?, &SystemEnvironment::default())
    }

    /// Snapshot for `platform`, reading state from `env`
    pub fn compute(platform: Platform, env: &dyn Environment) -> Result<Self> {
        debug!("◆ computing base directories for {}", platform);
        match platform.family() {
            Family::Xdg => {
                let home = require_home(env)?;
                let data_home = non_empty(env.var("XDG_DATA_HOME"));
                let cache = resolve(env.var("XDG_CACHE_HOME").as_deref(), &home, "/.cache");
                let config = resolve(env.var("XDG_CONFIG_HOME").as_deref(), &home, "/.config");
                let data = resolve(data_home.as_deref(), &home, "/.local/share");
                let bin = executable_dir(
                    env.var("XDG_BIN_HOME").as_deref(),
                    data_home.as_deref(),
                    &home,
                );
                Ok(Self {
                    cache_dir: Some(cache),
                    preference_dir: Some(config.clone()),
                    config_dir: Some(config),
                    data_local_dir: Some(data.clone()),
                    data_dir: Some(data),
                    executable_dir: Some(bin),
                    runtime_dir: runtime_dir(env.var("XDG_RUNTIME_DIR").as_deref(), None),
                    home_dir: Some(home),
                })
            }
            Family::MacOs => {
                let home = require_home(env)?;
                let support = format!("{}/Library/Application Support/", home);
                Ok(Self {
                    cache_dir: Some(format!("{}/Library/Caches/", home)),
                    config_dir: Some(support.clone()),
                    data_dir: Some(support.clone()),
                    data_local_dir: Some(support),
                    executable_dir: None,
                    preference_dir: Some(format!("{}/Library/Preferences/", home)),
                    runtime_dir: None,
                    home_dir: Some(home),
                })
            }
            Family::Windows => {
                let mut folders = known_folders_or_env(
                    env,
                    &[
                        KnownFolder::Profile,
                        KnownFolder::RoamingAppData,
                        KnownFolder::LocalAppData,
                    ],
                )
                .into_iter();
                let home = folders.next().flatten();
                let roaming = folders.next().flatten();
                let local = folders.next().flatten();
                Ok(Self {
                    home_dir: home,
                    config_dir: roaming.clone(),
                    preference_dir: roaming.clone(),
                    data_dir: roaming,
                    cache_dir: local.clone(),
                    data_local_dir: local,
                    executable_dir: None,
                    runtime_dir: None,
                })
            }
        }
    }
}

pub(crate) fn require_home(env: &dyn Environment) -> Result<String> {
    non_empty(env.home_dir()).ok_or(DirsError::NoHomeDir)
}

impl fmt::Display for BaseDirectories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BaseDirectories:")?;
        write_field(f, "home_dir", self.home_dir.as_deref())?;
        write_field(f, "cache_dir", self.cache_dir.as_deref())?;
        write_field(f, "config_dir", self.config_dir.as_deref())?;
        write_field(f, "data_dir", self.data_dir.as_deref())?;
        write_field(f, "data_local_dir", self.data_local_dir.as_deref())?;
        write_field(f, "executable_dir", self.executable_dir.as_deref())?;
        write_field(f, "preference_dir", self.preference_dir.as_deref())?;
        write_field(f, "runtime_dir", self.runtime_dir.as_deref())
    }
}
