//! Environment access
//!
//! Providers never touch the process environment directly. They read it
//! through [`Environment`], so any platform can be simulated in tests.

use std::collections::HashMap;
use tracing::debug;

use crate::config::{KnownFolderStrategy, LookupConfig};
use crate::known_folder::{self, KnownFolder};
use crate::resolve::non_empty;
use crate::xdg::{self, XdgUserDir};

/// Read-only view of the state directories are derived from.
pub trait Environment {
    /// An environment variable, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// The current user's home directory.
    fn home_dir(&self) -> Option<String>;

    /// XDG user directories, one slot per requested kind, in order.
    fn xdg_user_dirs(&self, kinds: &[XdgUserDir]) -> Vec<Option<String>>;

    /// Windows known folders, one slot per requested folder, in order.
    fn known_folders(&self, folders: &[KnownFolder]) -> Vec<Option<String>>;
}

/// Resolve known folders, falling back to the environment when the lookup
/// has no answer.
///
/// Profile, roaming, local and public folders come straight from
/// `USERPROFILE`, `APPDATA`, `LOCALAPPDATA` and `PUBLIC`. The content folders
/// are derived from `%USERPROFILE%`, and templates from `%APPDATA%`.
pub fn known_folders_or_env(env: &dyn Environment, folders: &[KnownFolder]) -> Vec<Option<String>> {
    env.known_folders(folders)
        .into_iter()
        .zip(folders)
        .map(|(found, folder)| {
            non_empty(found).or_else(|| {
                let (var, suffix) = folder.env_fallback();
                debug!("◆ known folder {:?} unresolved, trying %{}%", folder, var);
                non_empty(env.var(var)).map(|value| format!("{}{}", value, suffix))
            })
        })
        .collect()
}

/// The live process environment
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment {
    config: LookupConfig,
}

impl SystemEnvironment {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<String> {
        dirs::home_dir().map(|p| p.to_string_lossy().into_owned())
    }

    fn xdg_user_dirs(&self, kinds: &[XdgUserDir]) -> Vec<Option<String>> {
        debug!("◆ querying {} for {} user dirs", self.config.xdg_user_dir_program, kinds.len());
        xdg::lookup(
            &self.config.xdg_user_dir_program,
            kinds,
            self.config.helper_timeout(),
        )
    }

    fn known_folders(&self, folders: &[KnownFolder]) -> Vec<Option<String>> {
        match self.config.known_folder_strategy {
            KnownFolderStrategy::Native => folders
                .iter()
                .map(|&folder| known_folder::resolve_native(folder))
                .collect(),
            KnownFolderStrategy::PowerShell => {
                let search_dirs = known_folder::powershell_search_dirs(
                    self.var("PATH").as_deref(),
                    self.var("SystemRoot").as_deref(),
                );
                known_folder::resolve_with_powershell(
                    folders,
                    &search_dirs,
                    self.config.helper_timeout(),
                )
            }
        }
    }
}

/// In-memory environment for tests and embedders
///
/// Unset user dirs and known folders resolve to `None`, as if the helper
/// had nothing to report.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    vars: HashMap<String, String>,
    home: Option<String>,
    user_dirs: HashMap<XdgUserDir, String>,
    known_folders: HashMap<KnownFolder, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn with_user_dir(mut self, kind: XdgUserDir, path: impl Into<String>) -> Self {
        self.user_dirs.insert(kind, path.into());
        self
    }

    pub fn with_known_folder(mut self, folder: KnownFolder, path: impl Into<String>) -> Self {
        self.known_folders.insert(folder, path.into());
        self
    }
}

impl Environment for MemoryEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }

    fn xdg_user_dirs(&self, kinds: &[XdgUserDir]) -> Vec<Option<String>> {
        kinds.iter().map(|k| self.user_dirs.get(k).cloned()).collect()
    }

    fn known_folders(&self, folders: &[KnownFolder]) -> Vec<Option<String>> {
        folders
            .iter()
            .map(|f| self.known_folders.get(f).cloned())
            .collect()
    }
}
