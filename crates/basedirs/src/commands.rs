//! basedirs command implementations

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use basedirs_core::{
    ApplicationIdentity, BaseDirectories, LookupConfig, Platform, ProjectDirectories,
    SystemEnvironment, UserDirectories, ABSENT,
};

/// A project directory that can be selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Cache,
    Config,
    Data,
    DataLocal,
    Preferences,
    Runtime,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Cache => "cache_dir",
            Field::Config => "config_dir",
            Field::Data => "data_dir",
            Field::DataLocal => "data_local_dir",
            Field::Preferences => "preference_dir",
            Field::Runtime => "runtime_dir",
        }
    }

    fn value(self, dirs: &ProjectDirectories) -> Option<&str> {
        match self {
            Field::Cache => dirs.cache_dir.as_deref(),
            Field::Config => dirs.config_dir.as_deref(),
            Field::Data => dirs.data_dir.as_deref(),
            Field::DataLocal => dirs.data_local_dir.as_deref(),
            Field::Preferences => dirs.preference_dir.as_deref(),
            Field::Runtime => dirs.runtime_dir.as_deref(),
        }
    }
}

/// Lookup settings from `path`, or the defaults when no file is given
pub fn load_settings(path: Option<&Path>) -> Result<LookupConfig> {
    match path {
        Some(path) => LookupConfig::load_from(path).context("Failed to load settings"),
        None => Ok(LookupConfig::default()),
    }
}

fn host() -> Result<Platform> {
    let platform = Platform::detect().context("Failed to detect platform")?;
    debug!("◆ running on {}", platform);
    Ok(platform)
}

/// Show project directories, all of them or just the selected fields
pub fn project_command(
    config: LookupConfig,
    qualifier: &str,
    organization: &str,
    name: &str,
    raw: bool,
    fields: &[Field],
    json: bool,
) -> Result<()> {
    let platform = host()?;
    let env = SystemEnvironment::new(config);

    let dirs = if raw {
        ProjectDirectories::compute_from_path(platform, &env, name)
    } else {
        let identity = ApplicationIdentity::new(qualifier, organization, name);
        ProjectDirectories::compute(platform, &env, &identity)
    }
    .with_context(|| format!("Failed to compute project directories for '{}'", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dirs)?);
        return Ok(());
    }

    match fields {
        [] => print!("{}", dirs),
        [field] => println!("{}", field.value(&dirs).unwrap_or_default()),
        _ => {
            for field in fields {
                println!("{}", labeled(field.label(), field.value(&dirs)));
            }
        }
    }
    Ok(())
}

/// Show base directories
pub fn base_command(config: LookupConfig, json: bool) -> Result<()> {
    let platform = host()?;
    let dirs = BaseDirectories::compute(platform, &SystemEnvironment::new(config))
        .context("Failed to compute base directories")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dirs)?);
    } else {
        print!("{}", dirs);
    }
    Ok(())
}

/// Show user directories
pub fn user_command(config: LookupConfig, json: bool) -> Result<()> {
    let platform = host()?;
    let dirs = UserDirectories::compute(platform, &SystemEnvironment::new(config))
        .context("Failed to compute user directories")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dirs)?);
    } else {
        print!("{}", dirs);
    }
    Ok(())
}

fn labeled(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}: {}", label, v),
        None => format!("{}: {}", label, ABSENT),
    }
}
