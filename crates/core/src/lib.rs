//! basedirs: platform-aware directory lookup
//!
//! Computes where an application should keep its cache, configuration and
//! data, and where the user's documents, music and other content live:
//!
//! - XDG base directories on Linux and the BSDs
//! - Standard Directories on macOS
//! - Known Folders on Windows
//!
//! Every lookup returns a fresh snapshot. Nothing is created on disk.
//!
//! ```no_run
//! use basedirs_core::ProjectDirectories;
//!
//! let dirs = ProjectDirectories::from("com", "Foo Corp", "Bar App")?;
//! println!("{}", dirs.config_dir.unwrap_or_default());
//! # Ok::<(), basedirs_core::DirsError>(())
//! ```

use std::fmt;

pub mod base;
pub mod config;
pub mod env;
pub mod error;
pub mod known_folder;
pub mod platform;
pub mod process;
pub mod project;
pub mod resolve;
pub mod sanitize;
pub mod user;
pub mod xdg;

pub use base::BaseDirectories;
pub use config::{ConfigError, KnownFolderStrategy, LookupConfig};
pub use env::{Environment, MemoryEnvironment, SystemEnvironment};
pub use error::{DirsError, Result};
pub use known_folder::KnownFolder;
pub use platform::{Family, Platform};
pub use project::ProjectDirectories;
pub use sanitize::ApplicationIdentity;
pub use user::UserDirectories;
pub use xdg::XdgUserDir;

/// Placeholder printed for absent fields
pub const ABSENT: &str = "<none>";

pub(crate) fn write_field(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&str>,
) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "  {:<15}= '{}'", label, v),
        None => writeln!(f, "  {:<15}= {}", label, ABSENT),
    }
}
