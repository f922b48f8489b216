//! Operating system classification

use std::fmt;

use crate::error::{DirsError, Result};

/// Supported operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Bsd,
    Solaris,
    Aix,
    IbmI,
    MacOs,
    Windows,
}

/// Groups of platforms that share directory conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// XDG base directories under `$HOME`
    Xdg,
    MacOs,
    Windows,
}

impl Platform {
    /// Classify the running host.
    pub fn detect() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name. Matching is a case-insensitive substring test,
    /// first match wins.
    pub fn from_os_name(name: &str) -> Result<Self> {
        let os = name.to_lowercase();
        let platform = if os.contains("linux") {
            Platform::Linux
        } else if os.contains("mac") {
            Platform::MacOs
        } else if os.contains("windows") {
            Platform::Windows
        } else if os.contains("bsd") {
            Platform::Bsd
        } else if os.contains("sunos") || os.contains("solaris") || os.contains("illumos") {
            Platform::Solaris
        } else if os.contains("os/400") || os.contains("os400") {
            Platform::IbmI
        } else if os.contains("aix") {
            Platform::Aix
        } else {
            return Err(DirsError::UnsupportedPlatform {
                os: name.to_string(),
            });
        };
        Ok(platform)
    }

    pub fn family(self) -> Family {
        match self {
            Platform::Linux
            | Platform::Bsd
            | Platform::Solaris
            | Platform::Aix
            | Platform::IbmI => Family::Xdg,
            Platform::MacOs => Family::MacOs,
            Platform::Windows => Family::Windows,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Bsd => "BSD",
            Platform::Solaris => "Solaris",
            Platform::Aix => "AIX",
            Platform::IbmI => "IBM i",
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
