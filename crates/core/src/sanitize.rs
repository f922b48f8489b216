//! Turning application identities into path fragments

use serde::{Deserialize, Serialize};

use crate::error::{DirsError, Result};
use crate::platform::{Family, Platform};

/// Human-readable application naming triplet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationIdentity {
    /// Reverse-domain prefix, e.g. "com" or "uk.co"
    #[serde(default)]
    pub qualifier: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub application: String,
}

impl ApplicationIdentity {
    pub fn new(
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Derive the platform's path fragment for this identity.
    pub fn project_path(&self, platform: Platform) -> Result<String> {
        project_path(platform, self)
    }
}

/// Drop spaces, hyphenating interior whitespace runs, and optionally lowercase.
///
/// A run of spaces between two non-space characters becomes a single
/// `-` when `replacement` is non-empty and disappears otherwise. Leading and
/// trailing spaces never produce a hyphen.
pub fn trim_lowercase_replace_whitespace(value: &str, replacement: &str, lowercase: bool) -> String {
    let chars: Vec<char> = value.chars().collect();
    let replace = !replacement.is_empty();
    let mut out = String::with_capacity(value.len());
    let mut chars_before = false;

    for (index, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let next_is_char = chars.get(index + 1).is_some_and(|&n| n != ' ');
            if chars_before && replace && next_is_char {
                out.push('-');
                chars_before = false;
            }
        } else {
            if lowercase {
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
            chars_before = true;
        }
    }
    out
}

/// Build the project path fragment for `identity` on `platform`.
///
/// XDG platforms use only the application name, lowercased and with
/// whitespace removed. macOS joins the present components with dots and
/// keeps their case. Windows uses `organization\application` verbatim.
pub fn project_path(platform: Platform, identity: &ApplicationIdentity) -> Result<String> {
    if identity.organization.is_empty() && identity.application.is_empty() {
        return Err(DirsError::InvalidIdentity);
    }

    let path = match platform.family() {
        Family::Xdg => trim_lowercase_replace_whitespace(&identity.application, "", true),
        Family::MacOs => [
            identity.qualifier.as_str(),
            identity.organization.as_str(),
            identity.application.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| trim_lowercase_replace_whitespace(part, "-", false))
        .collect::<Vec<_>>()
        .join("."),
        Family::Windows => [
            identity.organization.as_str(),
            identity.application.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\\"),
    };
    Ok(path)
}
