//! XDG user directories via the `xdg-user-dir` helper

use std::process::Command;
use std::time::Duration;

use crate::process::{run_with_timeout, split_lines};

/// Kinds understood by `xdg-user-dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XdgUserDir {
    Music,
    Desktop,
    Documents,
    Download,
    Pictures,
    PublicShare,
    Templates,
    Videos,
}

impl XdgUserDir {
    pub const ALL: [XdgUserDir; 8] = [
        XdgUserDir::Music,
        XdgUserDir::Desktop,
        XdgUserDir::Documents,
        XdgUserDir::Download,
        XdgUserDir::Pictures,
        XdgUserDir::PublicShare,
        XdgUserDir::Templates,
        XdgUserDir::Videos,
    ];

    /// Argument passed to the helper
    pub fn name(self) -> &'static str {
        match self {
            XdgUserDir::Music => "MUSIC",
            XdgUserDir::Desktop => "DESKTOP",
            XdgUserDir::Documents => "DOCUMENTS",
            XdgUserDir::Download => "DOWNLOAD",
            XdgUserDir::Pictures => "PICTURES",
            XdgUserDir::PublicShare => "PUBLICSHARE",
            XdgUserDir::Templates => "TEMPLATES",
            XdgUserDir::Videos => "VIDEOS",
        }
    }

    /// Home-relative directory used when the helper has no answer
    pub fn default_suffix(self) -> &'static str {
        match self {
            XdgUserDir::Music => "/Music",
            XdgUserDir::Desktop => "/Desktop",
            XdgUserDir::Documents => "/Documents",
            XdgUserDir::Download => "/Downloads",
            XdgUserDir::Pictures => "/Pictures",
            XdgUserDir::PublicShare => "/Public",
            XdgUserDir::Templates => "/Templates",
            XdgUserDir::Videos => "/Videos",
        }
    }
}

/// Shell script running the helper once per kind, one output line each.
pub fn helper_script(program: &str, kinds: &[XdgUserDir]) -> String {
    kinds
        .iter()
        .map(|kind| format!("{} {};", program, kind.name()))
        .collect()
}

/// Look up `kinds` with a single batched helper run.
pub fn lookup(program: &str, kinds: &[XdgUserDir], timeout: Duration) -> Vec<Option<String>> {
    if kinds.is_empty() {
        return Vec::new();
    }
    let mut cmd = Command::new("/bin/sh");
    cmd.arg("-c").arg(helper_script(program, kinds));
    match run_with_timeout(cmd, timeout) {
        Some(stdout) => split_lines(&stdout, kinds.len()),
        None => vec![None; kinds.len()],
    }
}
