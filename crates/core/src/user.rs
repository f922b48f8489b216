//! Per-user content directories

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::base::require_home;
use crate::env::{known_folders_or_env, Environment, SystemEnvironment};
use crate::error::Result;
use crate::known_folder::KnownFolder;
use crate::platform::{Family, Platform};
use crate::resolve::{join_single_slash, non_empty, resolve_extended};
use crate::write_field;
use crate::xdg::XdgUserDir;

/// Standard locations for user-facing files
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserDirectories {
    pub home_dir: Option<String>,
    pub audio_dir: Option<String>,
    pub desktop_dir: Option<String>,
    pub document_dir: Option<String>,
    pub download_dir: Option<String>,
    pub font_dir: Option<String>,
    pub picture_dir: Option<String>,
    pub public_dir: Option<String>,
    pub template_dir: Option<String>,
    pub video_dir: Option<String>,
}

impl UserDirectories {
    /// Snapshot for the running host
    pub fn get() -> Result<Self> {
        Self::compute(Platform::detect()?, &SystemEnvironment::default())
    }

    /// Snapshot for `platform`, reading state from `env`
    pub fn compute(platform: Platform, env: &dyn Environment) -> Result<Self> {
        debug!("◆ computing user directories for {}", platform);
        match (platform, platform.family()) {
            (Platform::IbmI, _) => {
                let home = require_home(env)?;
                Ok(Self {
                    font_dir: Some(xdg_font_dir(env, &home)),
                    ..fixed_layout(&home)
                })
            }
            (_, Family::Xdg) => {
                let home = require_home(env)?;
                let mut found = env.xdg_user_dirs(&XdgUserDir::ALL).into_iter();
                // Called in XdgUserDir::ALL order.
                let mut next = |kind: XdgUserDir| {
                    non_empty(found.next().flatten()).or_else(|| {
                        debug!("◆ no {} from helper, using default", kind.name());
                        Some(join_single_slash(&home, kind.default_suffix()))
                    })
                };
                let audio_dir = next(XdgUserDir::Music);
                let desktop_dir = next(XdgUserDir::Desktop);
                let document_dir = next(XdgUserDir::Documents);
                let download_dir = next(XdgUserDir::Download);
                let picture_dir = next(XdgUserDir::Pictures);
                let public_dir = next(XdgUserDir::PublicShare);
                let template_dir = next(XdgUserDir::Templates);
                let video_dir = next(XdgUserDir::Videos);
                Ok(Self {
                    font_dir: Some(xdg_font_dir(env, &home)),
                    home_dir: Some(home),
                    audio_dir,
                    desktop_dir,
                    document_dir,
                    download_dir,
                    picture_dir,
                    public_dir,
                    template_dir,
                    video_dir,
                })
            }
            (_, Family::MacOs) => {
                let home = require_home(env)?;
                Ok(Self {
                    font_dir: Some(format!("{}/Library/Fonts", home)),
                    ..fixed_layout(&home)
                })
            }
            (_, Family::Windows) => {
                let mut folders = known_folders_or_env(
                    env,
                    &[
                        KnownFolder::Profile,
                        KnownFolder::Music,
                        KnownFolder::Desktop,
                        KnownFolder::Documents,
                        KnownFolder::Downloads,
                        KnownFolder::Pictures,
                        KnownFolder::Public,
                        KnownFolder::Templates,
                        KnownFolder::Videos,
                    ],
                )
                .into_iter();
                let mut next = || folders.next().flatten();
                Ok(Self {
                    home_dir: next(),
                    audio_dir: next(),
                    desktop_dir: next(),
                    document_dir: next(),
                    download_dir: next(),
                    picture_dir: next(),
                    public_dir: next(),
                    template_dir: next(),
                    video_dir: next(),
                    font_dir: None,
                })
            }
        }
    }
}

fn xdg_font_dir(env: &dyn Environment, home: &str) -> String {
    resolve_extended(
        env.var("XDG_DATA_HOME").as_deref(),
        "/fonts",
        home,
        "/.local/share/fonts",
    )
}

/// Home-relative layout shared by macOS and IBM i. No template directory.
fn fixed_layout(home: &str) -> UserDirectories {
    UserDirectories {
        home_dir: Some(home.to_string()),
        audio_dir: Some(format!("{}/Music", home)),
        desktop_dir: Some(format!("{}/Desktop", home)),
        document_dir: Some(format!("{}/Documents", home)),
        download_dir: Some(format!("{}/Downloads", home)),
        font_dir: None,
        picture_dir: Some(format!("{}/Pictures", home)),
        public_dir: Some(format!("{}/Public", home)),
        template_dir: None,
        video_dir: Some(format!("{}/Movies", home)),
    }
}

impl fmt::Display for UserDirectories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UserDirectories:")?;
        write_field(f, "home_dir", self.home_dir.as_deref())?;
        write_field(f, "audio_dir", self.audio_dir.as_deref())?;
        write_field(f, "desktop_dir", self.desktop_dir.as_deref())?;
        write_field(f, "document_dir", self.document_dir.as_deref())?;
        write_field(f, "download_dir", self.download_dir.as_deref())?;
        write_field(f, "font_dir", self.font_dir.as_deref())?;
        write_field(f, "picture_dir", self.picture_dir.as_deref())?;
        write_field(f, "public_dir", self.public_dir.as_deref())?;
        write_field(f, "template_dir", self.template_dir.as_deref())?;
        write_field(f, "video_dir", self.video_dir.as_deref())
    }
}
