//! User configuration loaded from `~/.config/namewheel/config.yaml`.
//!
//! Every field is optional. Values chosen interactively (and saved in the
//! state directory) win over the config file, which wins over detection.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::theme::Theme;

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial UI language (`es` or `en`)
    #[serde(default)]
    pub language: Option<Language>,

    /// Initial theme (`dark` or `light`)
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Where the option list and settings are kept
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

impl Config {
    /// Load the config from `path`, or from the default location.
    ///
    /// A missing file yields defaults; an unreadable or invalid file is an
    /// error so typos don't go unnoticed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content)
                .with_context(|| format!("Invalid config file {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// `$XDG_CONFIG_HOME/namewheel/config.yaml`, falling back to `~/.config`.
fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".config")))?;
    Some(base.join("namewheel").join("config.yaml"))
}
