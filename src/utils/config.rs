use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::estimator::ExtensionTable;
use crate::scanner::SkipRules;

const CONFIG_DIR_NAME: &str = "token-estimator";
const CONFIG_FILE_NAME: &str = "config.toml";

/// User overrides layered on top of the built-in tables.
///
/// ```toml
/// skip_dirs = ["fixtures"]
/// skip_extensions = [".lock"]
/// ignore = ["*.min.js"]
///
/// [multipliers]
/// ".vue" = 18
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub multipliers: BTreeMap<String, usize>,
    pub skip_dirs: Vec<String>,
    pub skip_extensions: Vec<String>,
    pub ignore: Vec<String>,
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default multipliers with this config's entries merged in.
    pub fn extension_table(&self) -> ExtensionTable {
        let mut table = ExtensionTable::default();
        for (ext, multiplier) in &self.multipliers {
            table.insert(ext, *multiplier);
        }
        table
    }

    /// Default skip rules extended with this config and any extra CLI ignore globs.
    pub fn skip_rules(&self, extra_ignore: &[String]) -> Result<SkipRules> {
        let mut ignore = self.ignore.clone();
        ignore.extend(extra_ignore.iter().cloned());

        let mut rules = SkipRules::default()
            .with_skip_dirs(self.skip_dirs.iter().cloned())
            .with_skip_extensions(self.skip_extensions.iter().map(String::as_str));
        if !ignore.is_empty() {
            rules = rules.with_ignore_patterns(&ignore)?;
        }
        Ok(rules)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the config file.
///
/// An explicit path must exist. Without one, the default location is used when
/// present and an empty config otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Config::default()),
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let text = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
        path: path.clone(),
        source,
    })?;
    Config::from_toml(&path, &text)
}
