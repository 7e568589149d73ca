//! Infrastructure implementation of the `GroupSource` port.
//!
//! Hosts are kept in an INI file: one section per group, one valueless key
//! per member host.
//!
//! ```ini
//! [web]
//! web01.example.com
//! web02.example.com
//!
//! [db]
//! db01.example.com
//! ```

use std::path::PathBuf;

use anyhow::Result;
use configparser::ini::Ini;

use crate::application::ports::GroupSource;
use crate::domain::{DEFAULT_GROUP, Group, GroupSet, SaError};

/// Environment variable overriding the hosts file location.
pub const CONFIG_ENV: &str = "SA_CONFIG";

/// `$HOME/.sa/hosts.ini`, or `None` when the home directory is unknown.
#[must_use]
pub fn default_hosts_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sa").join("hosts.ini"))
}

/// Hosts file on disk.
pub struct IniGroupStore {
    path: PathBuf,
}

impl IniGroupStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_error(&self, reason: impl Into<String>) -> SaError {
        SaError::ConfigLoad {
            path: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl GroupSource for IniGroupStore {
    fn load(&self) -> Result<GroupSet> {
        tracing::debug!(path = %self.path.display(), "using configuration");
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| self.load_error(e.to_string()))?;
        parse_groups(&content).map_err(|reason| self.load_error(reason).into())
    }
}

/// Parse hosts file content into groups, keeping file order.
///
/// Section names and keys are folded to lowercase. Keys before the first
/// section land in the `default` group. A key's value, if any, is ignored.
///
/// # Errors
///
/// Returns the parser's message for malformed input.
pub fn parse_groups(content: &str) -> std::result::Result<GroupSet, String> {
    let sections = Ini::new().read(content.to_owned())?;

    Ok(sections
        .iter()
        .filter(|(name, keys)| !(name.as_str() == DEFAULT_GROUP && keys.is_empty()))
        .map(|(name, keys)| Group::new(name, keys.keys()))
        .collect())
}
