use crate::consts::{DEFAULT_VERSION_KEY, GROUP_NAME_RE};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Name of the capture group that holds the version token.
///
/// A key doubles as the placeholder spelling in templates: with key `version`,
/// `shot_<version>.ma` is shorthand for `shot_(?P<version>v\d{3}).ma`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionKey(String);

impl VersionKey {
    /// Validate `key` as a capture group name.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if !GROUP_NAME_RE.is_match(&key) {
            return Err(Error::Configuration(format!(
                "version key `{key}` is not a valid capture group name"
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<key>`, the shorthand spelling inside templates.
    pub fn placeholder(&self) -> String {
        format!("<{}>", self.0)
    }

    /// Opening syntaxes of an explicit named group for this key.
    pub(crate) fn group_openers(&self) -> [String; 2] {
        [format!("(?P<{}>", self.0), format!("(?<{}>", self.0)]
    }
}

impl Default for VersionKey {
    fn default() -> Self {
        Self(DEFAULT_VERSION_KEY.to_string())
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VersionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

static PROCESS_KEY: LazyLock<RwLock<VersionKey>> =
    LazyLock::new(|| RwLock::new(VersionKey::default()));

/// Current process-wide version key.
///
/// Read once whenever a [`ResolverConfig`](crate::ResolverConfig) is created;
/// resolvers built from an existing config are unaffected by later changes.
pub fn version_key() -> VersionKey {
    PROCESS_KEY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide version key.
///
/// Meant for setup code. Configs created afterwards pick up the new key.
pub fn set_version_key(key: &str) -> Result<()> {
    let key = VersionKey::new(key)?;
    tracing::debug!(key = %key, "setting process-wide version key");
    *PROCESS_KEY.write().unwrap_or_else(PoisonError::into_inner) = key;
    Ok(())
}

/// Restore the process-wide version key to `version`.
pub fn reset_version_key() {
    *PROCESS_KEY.write().unwrap_or_else(PoisonError::into_inner) = VersionKey::default();
}
