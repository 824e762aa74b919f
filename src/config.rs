use crate::consts::{DEFAULT_INITIAL_NUMBER, DEFAULT_PADDING, DEFAULT_PREFIX};
use crate::error::{Error, Result};
use crate::key::{self, VersionKey};
use std::fmt;
use std::str::FromStr;

/// How a candidate name has to line up with the pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The pattern must cover the whole candidate.
    #[default]
    FullMatch,
    /// The pattern may match anywhere inside the candidate.
    Substring,
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" | "match" => Ok(Self::FullMatch),
            "substring" | "search" => Ok(Self::Substring),
            other => Err(Error::Configuration(format!("unknown match mode `{other}`"))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullMatch => f.write_str("full"),
            Self::Substring => f.write_str("substring"),
        }
    }
}

/// Settings shared by every resolver built from it.
///
/// One config can be handed by reference to many resolvers, each with its own
/// template. The version key is taken from the process-wide key when the
/// config is created; use [`ResolverConfig::version_key`] to pin another one.
///
/// ```
/// use verscan::{MatchMode, ResolverConfig};
///
/// let config = ResolverConfig::default()
///     .padding(4)
///     .prefix("take")
///     .match_mode(MatchMode::Substring);
/// assert_eq!(config.format_version_name(12), "take0012");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub padding: usize,
    pub prefix: String,
    pub initial_number: u64,
    pub match_mode: MatchMode,
    pub version_key: VersionKey,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            prefix: DEFAULT_PREFIX.to_string(),
            initial_number: DEFAULT_INITIAL_NUMBER,
            match_mode: MatchMode::default(),
            version_key: key::version_key(),
        }
    }
}

impl ResolverConfig {
    /// Minimum digit width. A `<version>` placeholder needs at least 1; an
    /// explicit group in the template ignores it when matching.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn initial_number(mut self, initial_number: u64) -> Self {
        self.initial_number = initial_number;
        self
    }

    pub fn match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn version_key(mut self, version_key: VersionKey) -> Self {
        self.version_key = version_key;
        self
    }

    /// Prefix followed by `number` zero-padded to at least `padding` digits.
    pub fn format_version_name(&self, number: u64) -> String {
        format_version_name(&self.prefix, number, self.padding)
    }
}

/// Format a version name. Padding is a minimum width: wider numbers are kept whole.
pub fn format_version_name(prefix: &str, number: u64, padding: usize) -> String {
    format!("{prefix}{number:0padding$}")
}
