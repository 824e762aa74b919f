use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("name pattern needs version key `{key}`, got `{template}`")]
    VersionKey { key: String, template: String },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("captured version `{captured}` is not prefix `{prefix}` followed by a decimal number")]
    Parse { captured: String, prefix: String },

    #[error("version {number} has no successor")]
    Overflow { number: u64 },

    #[error("invalid name pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to list `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search directory is not set")]
    DirectoryNotSet,
}
