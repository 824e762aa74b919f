//! Infer the latest and next version of sequentially numbered artifacts by
//! scanning their names.
//!
//! A template such as `^shot_<version>\.ma$` is turned into a regular
//! expression where `<version>` becomes a named group matching the configured
//! prefix and zero-padded digits (`v` and 3 by default). Every candidate name is
//! matched against it and the highest number wins.
//!
//! ```
//! use verscan::{MatchMode, ResolverConfig, VersionResolver};
//!
//! let names = ["dog_v001", "dog_v002", "dog_v003", "dog_v004_cat"];
//! let config = ResolverConfig::default().match_mode(MatchMode::Substring);
//! let resolver = VersionResolver::with_config(names, "dog_<version>", &config);
//! assert_eq!(resolver.latest_version_number()?, Some(4));
//! assert_eq!(resolver.next_version_name()?, "v005");
//! # Ok::<(), verscan::Error>(())
//! ```

pub mod config;
pub mod consts;
pub mod dir;
pub mod error;
pub mod key;
pub mod pattern;
pub mod resolver;
pub mod scan;

pub use config::{MatchMode, ResolverConfig, format_version_name};
pub use dir::DirectoryResolver;
pub use error::{Error, Result};
pub use key::{VersionKey, reset_version_key, set_version_key, version_key};
pub use pattern::{CompiledPattern, NamePattern};
pub use resolver::{ResolvedVersion, VersionResolver};
pub use scan::{TargetKind, list_entries};
