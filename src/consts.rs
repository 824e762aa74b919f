use regex::Regex;
use std::sync::LazyLock;

/// Capture group name used when nothing else has been configured.
pub const DEFAULT_VERSION_KEY: &str = "version";

/// Minimum number of digits a formatted version number is padded to.
pub const DEFAULT_PADDING: usize = 3;

/// Literal text placed before the digits of a version name.
pub const DEFAULT_PREFIX: &str = "v";

/// Number handed out as "next" when no version exists yet.
pub const DEFAULT_INITIAL_NUMBER: u64 = 1;

/// Names that are valid as a regex capture group (and therefore as a version key).
pub static GROUP_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());
