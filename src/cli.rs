use clap::{Parser, Subcommand};
use std::path::PathBuf;
use verscan::{MatchMode, TargetKind, VersionKey};

#[derive(Parser, Debug)]
#[command(name = "verscan", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the latest existing version
    Latest(ScanArgs),
    /// Print the next version to allocate
    Next(ScanArgs),
}

impl Commands {
    pub fn scan_args(&self) -> &ScanArgs {
        match self {
            Commands::Latest(a) | Commands::Next(a) => a,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Name pattern containing `<version>` or an explicit `(?P<version>...)` group
    pub pattern: String,

    /// Names to scan instead of a directory
    pub names: Vec<String>,

    /// Directory to scan (defaults to the current directory)
    #[arg(long, conflicts_with = "names")]
    pub dir: Option<PathBuf>,

    /// Which directory entries to scan: file, dir or both
    #[arg(long, default_value = "file")]
    pub kind: TargetKind,

    /// Minimum number of digits in a version
    #[arg(long, default_value_t = verscan::consts::DEFAULT_PADDING)]
    pub padding: usize,

    /// Literal text before the digits
    #[arg(long, default_value = verscan::consts::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Number to hand out when no version exists
    #[arg(long, default_value_t = verscan::consts::DEFAULT_INITIAL_NUMBER)]
    pub initial: u64,

    /// Match the pattern anywhere in a name instead of the whole name
    #[arg(short, long)]
    pub search: bool,

    /// Capture group name of the version token
    #[arg(long, default_value = verscan::consts::DEFAULT_VERSION_KEY)]
    pub key: VersionKey,

    /// Print the full name (or path) instead of the version name
    #[arg(long)]
    pub full: bool,

    /// Print the whole resolution as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ScanArgs {
    pub fn match_mode(&self) -> MatchMode {
        if self.search {
            MatchMode::Substring
        } else {
            MatchMode::FullMatch
        }
    }
}
