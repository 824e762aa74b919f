use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::pattern::CompiledPattern;
use crate::resolver::{ResolvedVersion, VersionResolver};
use crate::scan::{TargetKind, list_entries};
use std::path::{Path, PathBuf};

/// A [`VersionResolver`] whose candidates are the entries of a directory.
///
/// The directory is listed when it is set, and again on [`rescan`](Self::rescan).
/// Changes on disk in between are not picked up.
#[derive(Debug)]
pub struct DirectoryResolver {
    directory: Option<PathBuf>,
    target_kind: TargetKind,
    resolver: VersionResolver,
}

impl DirectoryResolver {
    /// Create a resolver over files in `directory` with the default configuration.
    pub fn new(directory: Option<PathBuf>, template: &str) -> Result<Self> {
        Self::with_config(
            directory,
            template,
            &ResolverConfig::default(),
            TargetKind::default(),
        )
    }

    pub fn with_config(
        directory: Option<PathBuf>,
        template: &str,
        config: &ResolverConfig,
        target_kind: TargetKind,
    ) -> Result<Self> {
        let mut this = Self {
            directory: None,
            target_kind,
            resolver: VersionResolver::with_config(Vec::<String>::new(), template, config),
        };
        if let Some(dir) = directory {
            this.set_directory(dir)?;
        }
        Ok(this)
    }

    /// Point the resolver at `directory` and list it right away.
    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) -> Result<()> {
        self.directory = Some(directory.into());
        self.rescan()
    }

    /// List the current directory again.
    pub fn rescan(&mut self) -> Result<()> {
        let dir = self.directory.as_deref().ok_or(Error::DirectoryNotSet)?;
        let targets = list_entries(dir, self.target_kind)?;
        self.resolver.set_targets(targets);
        Ok(())
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }

    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    pub fn compile(&self) -> Result<&CompiledPattern> {
        self.resolver.compile()
    }

    pub fn latest_version(&self) -> Result<Option<ResolvedVersion>> {
        self.resolver.latest_version()
    }

    pub fn latest_version_number(&self) -> Result<Option<u64>> {
        self.resolver.latest_version_number()
    }

    pub fn latest_version_name(&self) -> Result<Option<String>> {
        self.resolver.latest_version_name()
    }

    pub fn latest_full_name(&self) -> Result<Option<String>> {
        self.resolver.latest_full_name()
    }

    pub fn next_version_number(&self) -> Result<u64> {
        self.resolver.next_version_number()
    }

    pub fn next_version_name(&self) -> Result<String> {
        self.resolver.next_version_name()
    }

    pub fn next_full_name(&self) -> Result<Option<String>> {
        self.resolver.next_full_name()
    }

    /// Full path of the latest entry, or `None` when no version exists.
    pub fn latest_full_path(&self) -> Result<Option<PathBuf>> {
        let name = self.latest_full_name()?;
        Ok(self.join(name))
    }

    /// Full path the next entry would take, derived from the latest one.
    pub fn next_full_path(&self) -> Result<Option<PathBuf>> {
        let name = self.next_full_name()?;
        Ok(self.join(name))
    }

    fn join(&self, name: Option<String>) -> Option<PathBuf> {
        Some(self.directory.as_deref()?.join(name?))
    }
}
