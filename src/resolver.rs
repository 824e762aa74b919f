use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::pattern::{CompiledPattern, NamePattern};
use serde::Serialize;
use std::ops::Range;
use std::sync::OnceLock;

/// The highest version found in a candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    pub number: u64,
    /// Captured version text, e.g. `v003`.
    pub name: String,
    pub full_name: String,
    /// Byte range of `name` inside `full_name`.
    #[serde(skip)]
    pub span: Range<usize>,
}

/// Finds the latest and next version among a list of names.
///
/// ```
/// use verscan::VersionResolver;
///
/// let names = ["dog_v001", "dog_v002", "dog_v003", "dog_v004_cat"];
/// let resolver = VersionResolver::new(names, "^dog_<version>$");
/// assert_eq!(resolver.latest_version_name()?.as_deref(), Some("v003"));
/// assert_eq!(resolver.next_version_name()?, "v004");
/// # Ok::<(), verscan::Error>(())
/// ```
#[derive(Debug)]
pub struct VersionResolver {
    targets: Vec<String>,
    pattern: NamePattern,
    config: ResolverConfig,
    compiled: OnceLock<CompiledPattern>,
}

impl VersionResolver {
    /// Create a resolver with the default configuration.
    pub fn new<I, S>(targets: I, template: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(targets, template, &ResolverConfig::default())
    }

    pub fn with_config<I, S>(targets: I, template: &str, config: &ResolverConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            pattern: NamePattern::new(template),
            config: config.clone(),
            compiled: OnceLock::new(),
        }
    }

    /// Replace the candidate list. The compiled pattern is kept.
    pub fn set_targets<I, S>(&mut self, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn template(&self) -> &str {
        self.pattern.template()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Compile the template, once per resolver.
    pub fn compile(&self) -> Result<&CompiledPattern> {
        if let Some(compiled) = self.compiled.get() {
            return Ok(compiled);
        }
        let compiled = self.pattern.compile(&self.config)?;
        Ok(self.compiled.get_or_init(|| compiled))
    }

    /// Scan every candidate and keep the highest version.
    ///
    /// When several candidates share the highest number, the first one wins.
    pub fn latest_version(&self) -> Result<Option<ResolvedVersion>> {
        let compiled = self.compile()?;
        let mut latest: Option<ResolvedVersion> = None;

        for candidate in &self.targets {
            let Some((number, span)) = compiled.extract(candidate)? else {
                continue;
            };
            tracing::trace!(candidate = %candidate, number, "matched candidate");

            if latest.as_ref().is_none_or(|l| number > l.number) {
                latest = Some(ResolvedVersion {
                    number,
                    name: candidate[span.clone()].to_string(),
                    full_name: candidate.clone(),
                    span,
                });
            }
        }

        match &latest {
            Some(v) => tracing::debug!(name = %v.name, full_name = %v.full_name, "latest version"),
            None => tracing::debug!(template = %self.template(), "no version found"),
        }
        Ok(latest)
    }

    pub fn latest_version_number(&self) -> Result<Option<u64>> {
        Ok(self.latest_version()?.map(|v| v.number))
    }

    pub fn latest_version_name(&self) -> Result<Option<String>> {
        Ok(self.latest_version()?.map(|v| v.name))
    }

    pub fn latest_full_name(&self) -> Result<Option<String>> {
        Ok(self.latest_version()?.map(|v| v.full_name))
    }

    /// One past the latest version, or the initial number when none exists.
    pub fn next_version_number(&self) -> Result<u64> {
        self.next_from(self.latest_version()?.as_ref())
    }

    pub fn next_version_name(&self) -> Result<String> {
        Ok(self.config.format_version_name(self.next_version_number()?))
    }

    /// The latest candidate with its version token swapped for the next one,
    /// e.g. `dog_v003.txt` becomes `dog_v004.txt`.
    ///
    /// Returns `None` when there is no existing version to derive it from.
    pub fn next_full_name(&self) -> Result<Option<String>> {
        let Some(latest) = self.latest_version()? else {
            return Ok(None);
        };
        let next_name = self.config.format_version_name(self.next_from(Some(&latest))?);
        let mut full_name = latest.full_name;
        full_name.replace_range(latest.span, &next_name);
        Ok(Some(full_name))
    }

    fn next_from(&self, latest: Option<&ResolvedVersion>) -> Result<u64> {
        match latest {
            Some(v) => v
                .number
                .checked_add(1)
                .ok_or(Error::Overflow { number: v.number }),
            None => Ok(self.config.initial_number),
        }
    }
}
