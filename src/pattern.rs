use crate::config::{MatchMode, ResolverConfig};
use crate::error::{Error, Result};
use crate::key::VersionKey;
use regex::Regex;
use std::ops::Range;

/// A user template describing which names carry a version.
///
/// The template is a regular expression that either spells out the version
/// group itself, e.g. `shot_(?P<version>v\d{2})\.ma`, or uses the `<version>`
/// placeholder and lets the configured prefix and padding fill it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    template: String,
}

impl NamePattern {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Expand the template into a regular expression with one named group
    /// for the configured key.
    pub fn resolve(&self, config: &ResolverConfig) -> Result<String> {
        let key = &config.version_key;

        if key
            .group_openers()
            .iter()
            .any(|opener| self.template.contains(opener.as_str()))
        {
            return Ok(self.template.clone());
        }

        let placeholder = key.placeholder();
        if self.template.contains(&placeholder) {
            // `\d{0}` would capture the bare prefix.
            if config.padding == 0 {
                return Err(Error::Configuration(format!(
                    "placeholder `{placeholder}` needs a padding of at least 1"
                )));
            }
            let group = format!(
                r"(?P<{key}>{prefix}\d{{{padding}}})",
                prefix = regex::escape(&config.prefix),
                padding = config.padding,
            );
            return Ok(self.template.replace(&placeholder, &group));
        }

        Err(Error::VersionKey {
            key: key.to_string(),
            template: self.template.clone(),
        })
    }

    /// Resolve and compile the template for the configured match mode.
    pub fn compile(&self, config: &ResolverConfig) -> Result<CompiledPattern> {
        let resolved = self.resolve(config)?;
        let source = match config.match_mode {
            MatchMode::FullMatch => format!("^(?:{resolved})$"),
            MatchMode::Substring => resolved,
        };
        let regex = Regex::new(&source)?;
        tracing::debug!(template = %self.template, regex = %regex, "compiled name pattern");

        Ok(CompiledPattern {
            regex,
            key: config.version_key.clone(),
            prefix: config.prefix.clone(),
        })
    }
}

/// A compiled template, ready to pull version numbers out of candidates.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    key: VersionKey,
    prefix: String,
}

impl CompiledPattern {
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Match `candidate` and return its version number together with the byte
    /// range the version group covers, or `None` when it does not match.
    pub fn extract(&self, candidate: &str) -> Result<Option<(u64, Range<usize>)>> {
        let Some(captures) = self.regex.captures(candidate) else {
            return Ok(None);
        };
        // An optional group can sit out a successful match.
        let Some(group) = captures.name(self.key.as_str()) else {
            tracing::trace!(candidate, "matched without a version group");
            return Ok(None);
        };

        let number = parse_version_number(group.as_str(), &self.prefix)?;
        Ok(Some((number, group.range())))
    }
}

/// Strip the literal `prefix` off `captured` and read the rest as a decimal number.
pub fn parse_version_number(captured: &str, prefix: &str) -> Result<u64> {
    let parse_error = || Error::Parse {
        captured: captured.to_string(),
        prefix: prefix.to_string(),
    };

    let digits = captured.strip_prefix(prefix).ok_or_else(parse_error)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }
    digits.parse::<u64>().map_err(|_| parse_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::format_version_name;

    fn config() -> ResolverConfig {
        ResolverConfig::default().version_key(VersionKey::default())
    }

    #[test]
    fn placeholder_expands_with_prefix_and_padding() {
        let pattern = NamePattern::new(r"^dog_<version>\.txt$");
        assert_eq!(
            pattern.resolve(&config()).unwrap(),
            r"^dog_(?P<version>v\d{3})\.txt$"
        );
        assert_eq!(
            pattern.resolve(&config().prefix("ver").padding(2)).unwrap(),
            r"^dog_(?P<version>ver\d{2})\.txt$"
        );
    }

    #[test]
    fn prefix_is_escaped() {
        let pattern = NamePattern::new("shot<version>");
        assert_eq!(
            pattern.resolve(&config().prefix(".v")).unwrap(),
            r"shot(?P<version>\.v\d{3})"
        );
    }

    #[test]
    fn explicit_group_is_left_alone() {
        for template in [r"^rat_(?P<version>v\d{2})$", r"^rat_(?<version>v\d{2})$"] {
            let pattern = NamePattern::new(template);
            assert_eq!(pattern.resolve(&config()).unwrap(), template);
        }
    }

    #[test]
    fn missing_key_is_a_version_key_error() {
        let pattern = NamePattern::new("^dog_<version_name>$");
        let err = pattern.resolve(&config()).unwrap_err();
        assert!(
            matches!(&err, Error::VersionKey { key, .. } if key == "version"),
            "{err}"
        );
    }

    #[test]
    fn detection_follows_configured_key() {
        let pattern = NamePattern::new("^dog_<version_name>$");
        let renamed = config().version_key(VersionKey::new("version_name").unwrap());
        assert_eq!(
            pattern.resolve(&renamed).unwrap(),
            r"^dog_(?P<version_name>v\d{3})$"
        );

        let explicit = NamePattern::new(r"^dog_(?P<version>v\d{3})$");
        assert!(matches!(
            explicit.resolve(&renamed),
            Err(Error::VersionKey { .. })
        ));
    }

    #[test]
    fn full_match_anchors_the_whole_name() {
        let compiled = NamePattern::new("dog_<version>").compile(&config()).unwrap();
        assert_eq!(compiled.extract("dog_v004").unwrap(), Some((4, 4..8)));
        assert_eq!(compiled.extract("dog_v004_cat").unwrap(), None);
        assert_eq!(compiled.extract("big_dog_v004").unwrap(), None);
    }

    #[test]
    fn full_match_wraps_alternations() {
        let compiled = NamePattern::new("cat_<version>|dog")
            .compile(&config())
            .unwrap();
        assert_eq!(compiled.extract("cat_v002x").unwrap(), None);
        assert_eq!(compiled.extract("dog").unwrap(), None);
        assert_eq!(compiled.extract("cat_v002").unwrap(), Some((2, 4..8)));
    }

    #[test]
    fn substring_finds_inner_match() {
        let compiled = NamePattern::new("dog_<version>")
            .compile(&config().match_mode(MatchMode::Substring))
            .unwrap();
        assert_eq!(compiled.extract("dog_v004_cat").unwrap(), Some((4, 4..8)));
    }

    #[test]
    fn extract_reports_the_group_span_not_the_first_lookalike() {
        let compiled = NamePattern::new(r"\w+_shot_<version>")
            .compile(&config())
            .unwrap();
        let (number, span) = compiled.extract("v001_shot_v001").unwrap().unwrap();
        assert_eq!(number, 1);
        assert_eq!(span, 10..14);
    }

    #[test]
    fn zero_padding_placeholder_is_rejected() {
        let err = NamePattern::new("^s_<version>$")
            .resolve(&config().padding(0))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "{err}");

        // An explicit group does not depend on padding.
        let explicit = NamePattern::new(r"^s_(?P<version>v\d+)$")
            .compile(&config().padding(0))
            .unwrap();
        assert_eq!(explicit.extract("s_v12").unwrap(), Some((12, 2..5)));
    }

    #[test]
    fn duplicate_placeholders_fail_to_compile() {
        let result = NamePattern::new("<version>_<version>").compile(&config());
        assert!(matches!(result, Err(Error::Pattern(_))));
    }

    #[test]
    fn mismatched_custom_prefix_is_a_parse_error() {
        let compiled = NamePattern::new(r"^dog_(?P<version>ver\d{3})$")
            .compile(&config())
            .unwrap();
        let err = compiled.extract("dog_ver003").unwrap_err();
        assert!(
            matches!(&err, Error::Parse { captured, prefix } if captured == "ver003" && prefix == "v"),
            "{err}"
        );
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!(parse_version_number("v007", "v").unwrap(), 7);
        assert_eq!(parse_version_number("12", "").unwrap(), 12);
        assert!(parse_version_number("v", "v").is_err());
        assert!(parse_version_number("v+12", "v").is_err());
        assert!(parse_version_number("x12", "v").is_err());
        assert!(parse_version_number("v99999999999999999999999", "v").is_err());
    }

    #[test]
    fn formatted_names_parse_back() {
        for padding in [0, 1, 3, 5] {
            for number in [0, 1, 9, 42, 999, 1000, 123_456] {
                let name = format_version_name("v", number, padding);
                assert_eq!(parse_version_number(&name, "v").unwrap(), number, "{name}");
            }
        }
    }
}
