//! Optional TOML configuration for `rdfv report`.
//!
//! ```toml
//! format = "json"
//!
//! [options]
//! host_language = "xhtml"
//! rdfa_lite = true
//! data_format = "ntriples"
//! ```
//!
//! Command-line flags take precedence over file values.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rdfv_model::{DataFormat, HostLanguage, ValidatorOptions};

/// Presentation of the finished report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "html",
            Self::Json => "json",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub options: ValidatorOptions,
}

/// Values given on the command line. `None` and `false` leave the file
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<ReportFormat>,
    pub host_language: Option<HostLanguage>,
    pub rdfa_lite: bool,
    pub embedded_rdf: bool,
    pub vocab_expansion: bool,
    pub data_format: Option<DataFormat>,
}

impl ReportConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), format = %config.format, "loaded config");
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        let ValidatorOptions {
            host_language,
            rdfa_lite,
            embedded_rdf,
            vocab_expansion,
            data_format,
        } = self.options;
        self.options = ValidatorOptions::new()
            .with_host_language(overrides.host_language.or(host_language))
            .with_rdfa_lite(rdfa_lite || overrides.rdfa_lite)
            .with_embedded_rdf(embedded_rdf || overrides.embedded_rdf)
            .with_vocab_expansion(vocab_expansion || overrides.vocab_expansion)
            .with_data_format(overrides.data_format.unwrap_or(data_format));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.options.data_format, DataFormat::Turtle);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ReportConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let config: ReportConfig = toml::from_str(
            "format = \"json\"\n[options]\nhost_language = \"svg\"\ndata_format = \"ntriples\"\n",
        )
        .unwrap();
        let merged = config.with_overrides(&ConfigOverrides {
            host_language: Some(HostLanguage::Html),
            rdfa_lite: true,
            ..ConfigOverrides::default()
        });
        assert_eq!(merged.format, ReportFormat::Json);
        assert_eq!(merged.options.host_language, Some(HostLanguage::Html));
        assert_eq!(merged.options.data_format, DataFormat::NTriples);
        assert!(merged.options.rdfa_lite);
        assert!(!merged.options.embedded_rdf);
    }

    #[test]
    fn file_flags_survive_and_combine_with_overrides() {
        let config: ReportConfig =
            toml::from_str("[options]\nembedded_rdf = true\ndata_format = \"ttl\"\n").unwrap();
        let merged = config.with_overrides(&ConfigOverrides {
            vocab_expansion: true,
            data_format: Some(DataFormat::NTriples),
            ..ConfigOverrides::default()
        });
        assert!(merged.options.embedded_rdf);
        assert!(merged.options.vocab_expansion);
        assert!(!merged.options.rdfa_lite);
        assert_eq!(merged.options.host_language, None);
        assert_eq!(merged.options.data_format, DataFormat::NTriples);
    }

    #[test]
    fn host_language_and_format_aliases_are_accepted() {
        let config: ReportConfig =
            toml::from_str("[options]\nhost_language = \"HTML\"\ndata_format = \"nt\"\n").unwrap();
        assert_eq!(config.options.host_language, Some(HostLanguage::Html));
        assert_eq!(config.options.data_format, DataFormat::NTriples);

        let error = toml::from_str::<ReportConfig>("[options]\ndata_format = \"rdfxml\"\n")
            .unwrap_err();
        assert!(error.to_string().contains("unknown data format"));
    }
}
