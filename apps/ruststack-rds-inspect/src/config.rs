//! Configuration for the inspect binary.
//!
//! All configuration is driven by environment variables.

use std::fmt;

use crate::error::{InspectError, InspectResult};

/// How decoded requests are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The shape's `Display` rendering.
    #[default]
    Text,
    /// The canonical JSON document, with unset members omitted.
    Json,
}

impl OutputFormat {
    /// Parse a format name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("text") {
            Some(Self::Text)
        } else if name.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Inspect binary configuration.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Log level filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Output format for decoded requests.
    pub format: OutputFormat,
    /// Reject documents carrying members the request shape does not declare.
    pub strict: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

impl InspectConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> InspectResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which resolves a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> InspectResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("RDS_INSPECT_FORMAT") {
            config.format =
                OutputFormat::from_name(v.trim()).ok_or(InspectError::InvalidConfig {
                    name: "RDS_INSPECT_FORMAT",
                    value: v,
                })?;
        }
        if let Some(v) = lookup("RDS_INSPECT_STRICT") {
            config.strict = v == "1" || v.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = InspectConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
    }

    #[test]
    fn test_should_read_all_variables() {
        let config = InspectConfig::from_lookup(lookup_in(&[
            ("LOG_LEVEL", "debug"),
            ("RDS_INSPECT_FORMAT", "JSON"),
            ("RDS_INSPECT_STRICT", "true"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
    }

    #[test]
    fn test_should_treat_other_strict_values_as_off() {
        for value in ["0", "false", "yes", ""] {
            let config =
                InspectConfig::from_lookup(lookup_in(&[("RDS_INSPECT_STRICT", value)])).unwrap();
            assert!(!config.strict, "{value:?}");
        }
        let config = InspectConfig::from_lookup(lookup_in(&[("RDS_INSPECT_STRICT", "1")])).unwrap();
        assert!(config.strict);
    }

    #[test]
    fn test_should_reject_unknown_format() {
        let err = InspectConfig::from_lookup(lookup_in(&[("RDS_INSPECT_FORMAT", "yaml")]))
            .unwrap_err();
        assert!(matches!(
            err,
            InspectError::InvalidConfig { name: "RDS_INSPECT_FORMAT", ref value } if value == "yaml"
        ));
        assert_eq!(err.to_string(), "invalid value for RDS_INSPECT_FORMAT: yaml");
    }

    #[test]
    fn test_should_display_format_names() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::from_name("Text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("xml"), None);
    }
}
