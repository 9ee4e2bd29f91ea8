use std::str::FromStr;

use marknav_core::{FilterOptions, Severity};
use serde::{Deserialize, Serialize};

/// Options as they arrive from a keybinding or a host configuration.
///
/// Severities are plain strings here so a typo cannot fail a whole
/// navigation request. Unknown names are dropped with a log line and an
/// empty list falls back to errors and warnings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationOptions {
    pub severity: Vec<String>,
    pub source: Vec<String>,
    /// Continue from the other end when no marker is left in the
    /// requested direction.
    pub wrap: bool,
}

impl Default for NavigationOptions {
    fn default() -> NavigationOptions {
        NavigationOptions {
            severity: vec![],
            source: vec![],
            wrap: true,
        }
    }
}

impl NavigationOptions {
    pub fn filter(&self) -> FilterOptions {
        let mut severity = vec![];
        for name in &self.severity {
            match Severity::from_str(name) {
                Ok(sev) => severity.push(sev),
                Err(_) => log::debug!("Ignoring unknown severity {name:?}"),
            }
        }

        FilterOptions {
            severity,
            source: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_severities_are_dropped() {
        let options = NavigationOptions {
            severity: vec!["error".into(), "fatal".into(), "warning".into()],
            ..Default::default()
        };
        let filter = options.filter();
        assert_eq!(filter.severity, vec![Severity::Error, Severity::Warn]);
    }

    #[test]
    fn severity_names_are_case_insensitive() {
        let options = NavigationOptions {
            severity: vec!["ERROR".into(), "Information".into()],
            ..Default::default()
        };
        let filter = options.filter();
        assert_eq!(filter.severity, vec![Severity::Error, Severity::Info]);
    }

    #[test]
    fn empty_request_keeps_the_default_filter() {
        let options = NavigationOptions::default();
        assert!(options.wrap);

        let filter = options.filter();
        assert!(filter.severity.is_empty());
        assert!(filter.source.is_empty());
        assert!(!filter.is_error_only());
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: NavigationOptions = toml::from_str("").unwrap();
        assert_eq!(options, NavigationOptions::default());

        let options: NavigationOptions = toml::from_str(
            r#"
            severity = ["error"]
            source = ["clippy", "*"]
            wrap = false
            "#,
        )
        .unwrap();
        assert_eq!(options.severity, vec!["error".to_string()]);
        assert_eq!(
            options.source,
            vec!["clippy".to_string(), "*".to_string()]
        );
        assert!(!options.wrap);
    }
}
