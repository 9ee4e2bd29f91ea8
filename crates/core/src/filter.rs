use serde::{Deserialize, Serialize};

use crate::{Marker, Severity, SourcePattern, MATCH_ALL};

/// Severities kept when the caller names none.
pub const DEFAULT_SEVERITY: [Severity; 2] = [Severity::Error, Severity::Warn];

/// What to keep when narrowing a set of markers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterOptions {
    /// Severities to keep. Empty means errors and warnings.
    pub severity: Vec<Severity>,
    /// Source patterns in priority order. The first pattern that matches
    /// anything claims the result.
    pub source: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> FilterOptions {
        FilterOptions {
            severity: DEFAULT_SEVERITY.to_vec(),
            source: vec![],
        }
    }
}

impl FilterOptions {
    /// Whether the severity selection narrows down to errors alone.
    pub fn is_error_only(&self) -> bool {
        !self.severity.is_empty() && self.severity.iter().all(|sev| *sev == Severity::Error)
    }
}

/// Narrow `markers` down to the ones `options` keeps.
///
/// Severity is a plain membership test. Source patterns are tried in order
/// and the first pattern with at least one match wins exclusively, so a
/// marker matching only a later pattern is dropped once an earlier pattern
/// has claimed the result. Markers without a source never match a pattern.
pub fn filter<'a>(markers: &'a [Marker], options: &FilterOptions) -> Vec<&'a Marker> {
    let severity: &[Severity] = if options.severity.is_empty() {
        &DEFAULT_SEVERITY
    } else {
        &options.severity
    };
    let current: Vec<&Marker> = markers
        .iter()
        .filter(|marker| severity.contains(&marker.severity()))
        .collect();

    if options.source.is_empty() || current.is_empty() {
        return current;
    }

    for pattern in &options.source {
        if pattern == MATCH_ALL {
            return current;
        }
        let pattern = match SourcePattern::new(pattern) {
            Ok(pat) => pat,
            Err(e) => {
                log::debug!("Skipping unusable source pattern {pattern:?}: {e}");
                continue;
            }
        };
        let matched: Vec<&Marker> = current
            .iter()
            .filter(|marker| {
                marker
                    .source()
                    .map(|source| pattern.is_match(source))
                    .unwrap_or(false)
            })
            .copied()
            .collect();
        if !matched.is_empty() {
            return matched;
        }
    }

    vec![]
}
