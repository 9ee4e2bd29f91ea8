use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// Importance classification of a marker.
///
/// Ordered so that `Error` ranks highest, but filtering only ever uses set
/// membership, never the ordering.
#[derive(
    Clone,
    Debug,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Hint,
    #[strum(serialize = "information", to_string = "info")]
    #[serde(alias = "information")]
    Info,
    #[strum(serialize = "warning", to_string = "warn")]
    #[serde(alias = "warning")]
    Warn,
    Error,
}
