use regex::Regex;
use thiserror::Error;

/// Pattern that matches any source outright.
pub const MATCH_ALL: &str = "*";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Failed to compile pattern: {0}")]
    Compile(#[from] regex::Error),
}

/// Source name matcher.
///
/// `*` matches any run of characters, everything else stands for itself.
/// There is no other syntax. `?`, `|` and brackets are plain text, so a
/// source named `jsonc|json` is matched by the pattern `jsonc|json` and
/// nothing shorter.
#[derive(Debug)]
pub struct SourcePattern {
    regex: Regex,
}

impl SourcePattern {
    pub fn new(pattern: &str) -> Result<SourcePattern, PatternError> {
        let mut regexp = String::from("(?s)^");
        let parts: Vec<String> = pattern.split('*').map(regex::escape).collect();
        regexp.push_str(&parts.join(".*"));
        regexp.push('$');
        let regex = Regex::new(&regexp)?;
        Ok(SourcePattern { regex })
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}
