use anyhow::{Context, Result};
use regex::Regex;

/// Whole-word, case-sensitive NA marker.
const NA_PATTERN: &str = r"\bNA\b";

pub struct NaMatcher {
    regex: Regex,
}

impl NaMatcher {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(NA_PATTERN)
            .with_context(|| format!("Failed to compile NA pattern: {}", NA_PATTERN))?;
        Ok(Self { regex })
    }

    /// Count standalone `NA` tokens. `NAME`, `BANANA` and `NA_1` do not count.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}
