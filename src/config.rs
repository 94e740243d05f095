//! Scanner configuration.
//!
//! Built once at startup (from CLI flags or [`ScanConfig::default`]) and
//! handed to [`crate::Scanner::new`], which compiles its patterns from it.

use crate::error::{Error, Result};
use crate::model::Version;

/// Default platform keyword looked up in `@available` attributes.
pub const DEFAULT_PLATFORM: &str = "iOS";

/// Default minimum introduced version for an element to be kept.
pub const DEFAULT_MIN_VERSION: Version = Version::new(17, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Platform keyword, e.g. `iOS` or `macOS`.
    pub platform: String,
    pub min_version: Version,
    /// File extension (without dot) globbed in input directories; also the
    /// code fence tag in rendered output.
    pub extension: String,
    /// Human-readable language name used in prompts.
    pub language: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_string(),
            min_version: DEFAULT_MIN_VERSION,
            extension: "swift".to_string(),
            language: "Swift".to_string(),
        }
    }
}

impl ScanConfig {
    /// Reject configurations that would make every line (or no line) match.
    pub fn validate(&self) -> Result<()> {
        if self.platform.trim().is_empty() {
            return Err(Error::InvalidConfig("platform keyword is empty".into()));
        }
        if self.platform.chars().any(char::is_whitespace) {
            return Err(Error::InvalidConfig(format!(
                "platform keyword contains whitespace: {:?}",
                self.platform
            )));
        }
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '*', '?', '[']) {
            return Err(Error::InvalidConfig(format!(
                "invalid file extension: {:?}",
                self.extension
            )));
        }
        Ok(())
    }

    /// Extension without any leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Availability summary for a version, e.g. `iOS 17.0+`.
    pub fn availability_label(&self, version: Option<Version>) -> String {
        format!("{} {}+", self.platform, version.unwrap_or(self.min_version))
    }
}
