//! `@available` interpretation for a single platform.

use crate::error::Result;
use crate::model::{Verdict, Version};
use regex::Regex;

const VERSION: &str = r"([0-9]+(?:\.[0-9]+)?)";

/// Compiled availability patterns for one platform keyword.
#[derive(Debug, Clone)]
pub struct AvailabilityInterpreter {
    platform: String,
    /// `@available(iOS 17.0, macOS 14.0, *)`
    direct: Regex,
    /// `@available(iOS, introduced: 17.0, deprecated: 18.0)`
    keyed: Regex,
}

impl AvailabilityInterpreter {
    pub fn new(platform: &str) -> Result<Self> {
        let direct = Regex::new(&format!(r"{}\s+{}", regex::escape(platform), VERSION))?;
        let keyed = Regex::new(&format!(r"introduced:\s*{}", VERSION))?;
        Ok(Self {
            platform: platform.to_string(),
            direct,
            keyed,
        })
    }

    /// Fold the pending attribute lines into a verdict.
    ///
    /// Lines that never mention the platform are ignored. Flags are sticky;
    /// the introduced version is overwritten by each later line that carries
    /// one, with the direct form taking precedence within a line.
    pub fn interpret<S: AsRef<str>>(&self, lines: &[S]) -> Verdict {
        let mut verdict = Verdict::default();

        for raw in lines {
            let line = raw.as_ref().trim();
            if !line.contains(self.platform.as_str()) {
                continue;
            }

            if line.contains("unavailable") {
                verdict.unavailable = true;
            }
            if line.contains("deprecated") || line.contains("obsoleted") {
                verdict.deprecated = true;
            }

            let version = self
                .direct
                .captures(line)
                .or_else(|| self.keyed.captures(line))
                .map(|caps| Version::from_dotted(&caps[1]));
            if version.is_some() {
                verdict.introduced = version;
            }
        }

        verdict
    }
}
