//! Data model for extracted API elements — format-agnostic.

use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A platform version, compared major first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Lenient conversion used on text already matched as `\d+(\.\d+)?`.
    /// Missing segments default to 0; segments past the minor are ignored.
    pub fn from_dotted(text: &str) -> Self {
        let mut parts = text.trim().split('.');
        let mut next = || parts.next().map(parse_segment).unwrap_or(0);
        let major = next();
        let minor = next();
        Self { major, minor }
    }
}

fn parse_segment(segment: &str) -> u32 {
    if segment.is_empty() {
        return 0;
    }
    // Digit-only input that overflows saturates rather than wrapping to 0.
    segment.parse().unwrap_or(u32::MAX)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let well_formed = !s.is_empty()
            && s.split('.').count() <= 2
            && s
                .split('.')
                .all(|seg| !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(Error::InvalidVersion(s.to_string()));
        }
        Ok(Self::from_dotted(s))
    }
}

/// `true` iff `version` is known and `>= threshold`.
pub fn is_at_least(version: Option<Version>, threshold: Version) -> bool {
    version.is_some_and(|v| v >= threshold)
}

/// Closed set of declaration kinds the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Class,
    Struct,
    Enum,
    Actor,
    Protocol,
    Func,
    Property,
}

impl ElementKind {
    /// Map a type-introducing keyword to its kind.
    pub fn from_type_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            "actor" => Some(Self::Actor),
            "protocol" => Some(Self::Protocol),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Actor => "actor",
            Self::Protocol => "protocol",
            Self::Func => "func",
            Self::Property => "property",
        }
    }

    pub fn is_type(self) -> bool {
        !self.is_member()
    }

    /// Functions and properties; the only kinds that carry a parent type.
    pub fn is_member(self) -> bool {
        matches!(self, Self::Func | Self::Property)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability verdict for one platform, derived from `@available` lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    pub introduced: Option<Version>,
    pub deprecated: bool,
    pub unavailable: bool,
}

impl Verdict {
    /// Unknown introduction versions never pass.
    pub fn is_eligible(&self, min_version: Version) -> bool {
        is_at_least(self.introduced, min_version) && !self.deprecated && !self.unavailable
    }
}

/// One extracted, eligible declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiElement {
    pub name: String,
    pub kind: ElementKind,
    /// `@available` lines followed by the declaration line, as written.
    pub signature: String,
    pub doc: String,
    pub introduced: Option<Version>,
    pub deprecated: bool,
    pub unavailable: bool,
    /// Enclosing type; only set for functions and properties.
    pub parent_type: Option<String>,
    pub source_file: String,
}

impl ApiElement {
    /// `Parent.member` for members with a known parent, otherwise the bare name.
    pub fn full_name(&self) -> String {
        match &self.parent_type {
            Some(parent) if self.kind.is_member() => format!("{}.{}", parent, self.name),
            _ => self.name.clone(),
        }
    }

    /// File name component of `source_file`.
    pub fn source_name(&self) -> &str {
        self.source_file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(&self.source_file)
    }
}
