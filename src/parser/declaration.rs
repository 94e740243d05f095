//! Declaration matching on candidate lines.
//!
//! Leading attributes and modifiers are peeled off first so the patterns only
//! ever look at the declaration keyword:
//!
//! ```text
//! @MainActor public static func reset()   →   func reset()
//! nonisolated(unsafe) public var shared    →   var shared
//! public class var layerClass              →   var layerClass
//! ```

use crate::error::Result;
use crate::model::ElementKind;
use regex::Regex;

/// Visibility modifiers; each may carry a `(set)` argument.
const VISIBILITY: &[&str] = &["public", "open", "internal", "fileprivate", "private", "package"];

/// Other leading modifiers stripped unconditionally.
const MODIFIERS: &[&str] = &[
    "static",
    "mutating",
    "consuming",
    "borrowing",
    "isolated",
    "rethrows",
    "nonisolated",
    "inlinable",
    "convenience",
];

/// Keywords after which a leading `class` is a modifier rather than a type.
const MEMBER_KEYWORDS: &[&str] = &["func", "var", "let", "init", "subscript"];

/// A matched declaration: kind plus name borrowed from the normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub kind: ElementKind,
    pub name: &'a str,
}

/// Compiled declaration patterns, tried in order: type, func, init, property.
#[derive(Debug, Clone)]
pub struct DeclarationMatcher {
    type_decl: Regex,
    func_decl: Regex,
    init_decl: Regex,
    prop_decl: Regex,
}

impl DeclarationMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            type_decl: Regex::new(r"^(class|struct|enum|actor|protocol)\s+(\w+)")?,
            func_decl: Regex::new(r"^func\s+(\w+)")?,
            init_decl: Regex::new(r"^init\b")?,
            prop_decl: Regex::new(r"^(?:var|let)\s+(\w+)")?,
        })
    }

    /// Normalize `line` and match it against the declaration patterns.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<Declaration<'a>> {
        let normalized = normalize(line);

        if let Some(caps) = self.type_decl.captures(normalized) {
            let keyword = caps.get(1)?.as_str();
            let kind = ElementKind::from_type_keyword(keyword)?;
            let name = caps.get(2)?.as_str();
            return Some(Declaration { kind, name });
        }
        if let Some(caps) = self.func_decl.captures(normalized) {
            return Some(Declaration {
                kind: ElementKind::Func,
                name: caps.get(1)?.as_str(),
            });
        }
        if self.init_decl.is_match(normalized) {
            return Some(Declaration {
                kind: ElementKind::Func,
                name: "init",
            });
        }
        if let Some(caps) = self.prop_decl.captures(normalized) {
            return Some(Declaration {
                kind: ElementKind::Property,
                name: caps.get(1)?.as_str(),
            });
        }
        None
    }
}

/// Strip leading attributes and modifiers until neither remains.
pub fn normalize(line: &str) -> &str {
    let mut rest = line.trim();
    loop {
        if let Some(after) = strip_attribute(rest).or_else(|| strip_modifier(rest)) {
            rest = after;
            continue;
        }
        return rest;
    }
}

fn leading_word(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    &s[..end]
}

/// Skip a balanced `( … )` group at the start of `s`, if present. An unclosed
/// group swallows the rest of the line.
fn skip_parens(s: &str) -> &str {
    if !s.starts_with('(') {
        return s;
    }
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return &s[i + 1..];
                }
            }
            _ => {}
        }
    }
    ""
}

/// `@Name` or `@Name(args)` at the front of the line.
fn strip_attribute(s: &str) -> Option<&str> {
    let after_at = s.strip_prefix('@')?;
    let name = leading_word(after_at);
    if name.is_empty() {
        return None;
    }
    Some(skip_parens(&after_at[name.len()..]).trim_start())
}

fn strip_modifier(s: &str) -> Option<&str> {
    let word = leading_word(s);
    let mut after = &s[word.len()..];

    if VISIBILITY.contains(&word) || word == "nonisolated" {
        // private(set), nonisolated(unsafe)
        after = skip_parens(after);
    } else if word == "class" {
        let next = leading_word(after.trim_start());
        if !(MEMBER_KEYWORDS.contains(&next) || is_modifier(next)) {
            return None;
        }
    } else if !MODIFIERS.contains(&word) {
        return None;
    }

    if !(after.is_empty() || after.starts_with(char::is_whitespace)) {
        return None;
    }
    Some(after.trim_start())
}

fn is_modifier(word: &str) -> bool {
    VISIBILITY.contains(&word) || MODIFIERS.contains(&word) || word == "class"
}
