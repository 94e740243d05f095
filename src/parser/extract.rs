//! Declaration extractor — line-by-line state machine over one source unit.
//!
//! Pending `///` docs and `@available` lines accumulate until a declaration
//! consumes them or unrelated code invalidates them. Eligibility is decided
//! inline so discarded declarations never have their strings assembled.

use super::classify::{self, LineClass};
use super::nesting::NestingTracker;
use super::Scanner;
use crate::model::ApiElement;
use regex::Regex;

// -- Extractor state ----------------------------------------------------------

#[derive(Default)]
struct ExtractState<'a> {
    elements: Vec<ApiElement>,
    doc_lines: Vec<&'a str>,
    avail_lines: Vec<&'a str>,
    nesting: NestingTracker,
}

impl ExtractState<'_> {
    fn clear_pending(&mut self) {
        self.doc_lines.clear();
        self.avail_lines.clear();
    }
}

// -- Public API ---------------------------------------------------------------

/// Extract eligible elements from one unit's text, in line order.
pub fn extract(scanner: &Scanner, input: &str, source_file: &str) -> Vec<ApiElement> {
    let mut state = ExtractState::default();

    // A lone `\r` also ends a line.
    for line in input.lines().flat_map(|l| l.split('\r')) {
        process_line(scanner, &mut state, line, source_file);
    }

    state.elements
}

// -- Line processing ----------------------------------------------------------

fn process_line<'a>(
    scanner: &Scanner,
    s: &mut ExtractState<'a>,
    line: &'a str,
    source_file: &str,
) {
    let stripped = match classify::classify(line) {
        LineClass::Doc(_) => {
            // Whole line; the marker is stripped once, in `clean_doc`.
            s.doc_lines.push(line.trim());
            return;
        }
        LineClass::Availability(text) => {
            s.avail_lines.push(text);
            return;
        }
        LineClass::Candidate(text) => text,
    };

    let decl = scanner.declarations.match_line(stripped);

    match decl {
        Some(decl) => {
            // Parent comes from the stack as it stood before this line's braces.
            let parent_type = decl
                .kind
                .is_member()
                .then(|| s.nesting.parent().map(str::to_string))
                .flatten();
            let verdict = scanner.availability.interpret(s.avail_lines.as_slice());

            if verdict.is_eligible(scanner.config.min_version) {
                let mut signature_lines = s.avail_lines.clone();
                signature_lines.push(stripped);

                s.elements.push(ApiElement {
                    name: decl.name.to_string(),
                    kind: decl.kind,
                    signature: signature_lines.join("\n"),
                    doc: clean_doc(&scanner.blank_runs, &s.doc_lines),
                    introduced: verdict.introduced,
                    deprecated: verdict.deprecated,
                    unavailable: verdict.unavailable,
                    parent_type,
                    source_file: source_file.to_string(),
                });
            }
            s.clear_pending();
        }
        None => {
            // Stray code detaches pending context; comments, blank lines and
            // attribute-only lines keep it.
            if !stripped.is_empty()
                && !classify::is_comment(stripped)
                && !classify::is_attribute(stripped)
            {
                s.clear_pending();
            }
        }
    }

    let declared_type = decl.filter(|d| d.kind.is_type()).map(|d| d.name);
    s.nesting.update(line, declared_type);
}

/// Join doc lines, dropping leftover marker slashes and collapsing runs of
/// blank lines to one.
fn clean_doc(blank_runs: &Regex, lines: &[&str]) -> String {
    let joined = lines
        .iter()
        .map(|l| l.trim_start_matches('/').trim())
        .collect::<Vec<_>>()
        .join("\n");
    blank_runs
        .replace_all(joined.trim(), "\n\n")
        .trim()
        .to_string()
}
