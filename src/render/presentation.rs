//! Presentation builder — one element to display text and instruction pairs.

use crate::config::ScanConfig;
use crate::model::{ApiElement, ElementKind};
use serde::Serialize;

/// One instruction-tuning example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingPair {
    pub instruction: String,
    pub input: String,
    pub output: String,
}

/// Availability summary for an element, e.g. `iOS 17.0+`.
pub fn availability_summary(element: &ApiElement, config: &ScanConfig) -> String {
    config.availability_label(element.introduced)
}

/// Doc, declaration block, availability, parent and source, one per paragraph.
pub fn build_output(element: &ApiElement, config: &ScanConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !element.doc.is_empty() {
        parts.push(element.doc.clone());
        parts.push(String::new());
    }

    parts.push("Declaration:".to_string());
    parts.push(format!("```{}", config.extension()));
    parts.push(element.signature.trim().to_string());
    parts.push("```".to_string());
    parts.push(String::new());

    parts.push(format!("Availability: {}", availability_summary(element, config)));
    if let Some(ref parent) = element.parent_type {
        parts.push(format!("Member of: {}", parent));
    }
    parts.push(format!("Source: {}", element.source_name()));

    parts.join("\n").trim().to_string()
}

/// Prompts for an element; every prompt shares the same output text.
pub fn prompts(element: &ApiElement, config: &ScanConfig) -> Vec<String> {
    let base = element.full_name();
    let avail = availability_summary(element, config);

    match element.kind {
        ElementKind::Func => vec![
            format!("How do I use {}() on {}?", base, avail),
            format!(
                "Describe the purpose of {} and show its declaration for {}.",
                base, avail
            ),
        ],
        ElementKind::Property => vec![
            format!("What does {} provide on {}?", base, avail),
            format!("Document the property {} for {}.", base, avail),
        ],
        kind => vec![
            format!("Explain the {} {} for {}.", kind, base, avail),
            format!(
                "Show the {} declaration and summary for {} on {}.",
                config.language, base, avail
            ),
        ],
    }
}

/// Expand one element into its instruction/output pairs.
pub fn training_pairs(element: &ApiElement, config: &ScanConfig) -> Vec<TrainingPair> {
    let output = build_output(element, config);
    prompts(element, config)
        .into_iter()
        .map(|instruction| TrainingPair {
            instruction,
            input: String::new(),
            output: output.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Version;

    fn method() -> ApiElement {
        ApiElement {
            name: "reload".into(),
            kind: ElementKind::Func,
            signature: "@available(iOS 17.0, *)\npublic func reload()".into(),
            doc: "Reloads the data.".into(),
            introduced: Some(Version::new(17, 0)),
            deprecated: false,
            unavailable: false,
            parent_type: Some("Table".into()),
            source_file: "api/UIKit.swift".into(),
        }
    }

    #[test]
    fn output_layout() {
        let out = build_output(&method(), &ScanConfig::default());
        assert_eq!(
            out,
            "Reloads the data.\n\
             \n\
             Declaration:\n\
             ```swift\n\
             @available(iOS 17.0, *)\n\
             public func reload()\n\
             ```\n\
             \n\
             Availability: iOS 17.0+\n\
             Member of: Table\n\
             Source: UIKit.swift"
        );
    }

    #[test]
    fn output_without_doc_or_parent() {
        let mut e = method();
        e.doc.clear();
        e.parent_type = None;
        let out = build_output(&e, &ScanConfig::default());
        assert!(out.starts_with("Declaration:\n```swift\n"));
        assert!(!out.contains("Member of"));
        assert!(out.ends_with("Availability: iOS 17.0+\nSource: UIKit.swift"));
    }

    #[test]
    fn function_prompts_use_full_name() {
        let p = prompts(&method(), &ScanConfig::default());
        assert_eq!(
            p,
            [
                "How do I use Table.reload() on iOS 17.0+?",
                "Describe the purpose of Table.reload and show its declaration for iOS 17.0+.",
            ]
        );
    }

    #[test]
    fn type_prompts_name_the_kind() {
        let mut e = method();
        e.kind = ElementKind::Actor;
        e.name = "Store".into();
        e.introduced = Some(Version::new(18, 1));
        let p = prompts(&e, &ScanConfig::default());
        assert_eq!(p[0], "Explain the actor Store for iOS 18.1+.");
        assert_eq!(p[1], "Show the Swift declaration and summary for Store on iOS 18.1+.");
    }

    #[test]
    fn property_prompts() {
        let mut e = method();
        e.kind = ElementKind::Property;
        e.name = "rows".into();
        let p = prompts(&e, &ScanConfig::default());
        assert_eq!(p[0], "What does Table.rows provide on iOS 17.0+?");
        assert_eq!(p[1], "Document the property Table.rows for iOS 17.0+.");
    }

    #[test]
    fn pairs_share_output() {
        let pairs = training_pairs(&method(), &ScanConfig::default());
        assert!((1..=4).contains(&pairs.len()));
        assert!(pairs.iter().all(|p| p.input.is_empty()));
        assert!(pairs.windows(2).all(|w| w[0].output == w[1].output));
    }
}
