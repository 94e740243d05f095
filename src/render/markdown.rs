//! Markdown renderer — one section per element, for eyeballing a scan.

use super::presentation::{build_output, prompts};
use crate::config::ScanConfig;
use crate::error::Result;
use crate::model::ApiElement;
use crate::render::Renderer;

pub struct MarkdownRenderer {
    config: ScanConfig,
}

impl MarkdownRenderer {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, elements: &[ApiElement]) -> Result<String> {
        let mut output = String::new();

        for element in elements {
            output.push_str(&format!("## {}\n\n", element.full_name()));
            output.push_str(&format!("*{}*\n\n", element.kind));
            output.push_str(&build_output(element, &self.config));
            output.push_str("\n\n");

            // Prompts this element expands to
            for prompt in prompts(element, &self.config) {
                output.push_str(&format!("> {}\n", prompt));
            }
            output.push('\n');
        }

        Ok(output)
    }
}
