//! Renderer module — trait-based format dispatch.

pub mod jsonl;
pub mod markdown;
pub mod presentation;

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::model::ApiElement;
use std::io::Write;

/// Trait for rendering an ordered element sequence into one output format.
pub trait Renderer {
    fn render(&self, elements: &[ApiElement]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, config: &ScanConfig) -> Result<Box<dyn Renderer>> {
    match format {
        "pairs" | "jsonl" => Ok(Box::new(jsonl::PairsRenderer::new(config.clone()))),
        "elements" | "json" => Ok(Box::new(jsonl::ElementsRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(config.clone()))),
        _ => Err(Error::InvalidConfig(format!(
            "unknown format: {}. Use pairs, elements, or markdown",
            format
        ))),
    }
}

/// Render `elements` and write the result to `out`.
pub fn write_rendered(
    renderer: &dyn Renderer,
    elements: &[ApiElement],
    out: &mut dyn Write,
) -> Result<()> {
    let text = renderer.render(elements)?;
    out.write_all(text.as_bytes()).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)
}
