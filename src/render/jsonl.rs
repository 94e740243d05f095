//! JSON Lines renderers — one record per line for dataset tooling.

use super::presentation::training_pairs;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::model::ApiElement;
use crate::render::Renderer;
use serde::Serialize;

/// `{"instruction", "input", "output"}` per line, 1–4 lines per element.
pub struct PairsRenderer {
    config: ScanConfig,
}

impl PairsRenderer {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

impl Renderer for PairsRenderer {
    fn render(&self, elements: &[ApiElement]) -> Result<String> {
        let mut out = String::new();
        for element in elements {
            for pair in training_pairs(element, &self.config) {
                out.push_str(&serde_json::to_string(&pair)?);
                out.push('\n');
            }
        }
        Ok(out)
    }
}

/// Raw element records, with the derived `full_name` alongside.
pub struct ElementsRenderer;

#[derive(Serialize)]
struct ElementRecord<'a> {
    full_name: String,
    #[serde(flatten)]
    element: &'a ApiElement,
}

impl Renderer for ElementsRenderer {
    fn render(&self, elements: &[ApiElement]) -> Result<String> {
        let mut out = String::new();
        for element in elements {
            let record = ElementRecord {
                full_name: element.full_name(),
                element,
            };
            out.push_str(&serde_json::to_string(&record)?);
            out.push('\n');
        }
        Ok(out)
    }
}
