//! apidecl — recover the documented API surface of Swift interface files.
//!
//! A single forward pass over each file classifies lines, accumulates pending
//! `///` docs and `@available` attributes, and attaches them to the next
//! type, function or property declaration. Elements below the configured
//! minimum platform version, or marked deprecated/unavailable, are dropped
//! inline.
//!
//! ```ignore
//! let scanner = apidecl::Scanner::new(apidecl::ScanConfig::default())?;
//! let elements = apidecl::parser::scan_dir(&scanner, "api_training_data".as_ref())?;
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use config::ScanConfig;
pub use error::{Error, Result};
pub use model::{ApiElement, ElementKind, Verdict, Version};
pub use parser::Scanner;
