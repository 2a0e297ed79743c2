//! Handlebars-based template renderer.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so any
//! `{{variable}}` referenced in a template must be present in the data context.
//! A typo such as `{{projectname}}` is reported instead of silently producing a
//! class with no name.
//!
//! HTML escaping is turned off. Values land in C++ and CMake files verbatim.
//!
//! ## Usage
//!
//! ```ignore
//! use ds_scaffold_core::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "projectName": "Widget" });
//! let output = renderer.render(embedded::HEADER, &data)?;
//! ```

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, ScaffoldError};

/// Template renderer for generated project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
