//! The scaffold file table.
//!
//! Maps each template file to the output file it produces. Output names are
//! Handlebars templates themselves, rendered with the same context as the file
//! contents, so `{{projectName}}.h` becomes `Widget.h`.
//!
//! A template directory can override the table with a `ds-scaffold.config.json`:
//!
//! ```json
//! {
//!   "files": [
//!     { "template": "headerFile.template", "output": "{{projectName}}.hpp" },
//!     { "template": "codeFile.template",   "output": "{{projectName}}.cpp" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::templates::embedded;

/// Name of the optional config file inside a template directory.
pub const CONFIG_FILE: &str = "ds-scaffold.config.json";

/// One template → output pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// Template file name, relative to the template source.
    pub template: String,
    /// Output file name template, relative to the project directory.
    pub output: String,
}

impl FileSpec {
    fn new(template: &str, output: &str) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    pub files: Vec<FileSpec>,
}

impl Default for ScaffoldConfig {
    /// Build file, header, source and test driver.
    fn default() -> Self {
        Self {
            files: vec![
                FileSpec::new(embedded::CMAKE_LISTS_TEMPLATE, "CMakeLists.txt"),
                FileSpec::new(embedded::HEADER_TEMPLATE, "{{projectName}}.h"),
                FileSpec::new(embedded::CODE_TEMPLATE, "{{projectName}}.cpp"),
                FileSpec::new(embedded::TEST_TEMPLATE, "{{projectName}}Test.cpp"),
            ],
        }
    }
}

impl ScaffoldConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to [`ScaffoldConfig::default`].
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading scaffold config");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject an empty table and duplicate output names.
    ///
    /// Output names can only be compared unrendered here; collisions that appear
    /// after rendering are caught when the plan is built.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(ScaffoldError::InvalidConfig("no files listed".into()));
        }
        let mut seen = HashSet::new();
        for spec in &self.files {
            if spec.template.is_empty() {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "empty template name for output '{}'",
                    spec.output
                )));
            }
            if !seen.insert(spec.output.as_str()) {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "output '{}' listed more than once",
                    spec.output
                )));
            }
        }
        Ok(())
    }
}
