//! Project generation: render everything, then write everything.
//!
//! Generation is split into two phases:
//!
//! 1. [`Scaffolder::plan`] loads every template and renders every file (name and
//!    contents) into a [`ScaffoldPlan`]. Nothing is created on disk.
//! 2. [`ScaffoldPlan::write`] creates the project directory and writes the files.
//!
//! A missing or broken template therefore fails before the project directory
//! exists. A failure during phase 2 (permissions, full disk) can leave the files
//! written before it in place; nothing is rolled back.
//!
//! ## Output layout
//!
//! With the default file table:
//! ```text
//! <output_root>/<name>/
//! ├── CMakeLists.txt
//! ├── <name>.h
//! ├── <name>.cpp
//! └── <name>Test.cpp
//! ```
//!
//! The project directory may already exist. Existing files with the same names
//! are overwritten.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::context::{segment_violation, ProjectContext};
use crate::error::{Result, ScaffoldError};
use crate::templates::renderer::TemplateRenderer;
use crate::templates::source::TemplateSource;

/// A generated file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Template it was rendered from.
    pub template: String,
    /// File name inside the project directory.
    pub name: String,
    pub contents: String,
}

/// Every file of a project, rendered and ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub project_dir: PathBuf,
    pub files: Vec<RenderedFile>,
}

impl ScaffoldPlan {
    /// Full path of each file, in table order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|f| self.project_dir.join(&f.name))
    }

    /// Create the project directory and write every file, overwriting.
    pub fn write(&self) -> Result<()> {
        std::fs::create_dir_all(&self.project_dir)?;

        for file in &self.files {
            let path = self.project_dir.join(&file.name);
            std::fs::write(&path, &file.contents)
                .map_err(|source| ScaffoldError::Write { path: path.clone(), source })?;
            tracing::info!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        }

        Ok(())
    }
}

/// Renders a project from a template source.
pub struct Scaffolder {
    source: TemplateSource,
    config: ScaffoldConfig,
    renderer: TemplateRenderer,
}

impl Scaffolder {
    /// Bind a template source and load its file table.
    pub fn new(source: TemplateSource) -> Result<Self> {
        let config = source.config()?;
        Ok(Self::with_config(source, config))
    }

    /// Bind a template source with an explicit file table.
    pub fn with_config(source: TemplateSource, config: ScaffoldConfig) -> Self {
        Self {
            source,
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Load and render every file for `ctx` under `output_root/<name>/`.
    pub fn plan(&self, ctx: &ProjectContext, output_root: &Path) -> Result<ScaffoldPlan> {
        self.config.validate()?;

        if !ctx.is_cpp_identifier() {
            tracing::warn!(
                name = ctx.project_name(),
                "project name is not a valid C++ identifier; generated code may not compile"
            );
        }

        let data = ctx.data();
        let mut names = HashSet::new();
        let mut files = Vec::with_capacity(self.config.files.len());

        for spec in &self.config.files {
            let template = self.source.load(&spec.template)?;
            let contents = self.renderer.render(&template, &data)?;
            let name = self.renderer.render(&spec.output, &data)?;

            if let Some(reason) = segment_violation(&name) {
                return Err(ScaffoldError::InvalidOutputName { name, reason });
            }
            if !names.insert(name.clone()) {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "more than one template renders to '{name}'"
                )));
            }

            tracing::debug!(template = %spec.template, output = %name, "rendered template");
            files.push(RenderedFile {
                template: spec.template.clone(),
                name,
                contents,
            });
        }

        Ok(ScaffoldPlan {
            project_dir: output_root.join(ctx.project_name()),
            files,
        })
    }

    /// [`plan`](Self::plan), then [`write`](ScaffoldPlan::write).
    pub fn generate(&self, ctx: &ProjectContext, output_root: &Path) -> Result<ScaffoldPlan> {
        let plan = self.plan(ctx, output_root)?;
        plan.write()?;
        Ok(plan)
    }
}
