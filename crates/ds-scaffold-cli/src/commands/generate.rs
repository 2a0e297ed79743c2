use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Input;

use ds_scaffold_core::context::{self, ProjectContext};
use ds_scaffold_core::scaffold::{ScaffoldPlan, Scaffolder};
use ds_scaffold_core::templates::source::TemplateSource;

use crate::output;

/// Generate a new project directory from templates.
///
/// Resolves the project name (prompting if it was not given and a user is at
/// the terminal), renders every template in memory, then writes the files
/// under `output_dir/<name>/`. With `dry_run` the files are listed and nothing
/// is written.
pub fn run(
    name: Option<String>,
    source: TemplateSource,
    output_dir: &Path,
    dry_run: bool,
) -> Result<ScaffoldPlan> {
    let name = resolve_name(name)?;
    let ctx = ProjectContext::new(&name)?;

    output::print_header(&format!("ds-scaffold: {name}"));
    if !ctx.is_cpp_identifier() {
        output::print_warning(&format!(
            "'{name}' is not a valid C++ identifier; the generated class will not compile"
        ));
    }

    output::print_step(1, 3, &format!("Loading templates from {source}"));
    let scaffolder = Scaffolder::new(source)
        .with_context(|| format!("failed to load scaffold config for project '{name}'"))?;

    output::print_step(2, 3, "Rendering templates");
    let plan = scaffolder.plan(&ctx, output_dir)?;
    for file in &plan.files {
        output::print_key_value(&file.template, &file.name);
    }

    let project_dir = plan.project_dir.display().to_string();
    if dry_run {
        output::print_step(3, 3, &format!("Dry run: not writing {project_dir}/"));
        for path in plan.paths() {
            output::print_key_value("would write", &path.display().to_string());
        }
        return Ok(plan);
    }

    output::print_step(3, 3, &format!("Writing {project_dir}/"));
    plan.write()?;

    output::print_success(&format!(
        "Project '{name}' created with {} files",
        plan.files.len()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {project_dir}");
    println!("    cmake -S . -B build");
    println!("    cmake --build build");
    println!("    ctest --test-dir build");
    println!();

    Ok(plan)
}

fn resolve_name(name: Option<String>) -> Result<String> {
    if let Some(name) = name {
        return Ok(name);
    }
    if !console::user_attended() {
        anyhow::bail!("a project name is required");
    }

    let name = Input::<String>::new()
        .with_prompt("Project name")
        .validate_with(|input: &String| context::validate_name(input).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(name)
}
