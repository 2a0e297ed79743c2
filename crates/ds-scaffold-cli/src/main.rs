//! ds-scaffold CLI — create a C++ data-structure project from templates.
//!
//! `ds-scaffold Widget` renders the build file, header, source and test
//! templates with `{{projectName}}` set to `Widget` and writes them to
//! `Widget/CMakeLists.txt`, `Widget/Widget.h`, `Widget/Widget.cpp` and
//! `Widget/WidgetTest.cpp`.

mod commands;
mod output;

use clap::Parser;
use std::path::PathBuf;

use ds_scaffold_core::templates::source::TemplateSource;

#[derive(Parser, Debug)]
#[command(
    name = "ds-scaffold",
    about = "Scaffold a C++ project (CMake, header, source, test) from templates",
    version
)]
struct Cli {
    /// Project name (creates a directory with this name; prompted for if omitted)
    name: Option<String>,

    /// Directory containing the template files
    #[arg(short, long, env = "DS_SCAFFOLD_TEMPLATES", default_value = ".")]
    templates: PathBuf,

    /// Use the templates built into the binary (overrides --templates)
    #[arg(long)]
    builtin: bool,

    /// Directory the project directory is created in
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Render and list the files without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn template_source(&self) -> TemplateSource {
        if self.builtin {
            TemplateSource::Builtin
        } else {
            TemplateSource::Directory(self.templates.clone())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?cli, "parsed arguments");

    let source = cli.template_source();
    commands::generate::run(cli.name, source, &cli.output_dir, cli.dry_run)?;

    Ok(())
}
