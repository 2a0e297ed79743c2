//! Core library for the ds-scaffold generator.
//!
//! Turns a project name into a ready-to-build C++ project directory: a CMake
//! build file, a header, a source file and a test driver, each rendered from a
//! template with the project name substituted in.
//!
//! The flow is [`context::ProjectContext`] (validated name) →
//! [`scaffold::Scaffolder::plan`] (all templates loaded and rendered in memory) →
//! [`scaffold::ScaffoldPlan::write`] (directory created, files written).

pub mod config;
pub mod context;
pub mod error;
pub mod scaffold;
pub mod templates;
