//! Template system for ds-scaffold.
//!
//! Template text comes from a [`source::TemplateSource`]: either a directory on
//! disk (the current directory by default) or the defaults compiled into the
//! binary via [`include_str!`] in the [`embedded`] module. It is rendered at
//! runtime with [Handlebars](https://handlebarsjs.com/) via the
//! [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! There is exactly one:
//! - `{{projectName}}` — the project name given on the command line
//!
//! ## Adding a builtin template
//!
//! 1. Create the `.template` file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`] and a match arm in
//!    [`embedded::lookup`]
//! 3. Add an entry to [`crate::config::ScaffoldConfig::default`]

pub mod embedded;
pub mod renderer;
pub mod source;
