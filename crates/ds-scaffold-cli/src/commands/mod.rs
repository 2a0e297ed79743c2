//! CLI command implementations for ds-scaffold.

pub mod generate;
