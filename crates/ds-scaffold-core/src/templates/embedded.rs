//! Compile-time embedded default templates.
//!
//! Each constant loads a template file from the repository's `templates/`
//! directory via [`include_str!`]. The paths are relative to this source file
//! (`crates/ds-scaffold-core/src/templates/embedded.rs`).
//!
//! The file names match the names looked up in a template directory, so the
//! builtin set and an on-disk set are interchangeable.

pub const CMAKE_LISTS_TEMPLATE: &str = "CMakelists.template";
pub const HEADER_TEMPLATE: &str = "headerFile.template";
pub const CODE_TEMPLATE: &str = "codeFile.template";
pub const TEST_TEMPLATE: &str = "testFile.template";

pub const CMAKE_LISTS: &str = include_str!("../../../../templates/CMakelists.template");
pub const HEADER: &str = include_str!("../../../../templates/headerFile.template");
pub const CODE: &str = include_str!("../../../../templates/codeFile.template");
pub const TEST: &str = include_str!("../../../../templates/testFile.template");

/// Find a builtin template by its file name.
pub fn lookup(name: &str) -> Option<&'static str> {
    match name {
        CMAKE_LISTS_TEMPLATE => Some(CMAKE_LISTS),
        HEADER_TEMPLATE => Some(HEADER),
        CODE_TEMPLATE => Some(CODE),
        TEST_TEMPLATE => Some(TEST),
        _ => None,
    }
}
