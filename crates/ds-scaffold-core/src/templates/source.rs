//! Where template text is read from.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::{ScaffoldConfig, CONFIG_FILE};
use crate::error::{Result, ScaffoldError};
use crate::templates::embedded;

/// A set of templates, on disk or compiled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template files (and an optional `ds-scaffold.config.json`) in a directory.
    Directory(PathBuf),
    /// The defaults from [`embedded`].
    Builtin,
}

impl TemplateSource {
    /// Read the template called `name`.
    pub fn load(&self, name: &str) -> Result<Cow<'static, str>> {
        match self {
            Self::Directory(dir) => {
                let path = dir.join(name);
                tracing::debug!(path = %path.display(), "reading template");
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| ScaffoldError::TemplateNotFound { path, source })
            }
            Self::Builtin => embedded::lookup(name).map(Cow::Borrowed).ok_or_else(|| {
                ScaffoldError::TemplateNotFound {
                    path: PathBuf::from(name),
                    source: io::Error::new(io::ErrorKind::NotFound, "no builtin template with this name"),
                }
            }),
        }
    }

    /// The file table for this source.
    ///
    /// A directory may carry its own `ds-scaffold.config.json`; without one, and
    /// for the builtin set, the default four-file table applies.
    pub fn config(&self) -> Result<ScaffoldConfig> {
        match self {
            Self::Directory(dir) => ScaffoldConfig::load_or_default(&dir.join(CONFIG_FILE)),
            Self::Builtin => Ok(ScaffoldConfig::default()),
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "{}", dir.display()),
            Self::Builtin => write!(f, "<builtin>"),
        }
    }
}
