//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "components.toml")
    }
}

impl Manifest {
    /// Read and parse a manifest. Diagnostics name the file by `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_manifest(path)?;
        parse_manifest(&content, &path.display().to_string())
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Read a manifest file, reporting IO failures against `path`.
pub(crate) fn read_manifest(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Deserialize `content` and run the manifest checks. `filename` only names
/// the source in diagnostics.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    ParseContext::new(source).validate(&manifest)?;
    Ok(manifest)
}
