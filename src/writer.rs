use std::{fs, path::Path};

use crate::Error;

/// Replaces whatever is at `path` with `css`.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<(), Error> {
    fs::write(path, css).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
