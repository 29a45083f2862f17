use std::{io, path::PathBuf};

use design_tokens_fetch_core::TokenError;

use crate::{config::ConfigError, source::RetrievalError};

/// Everything that can end a run. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Parse(#[from] TokenError),
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
