//! Fetches a design-token document and writes it out as CSS custom properties.
//!
//! The token model, flattening and stylesheet rendering live in
//! `design_tokens_fetch_core`; this crate adds retrieval, configuration and
//! the output file.

pub mod config;
mod error;
pub mod pipeline;
pub mod source;
pub mod writer;

pub use design_tokens_fetch_core as tokens;
pub use error::Error;
pub use pipeline::{run, RunSummary};
