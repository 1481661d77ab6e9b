//! Retrieval of raw JSON bytes from a named source.
//!
//! The rest of the crate only sees the [`ByteSource`] trait, so the pipeline
//! can be driven from HTTP, local files, or memory in tests.

pub mod client;

pub use client::{is_remote, SourceClient};

use crate::utils::error::FetchError;

/// Anything that can hand back the bytes behind a source name
pub trait ByteSource {
    /// Fetch the full body of `name`
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError>;
}
