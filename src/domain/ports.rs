// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Ports to the outside world: origin download and image processing.
//!
//! The domain only sees these traits; the reqwest client and the external
//! tool adapters live in the infrastructure layer. Tests substitute fakes.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::transform::types::Transform;

/// Failure while downloading an origin image. The HTTP layer answers 404
/// for any of these.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The origin answered 404.
    #[error("Origin image not found")]
    Missing,
    /// The origin answered with any other non-success status.
    #[error("Backend server failed to fulfill the request")]
    Backend,
    /// The request itself failed: connection, timeout, local I/O.
    #[error("{0}")]
    Transport(String),
}

/// Failure while transforming a downloaded image. The HTTP layer answers
/// 500 for any of these.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// No engine handles the requested output format.
    #[error("The requested output format is not supported")]
    UnsupportedOutputFormat,
    /// The downloaded file is not one of the accepted input types.
    #[error("The loaded file mime type is not supported")]
    UnsupportedInputType,
    /// An external tool exited with a failure status.
    #[error("{tool} exited with status {code:?}")]
    ToolFailed {
        tool: &'static str,
        code: Option<i32>,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Downloads an origin image into a local file.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch `url` into `destination`, returning the number of bytes
    /// written.
    async fn fetch(&self, url: &str, destination: &Path) -> Result<u64, FetchError>;
}

/// Runs a transform over a downloaded image file.
#[async_trait]
pub trait ImageProcessor: Send + Sync {
    /// Apply `transform` to `input`, writing the result to `output`.
    async fn process(
        &self,
        transform: &Transform,
        input: &Path,
        output: &Path,
    ) -> Result<(), ProcessError>;
}
