// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Per-request orchestration: download the origin image, run the
//! transform, hand the bytes back.
//!
//! Temporary files live exactly as long as the request; dropping the
//! `NamedTempFile` guards removes them on every exit path.

use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::domain::ports::{FetchError, ImageFetcher, ImageProcessor, ProcessError};
use crate::domain::transform::types::Transform;

/// Why a request could not be rendered. The HTTP layer maps fetch failures
/// to 404 and everything else to 500.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A rendered response body.
#[derive(Debug)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Fetch-and-process service over the domain ports.
pub struct Pipeline {
    fetcher: Arc<dyn ImageFetcher>,
    processor: Arc<dyn ImageProcessor>,
}

impl Pipeline {
    /// Assemble the pipeline from its fetcher and processor ports.
    pub fn new(fetcher: Arc<dyn ImageFetcher>, processor: Arc<dyn ImageProcessor>) -> Self {
        Self { fetcher, processor }
    }

    /// Render a decoded transform: download the origin into a temp file,
    /// then either stream it verbatim (raw mode) or run it through the
    /// processor into a second temp file.
    pub async fn render(&self, transform: &Transform) -> Result<Rendered, RenderError> {
        let download = NamedTempFile::new()?;

        self.fetcher
            .fetch(&transform.image.source, download.path())
            .await?;

        if transform.raw {
            let bytes = tokio::fs::read(download.path()).await?;
            return Ok(Rendered {
                bytes,
                content_type: content_type_for(&transform.image.extension),
            });
        }

        let output = NamedTempFile::new()?;
        self.processor
            .process(transform, download.path(), output.path())
            .await?;

        let bytes = tokio::fs::read(output.path()).await?;
        Ok(Rendered {
            bytes,
            content_type: content_type_for(&transform.output),
        })
    }
}

/// Content type for an output format tag.
pub fn content_type_for(format: &str) -> &'static str {
    match format.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
