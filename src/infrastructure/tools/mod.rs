// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! External tool adapters for the `ImageProcessor` port.
//!
//! Transforms run through the ImageMagick/libwebp command line tools. Every
//! invocation uses an explicit argument array over `tokio::process::Command`;
//! nothing is ever passed through a shell. Pure `*_args` builders keep the
//! argument lists testable without spawning anything.

pub mod convert;
pub mod deps;
pub mod sniff;
pub mod webp;

use std::path::Path;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::domain::ports::{ImageProcessor, ProcessError};
use crate::domain::transform::types::Transform;

/// Quality argument handed to every encoder.
pub const QUALITY: &str = "92";

/// Which tool family renders a given output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    Imagick,
    Webp,
}

fn engine_for(output: &str) -> Option<Engine> {
    match output.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "gif" | "png" | "pdf" => Some(Engine::Imagick),
        "webp" => Some(Engine::Webp),
        _ => None,
    }
}

/// `ImageProcessor` adapter that shells out to convert/cwebp/gif2webp.
pub struct ToolProcessor {
    verbose: bool,
}

impl ToolProcessor {
    /// Create the adapter; `verbose` mirrors tool output into the log.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

#[async_trait]
impl ImageProcessor for ToolProcessor {
    async fn process(
        &self,
        transform: &Transform,
        input: &Path,
        output: &Path,
    ) -> Result<(), ProcessError> {
        let engine =
            engine_for(&transform.output).ok_or(ProcessError::UnsupportedOutputFormat)?;

        sniff_input(input).await?;

        match engine {
            Engine::Imagick => {
                let args =
                    convert::build_args(transform, input, output, &transform.output, self.verbose);
                call_program("convert", &args, self.verbose).await
            }
            Engine::Webp => webp::process(transform, input, output, self.verbose).await,
        }
    }
}

/// Reject downloads that are not one of the accepted raster inputs before
/// handing them to an external tool.
async fn sniff_input(input: &Path) -> Result<(), ProcessError> {
    let mut file = tokio::fs::File::open(input).await?;
    let mut header = [0u8; 16];
    let read = file.read(&mut header).await?;

    match sniff::detect(&header[..read]) {
        Some(_) => Ok(()),
        None => Err(ProcessError::UnsupportedInputType),
    }
}

/// Run one external tool to completion, capturing its output.
pub(crate) async fn call_program(
    tool: &'static str,
    args: &[String],
    verbose: bool,
) -> Result<(), ProcessError> {
    if verbose {
        tracing::debug!(command = %format!("{tool} {}", args.join(" ")), "invoking image tool");
    }

    let output = Command::new(tool).args(args).output().await?;

    if verbose {
        tracing::debug!(stdout = %String::from_utf8_lossy(&output.stdout), "{tool} stdout");
        tracing::debug!(stderr = %String::from_utf8_lossy(&output.stderr), "{tool} stderr");
    }

    if !output.status.success() {
        return Err(ProcessError::ToolFailed {
            tool,
            code: output.status.code(),
        });
    }

    Ok(())
}
