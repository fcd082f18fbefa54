// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! webp output flow: `cwebp` for stills, `gif2webp` for animations.
//!
//! Animated gifs keep their frames by going through `gif2webp`; when the
//! transform also crops or resizes, ImageMagick first applies the geometry
//! gif-to-gif into an intermediate temp file.

use std::path::Path;

use tempfile::NamedTempFile;

use super::{QUALITY, call_program, convert};
use crate::domain::ports::ProcessError;
use crate::domain::transform::types::Transform;

pub(super) async fn process(
    transform: &Transform,
    input: &Path,
    output: &Path,
    verbose: bool,
) -> Result<(), ProcessError> {
    if transform.image.extension != "gif" {
        let args = cwebp_args(transform, input, output, verbose);
        return call_program("cwebp", &args, verbose).await;
    }

    let needs_geometry = transform.crop.width != 0
        || transform.crop.height != 0
        || transform.width != 0
        || transform.height != 0;

    if needs_geometry {
        let intermediate = NamedTempFile::new()?;
        let args = convert::build_args(transform, input, intermediate.path(), "gif", verbose);
        call_program("convert", &args, verbose).await?;

        let args = gif2webp_args(intermediate.path(), output, verbose);
        return call_program("gif2webp", &args, verbose).await;
    }

    let args = gif2webp_args(input, output, verbose);
    call_program("gif2webp", &args, verbose).await
}

pub(super) fn cwebp_args(
    transform: &Transform,
    input: &Path,
    output: &Path,
    verbose: bool,
) -> Vec<String> {
    let mut args = vec!["-q".to_string(), QUALITY.to_string()];

    let crop = transform.crop;
    if crop.is_set() {
        args.push("-crop".to_string());
        args.push(crop.x.to_string());
        args.push(crop.y.to_string());
        args.push(crop.width.to_string());
        args.push(crop.height.to_string());
    }

    if transform.width != 0 || transform.height != 0 {
        args.push("-resize".to_string());
        args.push(transform.width.to_string());
        args.push(transform.height.to_string());
    }

    if verbose {
        args.push("-v".to_string());
    }

    args.push(input.display().to_string());
    args.push("-o".to_string());
    args.push(output.display().to_string());

    args
}

pub(super) fn gif2webp_args(input: &Path, output: &Path, verbose: bool) -> Vec<String> {
    let mut args = vec!["-q".to_string(), QUALITY.to_string()];

    if verbose {
        args.push("-v".to_string());
    }

    args.push(input.display().to_string());
    args.push("-o".to_string());
    args.push(output.display().to_string());

    args
}
