// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! ImageMagick `convert` argument assembly.

use std::path::Path;

use super::QUALITY;
use crate::domain::transform::types::Transform;

/// Build the `convert` argument list for a transform.
///
/// `output_format` is passed separately so the gif intermediate step of the
/// webp flow can reuse this builder with a different target format than the
/// transform's own output.
pub(super) fn build_args(
    transform: &Transform,
    input: &Path,
    output: &Path,
    output_format: &str,
    verbose: bool,
) -> Vec<String> {
    let mut args = Vec::new();

    if verbose {
        args.push("-verbose".to_string());
    }

    args.push("-quality".to_string());
    args.push(QUALITY.to_string());
    args.push(input.display().to_string());
    args.push("-strip".to_string());

    let crop = transform.crop;
    if crop.is_set() {
        args.push("-crop".to_string());
        args.push(format!("{}x{}+{}+{}", crop.width, crop.height, crop.x, crop.y));
        args.push("+repage".to_string());
    }

    if transform.width != 0 || transform.height != 0 {
        let mut resize = String::new();
        if transform.width > 0 {
            resize.push_str(&transform.width.to_string());
        }
        resize.push('x');
        if transform.height > 0 {
            resize.push_str(&transform.height.to_string());
        }

        args.push("-resize".to_string());
        args.push(resize);
    }

    args.push(format!(
        "{}:{}",
        output_format.to_ascii_lowercase(),
        output.display()
    ));

    args
}
