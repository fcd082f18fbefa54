// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! The URL-path grammar codec.
//!
//! [`encode`] turns a [`Transform`] into its canonical URL path and is
//! total. [`decode`] accepts any path and produces a best-effort
//! [`Transform`] plus every error it ran into along the way; only a
//! leftover parameter token is fatal. Both directions are pure and share no
//! state, so the path parser, the explain endpoint and the JSON request
//! builder agree by construction.

use super::errors::DecodeError;
use super::escape::{escape, unescape};
use super::parse::{extract_crop, get_dimensions, params_substring_start, split_file_path};
use super::types::{Crop, Transform};

/// Extension assumed for origin images whose URL does not carry one.
///
/// This is a codec constant, not a configurable: the encoder's decision to
/// omit the input-extension token relies on it, so decoding `"foo"` back to
/// a jpg only works while both sides agree.
pub const DEFAULT_INPUT_EXTENSION: &str = "jpg";

/// Parameter token that requests raw passthrough.
pub const RAW_TOKEN: &str = "raw";

/// Outcome of decoding a path: the best-effort transform, the accumulated
/// soft errors, and the single fatal error, when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub transform: Transform,
    pub errors: Vec<DecodeError>,
    pub fatal: Option<DecodeError>,
}

/// Encode a transform into its canonical URL path.
pub fn encode(transform: &Transform) -> String {
    let image = &transform.image;
    let mut url = escape(&image.id);

    let input_extension = if image.extension.is_empty() {
        DEFAULT_INPUT_EXTENSION
    } else {
        image.extension.as_str()
    };

    if transform.raw {
        url.push('_');
        url.push_str(RAW_TOKEN);
        url.push('.');
        url.push_str(input_extension);
        return url;
    }

    url.push_str(&encode_param(&encode_crop(&transform.crop)));
    url.push_str(&encode_param(&encode_dimension(
        transform.width,
        transform.height,
    )));

    // The input format stays visible in the URL unless the result is already
    // unambiguous: no explicit output and the input is the default.
    if transform.output != input_extension
        && (input_extension != DEFAULT_INPUT_EXTENSION || !transform.output.is_empty())
    {
        url.push_str(&encode_param(&escape(input_extension)));
    }

    if !transform.output.is_empty() {
        url.push('.');
        url.push_str(&escape(&transform.output));
    }

    url
}

/// Decode a URL path into a transform.
///
/// `default_output` fills `transform.output` when the path carries no
/// extension suffix. Decoding is best-effort: the returned transform is
/// always usable, and `errors` lists everything that went wrong while
/// probing the parameter tokens.
pub fn decode(path: &str, default_output: &str) -> Decoded {
    let mut decoded = Decoded::default();
    let transform = &mut decoded.transform;

    let Some(start) = params_substring_start(path) else {
        let (id, output) = split_file_path(path);
        transform.image.id = unescape(id);

        let extension = if output.is_empty() {
            DEFAULT_INPUT_EXTENSION
        } else {
            output
        };
        transform.image.extension = unescape(extension);
        transform.output = output_format(&unescape(output), default_output);

        return decoded;
    };

    let id = &path[..start - 1];
    let (params, output) = split_file_path(&path[start - 1..]);

    transform.image.id = unescape(id);
    let output = unescape(output);
    transform.output = output_format(&output, default_output);

    extract_params(params, &output, &mut decoded);

    decoded
}

fn output_format(output: &str, default_output: &str) -> String {
    if output.is_empty() {
        default_output.to_string()
    } else {
        output.to_string()
    }
}

/// Consume the `_`-separated parameter tokens in their fixed order:
/// crop, dimensions, input extension.
fn extract_params(params: &str, output: &str, decoded: &mut Decoded) {
    let tokens: Vec<String> = params.split('_').map(unescape).collect();
    let Decoded {
        transform,
        errors,
        fatal,
    } = decoded;

    // `params` starts with the delimiter, so token 0 is always empty.
    let mut pos = 1;

    if tokens.len() == 2 && tokens[1] == RAW_TOKEN {
        transform.raw = true;
        transform.image.extension = unescape(output);
        return;
    }

    let (crop, crop_errors) = extract_crop(&tokens[pos]);
    if crop_errors.is_empty() {
        transform.crop = crop;
        pos += 1;
    }
    errors.extend(crop_errors);

    if pos < tokens.len() {
        let (width, height, dimension_errors) = get_dimensions(&tokens[pos]);
        if dimension_errors.is_empty() {
            transform.width = u32::try_from(width).unwrap_or_default();
            transform.height = u32::try_from(height).unwrap_or_default();
            pos += 1;
        }
        errors.extend(dimension_errors);
    }

    let mut extension = output.to_string();

    if pos != tokens.len() && !tokens[pos].is_empty() {
        extension = tokens[pos].clone();
        pos += 1;
    }

    if extension.is_empty() {
        extension = DEFAULT_INPUT_EXTENSION.to_string();
    }

    transform.image.extension = unescape(&extension);

    if pos != tokens.len() {
        *fatal = Some(DecodeError::NonEmptyParameterQueue);
        errors.push(DecodeError::NonEmptyParameterQueue);
    }
}

fn encode_crop(crop: &Crop) -> String {
    if crop.is_set() {
        format!("{}x{}:{}x{}", crop.x, crop.y, crop.width, crop.height)
    } else {
        String::new()
    }
}

fn encode_dimension(width: u32, height: u32) -> String {
    if width == 0 && height == 0 {
        return String::new();
    }

    let mut dim = String::new();
    if width > 0 {
        dim.push_str(&width.to_string());
    }
    dim.push('x');
    if height > 0 {
        dim.push_str(&height.to_string());
    }

    dim
}

fn encode_param(param: &str) -> String {
    if param.is_empty() {
        String::new()
    } else {
        format!("_{param}")
    }
}
