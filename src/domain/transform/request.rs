// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! JSON request body to canonical URL path.
//!
//! The create-request-path endpoint accepts a JSON description of a
//! transform and answers with the exact path [`super::codec::encode`] would
//! produce for the equivalent [`super::types::Transform`]. Integer fields
//! tolerate both JSON numbers and strings; an empty string means "absent".

use serde::{Deserialize, Deserializer};

use super::codec::{DEFAULT_INPUT_EXTENSION, RAW_TOKEN};
use super::escape::escape;
use super::parse::split_file_path;
use crate::domain::backend::compress_host;

/// Error produced while building a request path from a JSON body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The JSON body carried no image path.
    #[error("The image path is missing")]
    MissingPath,
}

/// A transform request as posted by clients.
///
/// Every field is optional except `path`; missing integer fields
/// deserialize to the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransformRequest {
    pub backend: String,
    pub path: String,
    pub raw: bool,
    pub crop: CropRequest,
    #[serde(deserialize_with = "number_or_string")]
    pub width: String,
    #[serde(deserialize_with = "number_or_string")]
    pub height: String,
    pub output: String,
}

/// Crop window of a transform request, with the same number-or-string
/// tolerance as the outer resize fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CropRequest {
    #[serde(deserialize_with = "number_or_string")]
    pub x: String,
    #[serde(deserialize_with = "number_or_string")]
    pub y: String,
    #[serde(deserialize_with = "number_or_string")]
    pub width: String,
    #[serde(deserialize_with = "number_or_string")]
    pub height: String,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => number.to_string(),
        NumberOrString::String(string) => string,
    })
}

/// Build the canonical request path for a JSON transform request.
///
/// The produced path is byte-equal to what encoding the equivalent
/// transform yields, prefixed with the compacted backend host when the
/// request carries one.
pub fn create_request_path(request: &TransformRequest) -> Result<String, RequestError> {
    let mut path = String::new();

    if !request.backend.is_empty() {
        path.push('/');
        path.push_str(compress_host(&request.backend).trim_end_matches('/'));
    }

    let (id, extension) = split_file_path(&request.path);
    let id = escape(id);
    let id = id.trim_start_matches('/');

    if !id.is_empty() {
        path.push('/');
        path.push_str(id);
    }

    if request.raw {
        path.push('_');
        path.push_str(RAW_TOKEN);
        path.push('.');
        path.push_str(extension);
        return finish(path, request);
    }

    let crop = encode_crop(&request.crop);
    if !crop.is_empty() {
        path.push('_');
        path.push_str(&crop);
    }

    let dimension = encode_dimension(&request.width, &request.height);
    if !dimension.is_empty() {
        path.push('_');
        path.push_str(&dimension);
    }

    if request.output != extension
        && !(extension == DEFAULT_INPUT_EXTENSION && request.output.is_empty())
    {
        path.push('_');
        path.push_str(&escape(extension));
    }

    if !request.output.is_empty() {
        path.push('.');
        path.push_str(&escape(&request.output));
    }

    finish(path, request)
}

fn finish(path: String, request: &TransformRequest) -> Result<String, RequestError> {
    if request.path.is_empty() {
        return Err(RequestError::MissingPath);
    }

    Ok(path)
}

/// Emit the crop token when the request names a full window. Omitted
/// offsets count as zero so the produced token always re-decodes.
fn encode_crop(crop: &CropRequest) -> String {
    if crop.width.is_empty() || crop.height.is_empty() {
        return String::new();
    }

    let x = if crop.x.is_empty() { "0" } else { crop.x.as_str() };
    let y = if crop.y.is_empty() { "0" } else { crop.y.as_str() };

    format!("{x}x{y}:{}x{}", crop.width, crop.height)
}

/// Emit the resize token from the raw JSON strings, verbatim.
fn encode_dimension(width: &str, height: &str) -> String {
    if width.is_empty() && height.is_empty() {
        return String::new();
    }

    format!("{width}x{height}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transform::codec::{decode, encode};

    fn build(doc: &str) -> Result<String, RequestError> {
        let request: TransformRequest = serde_json::from_str(doc).unwrap();
        create_request_path(&request)
    }

    #[test]
    fn test_create_request_path() {
        let cases: &[(&str, &str)] = &[
            (r#"{"path": "foo.jpg"}"#, "/foo"),
            (
                r#"{"path": "foo.jpg", "backend": "https://localhost/"}"#,
                "/s:localhost/foo",
            ),
            (r#"{"path": "foo.gif", "raw": true}"#, "/foo_raw.gif"),
            (r#"{"path": "bah.jpg", "raw": true}"#, "/bah_raw.jpg"),
            (
                r#"{"path": "bah.jpg", "crop": {"x": 0, "y": 0, "width": 100, "height": 200}}"#,
                "/bah_0x0:100x200",
            ),
            (
                r#"{"path": "bah.jpg", "crop": {"x": "0", "y": "0", "width": "100", "height": "200"}}"#,
                "/bah_0x0:100x200",
            ),
            (r#"{"path": "bah.jpg", "width": 100}"#, "/bah_100x"),
            (r#"{"path": "bah.jpg", "width": "100"}"#, "/bah_100x"),
            (r#"{"path": "bah.jpg", "height": 100}"#, "/bah_x100"),
            (r#"{"path": "bah.jpg", "height": "100"}"#, "/bah_x100"),
            (
                r#"{"path": "bah.jpg", "width": 40, "height": "100"}"#,
                "/bah_40x100",
            ),
            (
                r#"{"path": "bah.jpg", "width": "40", "height": 100}"#,
                "/bah_40x100",
            ),
            (
                r#"{"path": "bah.gif", "width": "40", "output": "webp"}"#,
                "/bah_40x_gif.webp",
            ),
            (
                r#"{"path": "foo_bah.jpg", "width": "40", "output": "jpg"}"#,
                "/foo__bah_40x.jpg",
            ),
        ];

        for (doc, want) in cases {
            assert_eq!(build(doc).as_deref(), Ok(*want), "for body {doc}");
        }
    }

    #[test]
    fn test_missing_path() {
        assert_eq!(build("{}"), Err(RequestError::MissingPath));
        assert_eq!(build(r#"{"width": "200"}"#), Err(RequestError::MissingPath));
    }

    #[test]
    fn test_crop_token_needs_both_sides() {
        assert_eq!(
            build(r#"{"path": "bah.jpg", "crop": {"width": 100}}"#).as_deref(),
            Ok("/bah")
        );
    }

    /// Whatever the builder produces must agree with the codec: decoding
    /// the built path and re-encoding it yields the same path again.
    #[test]
    fn test_parity_with_codec() {
        let docs = [
            r#"{"path": "foo.jpg"}"#,
            r#"{"path": "bah.jpg", "crop": {"x": 0, "y": 0, "width": 100, "height": 200}}"#,
            r#"{"path": "bah.jpg", "width": 100}"#,
            r#"{"path": "bah.gif", "width": "40", "output": "webp"}"#,
            r#"{"path": "foo_bah.jpg", "width": "40", "output": "jpg"}"#,
            r#"{"path": "foo.gif", "raw": true}"#,
        ];

        for doc in docs {
            let path = build(doc).unwrap();
            let trimmed = path.trim_start_matches('/');
            let decoded = decode(trimmed, "");
            assert!(decoded.fatal.is_none(), "decode({trimmed:?})");
            assert_eq!(encode(&decoded.transform), trimmed, "parity for {doc}");
        }
    }
}
