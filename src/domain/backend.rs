// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Host-schema compaction and host-aware path handling.
//!
//! A backend origin is embedded as the first segment of a request path in a
//! compacted form: `http://h` becomes `h` and `https://h` becomes `s:h`.
//! The compaction is reversible for any origin with an explicit scheme.

use crate::domain::transform::codec::{self, Decoded};
use crate::domain::transform::types::Transform;

const HTTP_SCHEMA: &str = "http://";
const HTTPS_SCHEMA: &str = "https://";
const COMPACT_HTTPS_PREFIX: &str = "s:";

/// Compact an origin host URL for use as a path segment.
pub fn compress_host(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix(HTTPS_SCHEMA) {
        return format!("{COMPACT_HTTPS_PREFIX}{rest}");
    }

    raw.strip_prefix(HTTP_SCHEMA).unwrap_or(raw).to_string()
}

/// Expand a compacted host back to a full origin URL.
pub fn expand_host(raw: &str) -> String {
    match raw.strip_prefix(COMPACT_HTTPS_PREFIX) {
        Some(rest) => format!("{HTTPS_SCHEMA}{rest}"),
        None => format!("{HTTP_SCHEMA}{raw}"),
    }
}

/// Decode a request path whose first segment is a compacted origin host.
///
/// The remainder goes through the transform codec; afterwards the image
/// source is assembled from the expanded host and the image's full name,
/// and the codec-visible path is recorded on the transform.
pub fn decode_request(raw_url: &str, default_output: &str) -> Decoded {
    let (host, path) = match raw_url.find('/') {
        Some(index) => (&raw_url[..index], &raw_url[index + 1..]),
        None => (raw_url, ""),
    };

    let host = expand_host(host);
    let mut decoded = codec::decode(path, default_output);

    decoded.transform.path = path.to_string();
    let fullname = decoded.transform.image.fullname();
    decoded.transform.image.source = format!("{host}/{fullname}");

    decoded
}

/// Encode a transform back into a host-prefixed request path.
///
/// With a configured backend the compacted backend leads; otherwise the
/// host prefix is recovered from the transform's own source URL.
pub fn encode_request(transform: &Transform, backend: Option<&str>) -> String {
    let url = codec::encode(transform);

    if let Some(backend) = backend.filter(|backend| !backend.is_empty()) {
        return format!("{}/{url}", compress_host(backend));
    }

    let source = &transform.image.source;
    let fullname = transform.image.fullname();
    let prefix = source.strip_suffix(fullname.as_str()).unwrap_or(source);

    format!("{}{url}", compress_host(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transform::types::{Crop, Image};

    #[test]
    fn test_compress_and_expand_host() {
        let cases: &[(&str, &str)] = &[
            ("google.com", "http://google.com"),
            ("s:google.com", "https://google.com"),
        ];

        for (compressed, expanded) in cases {
            assert_eq!(compress_host(expanded), *compressed);
            assert_eq!(expand_host(compressed), *expanded);
        }
    }

    #[test]
    fn test_compress_host_passes_bare_hosts_through() {
        assert_eq!(compress_host("https://example.net"), "s:example.net");
        assert_eq!(expand_host("s:example.net"), "https://example.net");
        assert_eq!(compress_host("127.0.0.1"), "127.0.0.1");
    }

    fn case(
        id: &str,
        extension: &str,
        source: &str,
        path: &str,
        width: u32,
        output: &str,
    ) -> Transform {
        Transform {
            image: Image {
                id: id.to_string(),
                extension: extension.to_string(),
                source: source.to_string(),
            },
            path: path.to_string(),
            raw: false,
            width,
            height: 0,
            crop: Crop::default(),
            output: output.to_string(),
        }
    }

    fn encoding_cases() -> Vec<(Transform, &'static str)> {
        vec![
            (
                case(
                    "help/staff",
                    "jpg",
                    "http://127.0.0.1/help/staff.jpg",
                    "help/staff.jpg",
                    0,
                    "jpg",
                ),
                "127.0.0.1/help/staff.jpg",
            ),
            (
                case(
                    "help/staff",
                    "webp",
                    "http://remote.local/help/staff.webp",
                    "help/staff.webp",
                    0,
                    "webp",
                ),
                "remote.local/help/staff.webp",
            ),
            (
                case(
                    "help/staff",
                    "webp",
                    "https://localhost/help/staff.webp",
                    "help/staff_800x.webp",
                    800,
                    "webp",
                ),
                "s:localhost/help/staff_800x.webp",
            ),
        ]
    }

    #[test]
    fn test_complete_encoding_and_decoding() {
        for (object, url) in encoding_cases() {
            assert_eq!(encode_request(&object, None), url, "encode for {url:?}");

            let decoded = decode_request(url, "");
            assert!(decoded.fatal.is_none(), "decode({url:?}) fatal");
            assert_eq!(decoded.transform, object, "decode({url:?})");
        }
    }

    #[test]
    fn test_encoding_for_explicit_backend() {
        let backends = ["127.0.0.1", "remote.local", "s:localhost"];

        for ((object, url), backend) in encoding_cases().into_iter().zip(backends) {
            assert_eq!(encode_request(&object, Some(backend)), url);
        }
    }

    #[test]
    fn test_decode_request_assembles_source() {
        let decoded = decode_request("s:example.net/foo_137x0:737x450_800x600_jpg.webp", "");

        assert!(decoded.fatal.is_none());
        assert_eq!(decoded.transform.image.source, "https://example.net/foo.jpg");
        assert_eq!(decoded.transform.path, "foo_137x0:737x450_800x600_jpg.webp");
        assert_eq!(decoded.transform.output, "webp");
    }

    #[test]
    fn test_decode_request_without_path() {
        let decoded = decode_request("example.net", "jpg");

        assert_eq!(decoded.transform.image.id, "");
        assert_eq!(decoded.transform.image.source, "http://example.net/.jpg");
    }
}
