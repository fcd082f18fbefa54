// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Magic-byte probing of downloaded files.
//!
//! A handful of header comparisons stand in for a MIME database: only the
//! formats the toolchain can actually read are accepted, and anything else
//! is rejected before an external tool ever sees it.

/// Raster input formats the toolchain accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Jpeg,
    Png,
    Gif,
    Webp,
}

/// Detect the input format from the leading bytes of a file.
///
/// Returns `None` for anything unrecognized, including truncated headers.
pub fn detect(header: &[u8]) -> Option<InputKind> {
    if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(InputKind::Jpeg);
    }

    if header.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(InputKind::Png);
    }

    if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
        return Some(InputKind::Gif);
    }

    if header.len() >= 12 && &header[..4] == b"RIFF" && &header[8..12] == b"WEBP" {
        return Some(InputKind::Webp);
    }

    None
}
