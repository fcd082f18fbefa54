// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Core data model for a decoded request.

use serde::{Deserialize, Serialize};

/// Identity of an origin image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Path of the image on the backend, with `_` unescaped.
    pub id: String,
    /// Stored format tag, e.g. `jpg`.
    pub extension: String,
    /// Fully qualified origin URL. Filled in by the server layer after
    /// decoding; the codec itself never sets it.
    #[serde(default)]
    pub source: String,
}

impl Image {
    /// Backend-relative file name: the id plus its extension suffix, when
    /// one is stored.
    pub fn fullname(&self) -> String {
        if self.extension.is_empty() {
            self.id.clone()
        } else {
            format!("{}.{}", self.id, self.extension)
        }
    }

    /// Base file name, without any leading directories.
    pub fn name(&self) -> String {
        let fullname = self.fullname();
        match fullname.rfind('/') {
            Some(last) => fullname[last + 1..].to_string(),
            None => fullname,
        }
    }
}

/// A crop window. All-zero means "no crop"; a real crop always has positive
/// width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Crop {
    /// Whether this value denotes an actual crop window.
    pub fn is_set(&self) -> bool {
        self.width != 0 && self.height != 0
    }
}

/// The decoded intent of a request: origin identity, optional crop, optional
/// resize, raw-passthrough flag, and desired output format.
///
/// `raw` keeps its original wire name `original` in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transform {
    pub image: Image,
    /// Codec-visible request path, without any backend host segment. Filled
    /// in by the server layer.
    #[serde(default)]
    pub path: String,
    #[serde(rename = "original")]
    pub raw: bool,
    pub width: u32,
    pub height: u32,
    pub crop: Crop,
    /// Requested output format; empty means "use the server default".
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_fullname() {
        let cases: &[(&str, &str, &str, &str)] = &[
            ("help/staff", "jpg", "staff.jpg", "help/staff.jpg"),
            ("section/help/staff", "jpg", "staff.jpg", "section/help/staff.jpg"),
            ("dog", "png", "dog.png", "dog.png"),
            ("dog", "", "dog", "dog"),
        ];

        for (id, extension, name, fullname) in cases {
            let image = Image {
                id: (*id).to_string(),
                extension: (*extension).to_string(),
                source: String::new(),
            };
            assert_eq!(image.name(), *name);
            assert_eq!(image.fullname(), *fullname);
        }
    }

    #[test]
    fn test_crop_is_set() {
        assert!(!Crop::default().is_set());
        assert!(
            Crop {
                x: 0,
                y: 0,
                width: 100,
                height: 200
            }
            .is_set()
        );
    }

    #[test]
    fn test_transform_serializes_raw_as_original() {
        let transform = Transform {
            raw: true,
            ..Transform::default()
        };
        let value = serde_json::to_value(&transform).unwrap();
        assert_eq!(value["original"], serde_json::Value::Bool(true));
        assert!(value.get("raw").is_none());
    }
}
