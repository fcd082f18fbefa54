// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Diagnostic rendering of a decode outcome.

use serde::Serialize;

use crate::domain::transform::codec::Decoded;
use crate::domain::transform::types::Transform;

/// Message reported when a path decodes without a fatal error.
pub const SUCCESS_DECODE_MESSAGE: &str = "Success. Image path parsed and decoded correctly";

/// JSON answer of the explain endpoint: the request path, the best-effort
/// transform, and every error the decoder accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explain {
    pub message: String,
    pub path: String,
    pub transform: Transform,
    pub errors: Vec<String>,
}

impl Explain {
    /// Build the explain answer for a decode outcome. The message is the
    /// fatal error's text, or the success sentinel when there is none.
    pub fn from_decoded(path: impl Into<String>, decoded: &Decoded) -> Self {
        let message = match &decoded.fatal {
            Some(fatal) => fatal.to_string(),
            None => SUCCESS_DECODE_MESSAGE.to_string(),
        };

        Explain {
            message,
            path: path.into(),
            transform: decoded.transform.clone(),
            errors: decoded.errors.iter().map(ToString::to_string).collect(),
        }
    }
}
