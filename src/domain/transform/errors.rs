// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Error taxonomy for the URL-path codec.
//!
//! Decoding never aborts: sub-parsers accumulate soft errors and keep going,
//! and the whole decode carries at most one fatal error (a parameter token
//! that could not be consumed). The explain endpoint renders every
//! accumulated error; the HTTP layer branches only on the fatal one.

use std::num::ParseIntError;

/// An error produced while decoding a transform path.
///
/// The `Display` text is user-facing: it appears verbatim in the explain
/// endpoint's error stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Offset fragment too short to hold an `AxB` pair.
    #[error("Offset is invalid")]
    OffsetInvalid,
    /// No `x` separator in an offset or dimension fragment.
    #[error("Offset separator not found")]
    OffsetSeparator,
    /// An offset side parsed to a negative value.
    #[error("x and y must be non-negative")]
    OffsetNonNegative,
    /// A dimension fragment parsed as `0x0`.
    #[error("At least x and y must be greater than zero")]
    BothDimensionsZero,
    /// A crop width or height reached zero.
    #[error("Both x and y must be greater than zero")]
    CropDimensionZero,
    /// No `:` in a crop fragment.
    #[error("Not in crop format")]
    NotCropFormat,
    /// One or both sides of a crop fragment failed to parse.
    #[error("Invalid crop format dimensions")]
    InvalidCropDimensions,
    /// Parameter tokens remained after crop, dimension and extension were
    /// consumed. This one is fatal.
    #[error("Can't process all parameters")]
    NonEmptyParameterQueue,
    /// A non-empty fragment side failed integer conversion.
    #[error("{0}")]
    Int(#[from] ParseIntError),
}
