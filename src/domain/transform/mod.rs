// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

// The URL-path grammar codec and its building blocks.

pub mod codec;
pub mod errors;
pub mod escape;
pub mod parse;
pub mod request;
pub mod types;

pub use codec::{DEFAULT_INPUT_EXTENSION, Decoded, decode, encode};
pub use errors::DecodeError;
pub use types::{Crop, Image, Transform};
