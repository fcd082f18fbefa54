// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

// HTTP surface: the axum server and the origin download client.

pub mod client;
pub mod server;
