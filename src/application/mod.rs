// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

// Application layer - request orchestration over the domain ports

/// Download-and-transform pipeline.
pub mod pipeline;
