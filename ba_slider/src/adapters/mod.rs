// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host adapters for concrete document implementations.
//!
//! Enabled via feature flags so browser bindings can depend on the engine
//! without pulling in the in-memory document.

#[cfg(feature = "document_adapter")]
pub mod document;
