// Copyright 2025 the BA Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup errors.
//!
//! These never reach end users. [`Engine::scan`](crate::Engine::scan) logs and
//! skips; [`Engine::try_attach`](crate::Engine::try_attach) returns them for
//! callers that want to know why a container was not activated.

use thiserror::Error;

/// Why a container did not get a session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The container is not part of the document.
    #[error("container is not connected to the document")]
    ContainerDetached,
    /// The container was already visited, or already owns a live session.
    #[error("container is already initialized")]
    AlreadyInitialized,
    /// No descendant carries the before-layer class.
    #[error("container has no before layer")]
    MissingBeforeLayer,
    /// No descendant carries the handle class.
    #[error("container has no divider handle")]
    MissingHandle,
}
