// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Yesway.

use thiserror::Error;

use crate::types::RecordKind;

/// Top-level error type for all Yesway operations.
#[derive(Debug, Error)]
pub enum YeswayError {
    // -- Directory errors --
    #[error("required field is empty: {field}")]
    Validation { field: &'static str },

    #[error("{kind} name already exists: {name}")]
    DuplicateName { kind: RecordKind, name: String },

    #[error("{kind} position {position} is out of range (len {len})")]
    OutOfRange {
        kind: RecordKind,
        position: usize,
        len: usize,
    },

    #[error("no {kind} with id {id}")]
    UnknownRecord { kind: RecordKind, id: u64 },

    #[error("no client named {name}")]
    NotFound { name: String },

    #[error("deletion was not confirmed")]
    NotConfirmed,

    // -- Remote connection --
    #[error("remote session launch failed: {0}")]
    Launch(String),

    #[error("remote desktop launching is not available on this platform")]
    PlatformUnavailable,

    // -- Configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl YeswayError {
    /// True for the index error class: a position or id that no longer
    /// refers to a live record.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::UnknownRecord { .. })
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, YeswayError>;
