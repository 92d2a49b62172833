// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Yesway: directory store, core types, and error definitions shared across all crates.

pub mod config;
pub mod directory;
pub mod error;
pub mod human_errors;
pub mod remote;
pub mod types;

pub use config::AppConfig;
pub use directory::DirectoryStore;
pub use error::{Result, YeswayError};
pub use types::*;
