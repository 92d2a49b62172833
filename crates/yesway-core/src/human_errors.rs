// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operator-facing messages for directory errors.
//
// The console shows these in warning dialogs and status lines. Each error
// maps to a short message, a suggestion, and a severity that picks the
// dialog level.

use crate::error::YeswayError;
use crate::types::RecordKind;

/// Severity of an error from the operator's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Trying again may work (the launcher could not start this time).
    Transient,
    /// The operator has to fix the input or pick something first.
    ActionRequired,
    /// Nothing the operator can do from the console.
    Permanent,
}

/// A plain message with a suggestion, ready for a dialog.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Dialog heading.
    pub message: String,
    /// Dialog body.
    pub suggestion: String,
    pub retriable: bool,
    pub severity: Severity,
}

impl HumanError {
    fn action(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    }
}

/// Convert a `YeswayError` into something the operator can act on.
pub fn humanize_error(err: &YeswayError) -> HumanError {
    match err {
        YeswayError::Validation { field } => HumanError::action(
            format!("Please enter a {}", field_label(field)),
            "This field can't be left empty.",
        ),

        YeswayError::DuplicateName {
            kind: RecordKind::Client,
            name,
        } => HumanError::action(
            "Username already exists!",
            format!("A client called \"{name}\" is already registered. Pick another name."),
        ),

        YeswayError::DuplicateName { kind, name } => HumanError::action(
            format!("A {kind} named \"{name}\" already exists."),
            "Names must be unique. Pick another name.",
        ),

        YeswayError::OutOfRange { kind, .. } | YeswayError::UnknownRecord { kind, .. } => {
            HumanError::action(
                format!("Please select a {kind} from the list."),
                "The selection may have been removed. Pick a row and try again.",
            )
        }

        YeswayError::NotFound { name } => HumanError::action(
            format!("No client named \"{name}\"."),
            "Check the spelling, or create the client first.",
        ),

        YeswayError::NotConfirmed => HumanError::action(
            "Nothing was deleted.",
            "The deletion was cancelled.",
        ),

        YeswayError::Launch(detail) => HumanError {
            message: "The remote desktop client didn't start.".into(),
            suggestion: format!(
                "Check that the remote desktop program is installed, then try again. ({detail})"
            ),
            retriable: true,
            severity: Severity::Transient,
        },

        YeswayError::PlatformUnavailable => HumanError {
            message: "Remote desktop isn't available here.".into(),
            suggestion: "Launching is turned off or not supported on this computer.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        YeswayError::Io(_) => HumanError {
            message: "The settings file couldn't be read.".into(),
            suggestion: "Default settings are in use. Check the file's permissions.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        YeswayError::Serialization(_) => HumanError {
            message: "The settings file is damaged.".into(),
            suggestion: "Default settings are in use. Fix or delete config.json.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "name" => "username",
        "client" => "client name",
        other => other,
    }
}
