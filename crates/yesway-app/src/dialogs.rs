// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native message boxes for warnings, confirmations, and details.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use yesway_core::human_errors::{Severity, humanize_error};
use yesway_core::{Confirmation, YeswayError};

/// Show a directory error as a warning dialog.
pub fn show_error(err: &YeswayError) {
    tracing::debug!(error = %err, "showing error dialog");
    let human = humanize_error(err);
    let level = match human.severity {
        Severity::Permanent => MessageLevel::Error,
        Severity::Transient | Severity::ActionRequired => MessageLevel::Warning,
    };
    MessageDialog::new()
        .set_title("Error")
        .set_description(format!("{}\n\n{}", human.message, human.suggestion))
        .set_level(level)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Warn that an action needs a selected row first.
pub fn show_selection_needed(what: &str) {
    MessageDialog::new()
        .set_title("Error")
        .set_description(format!("Please select {what}"))
        .set_level(MessageLevel::Warning)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, text: &str) {
    MessageDialog::new()
        .set_title(title)
        .set_description(text)
        .set_level(MessageLevel::Info)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Ask a yes/no question.
pub fn confirm(question: &str) -> Confirmation {
    let answer = MessageDialog::new()
        .set_title("Confirm")
        .set_description(question)
        .set_level(MessageLevel::Warning)
        .set_buttons(MessageButtons::YesNo)
        .show();
    Confirmation::from(matches!(answer, MessageDialogResult::Yes))
}
