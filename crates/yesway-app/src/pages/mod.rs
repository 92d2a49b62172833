// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod dashboard;
pub mod orders;
pub mod remote_desktop;
pub mod services;
pub mod user_creation;
pub mod workers;

/// Shared inline styles.
pub(crate) const INPUT_STYLE: &str = "width: 100%; padding: 10px; font-size: 15px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box; margin-bottom: 8px;";
pub(crate) const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin: 12px 0;";
pub(crate) const CELL_STYLE: &str = "padding: 8px; border-bottom: 1px solid #e0e0e0; text-align: left;";

/// Background for a table row, highlighted when selected.
pub(crate) fn row_bg(selected: bool) -> &'static str {
    if selected { "#FFFACD" } else { "white" }
}

pub(crate) fn button_style(bg: &str, fg: &str) -> String {
    format!(
        "padding: 8px 14px; border-radius: 6px; border: none; background: {bg}; color: {fg}; font-size: 14px; cursor: pointer;"
    )
}
