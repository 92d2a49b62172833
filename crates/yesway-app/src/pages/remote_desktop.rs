// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote desktop page: pick a client and hand a session off to the
// configured remote desktop program.

use dioxus::prelude::*;
use yesway_core::remote::ConnectionAttempt;

use super::{CELL_STYLE, TABLE_STYLE, button_style, row_bg};
use crate::dialogs;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn RemoteDesktop() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut selected = use_signal(|| Option::<usize>::None);

    let selected_client = {
        let svc = svc.clone();
        move |what: &str| -> Option<String> {
            let Some(position) = *selected.read() else {
                dialogs::show_selection_needed(what);
                return None;
            };
            svc.client_name_at(position)
                .map_err(|e| dialogs::show_error(&e))
                .ok()
        }
    };

    let remote = svc.config().remote.clone();

    rsx! {
        div {
            h1 { "🖥 Remote Desktop Access" }
            p { style: "color: #666; font-size: 14px;",
                "Sessions open with {remote.program} at {remote.address}."
            }

            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: CELL_STYLE, "Username" }
                        th { style: CELL_STYLE, "Unique Code" }
                    }
                }
                tbody {
                    for (position, client) in state.read().clients.iter().enumerate() {
                        tr {
                            key: "{client.code}",
                            style: "cursor: pointer; background: {row_bg(*selected.read() == Some(position))};",
                            onclick: move |_| selected.set(Some(position)),
                            td { style: CELL_STYLE, "{client.name}" }
                            td { style: CELL_STYLE, "{client.code}" }
                        }
                    }
                }
            }

            div { style: "display: flex; gap: 8px;",
                button {
                    style: button_style("#FFD700", "black"),
                    onclick: {
                        let svc = svc.clone();
                        let selected_client = selected_client.clone();
                        move |_| {
                            let Some(name) = selected_client("a client to connect") else {
                                return;
                            };
                            match svc.connect(&name) {
                                Ok(attempt) => {
                                    dialogs::show_info("Connecting", &attempt.summary());
                                    state.write().last_attempt = Some(attempt);
                                }
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "🔗 Connect to Client"
                }
                button {
                    style: button_style("#1E90FF", "white"),
                    onclick: {
                        let svc = svc.clone();
                        let selected_client = selected_client.clone();
                        move |_| {
                            let Some(name) = selected_client("a client") else {
                                return;
                            };
                            match svc.client_details(&name) {
                                Ok(details) => dialogs::show_info("User Details", &details.to_string()),
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "ℹ Show User Details"
                }
            }

            if let Some(attempt) = state.read().last_attempt.clone() {
                AttemptCard { attempt }
            }
        }
    }
}

#[component]
fn AttemptCard(attempt: ConnectionAttempt) -> Element {
    let at = attempt.requested_at.format("%H:%M:%S").to_string();

    rsx! {
        div { style: "margin-top: 24px; padding: 12px; border: 1px solid #e0e0e0; border-radius: 8px;",
            strong { "Last attempt" }
            p { style: "margin: 4px 0; color: {attempt_fg(attempt.spawned())};", "{attempt.summary()}" }
            p { style: "margin: 0; color: #999; font-size: 12px;",
                "{attempt.client_code} via {attempt.launcher} at {at}"
            }
        }
    }
}

fn attempt_fg(spawned: bool) -> &'static str {
    if spawned { "#155724" } else { "#721c24" }
}
