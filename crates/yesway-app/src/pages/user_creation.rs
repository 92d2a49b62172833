// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User creation page: register a client and hand out its code, plus the
// client list with payment and profile updates for the selected client.

use dioxus::prelude::*;
use yesway_core::NewClient;

use super::{CELL_STYLE, INPUT_STYLE, TABLE_STYLE, button_style, row_bg};
use crate::dialogs;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn UserCreation() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut username = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut payment = use_signal(String::new);
    let mut computer = use_signal(String::new);
    let mut selected = use_signal(|| Option::<usize>::None);

    // Resolve the selected row to a client name, warning when there is none.
    let selected_client = {
        let svc = svc.clone();
        move || -> Option<String> {
            let Some(position) = *selected.read() else {
                dialogs::show_selection_needed("a client");
                return None;
            };
            match svc.client_name_at(position) {
                Ok(name) => Some(name),
                Err(e) => {
                    dialogs::show_error(&e);
                    None
                }
            }
        }
    };

    rsx! {
        div { style: "max-width: 640px;",
            h1 { "👤 Create New User" }

            input {
                r#type: "text",
                placeholder: "Enter Username",
                value: "{username}",
                style: INPUT_STYLE,
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Location (optional)",
                value: "{location}",
                style: INPUT_STYLE,
                oninput: move |evt| location.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Payment, e.g. ₹500 - Jan 2025 (optional)",
                value: "{payment}",
                style: INPUT_STYLE,
                oninput: move |evt| payment.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Computer (optional)",
                value: "{computer}",
                style: INPUT_STYLE,
                oninput: move |evt| computer.set(evt.value()),
            }

            button {
                style: button_style("#FFD700", "black"),
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let new_client = NewClient {
                            name: username.read().clone(),
                            location: Some(location.read().clone()),
                            initial_payment: Some(payment.read().clone()),
                            computer: Some(computer.read().clone()),
                        };
                        match svc.create_client(new_client) {
                            Ok(code) => {
                                let name = username.read().trim().to_string();
                                dialogs::show_info(
                                    "Success",
                                    &format!("User '{name}' created.\nUnique Code: {code}"),
                                );
                                username.set(String::new());
                                location.set(String::new());
                                payment.set(String::new());
                                computer.set(String::new());
                                state.write().refresh(&svc);
                            }
                            Err(e) => dialogs::show_error(&e),
                        }
                    }
                },
                "Generate User Code"
            }

            h2 { style: "margin-top: 32px;", "Clients" }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: CELL_STYLE, "Name" }
                        th { style: CELL_STYLE, "Code" }
                        th { style: CELL_STYLE, "Location" }
                        th { style: CELL_STYLE, "Computer" }
                        th { style: CELL_STYLE, "Payments" }
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
                            td { style: CELL_STYLE, "{client.location}" }
                            td { style: CELL_STYLE, "{client.computer}" }
                            td { style: CELL_STYLE, "{client.payments.len()}" }
                        }
                    }
                }
            }

            p { style: "color: #666; font-size: 13px;",
                "Select a client, fill in payment, location, or computer above, then:"
            }
            div { style: "display: flex; gap: 8px;",
                button {
                    style: button_style("#1E90FF", "white"),
                    onclick: {
                        let svc = svc.clone();
                        let selected_client = selected_client.clone();
                        move |_| {
                            let Some(name) = selected_client() else { return };
                            match svc.append_payment(&name, &payment.read()) {
                                Ok(()) => {
                                    payment.set(String::new());
                                    state.write().refresh(&svc);
                                }
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "Record Payment"
                }
                button {
                    style: button_style("#1E90FF", "white"),
                    onclick: {
                        let svc = svc.clone();
                        let selected_client = selected_client.clone();
                        move |_| {
                            let Some(name) = selected_client() else { return };
                            let result = svc.update_client_profile(
                                &name,
                                Some(location.read().as_str()),
                                Some(computer.read().as_str()),
                            );
                            match result {
                                Ok(()) => {
                                    location.set(String::new());
                                    computer.set(String::new());
                                    state.write().refresh(&svc);
                                }
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "Update Profile"
                }
            }
        }
    }
}
