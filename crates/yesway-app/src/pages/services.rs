// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page: the service table with quick add, manual add, edit,
// finish, delete, and client details.
//
// Rows are selected by position. A position is turned into a `ServiceId`
// only when an action runs, so a row that vanished in between surfaces as
// an index error instead of touching the wrong service.

use dioxus::prelude::*;
use yesway_core::{ManualService, SERVICE_STATUSES, ServiceId, ServiceUpdate, YeswayError};

use super::{CELL_STYLE, INPUT_STYLE, TABLE_STYLE, button_style, row_bg};
use crate::dialogs;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Services() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut selected = use_signal(|| Option::<usize>::None);
    let mut client = use_signal(String::new);
    let mut task = use_signal(String::new);
    let mut status = use_signal(|| SERVICE_STATUSES[0].to_string());
    let mut location = use_signal(String::new);
    let mut payment = use_signal(String::new);

    rsx! {
        div {
            h1 { "🛠 Current Services" }

            table { style: TABLE_STYLE,
                thead {
                    tr {
                        th { style: CELL_STYLE, "Client" }
                        th { style: CELL_STYLE, "Task" }
                        th { style: CELL_STYLE, "Status" }
                        th { style: CELL_STYLE, "Updated" }
                    }
                }
                tbody {
                    for (position, service) in state.read().services.iter().enumerate() {
                        {
                            let row_client = service.client_name.clone();
                            let row_task = service.task.clone();
                            let row_status = service.status.clone();
                            let updated = service.updated_at.format("%Y-%m-%d %H:%M").to_string();
                            let is_selected = *selected.read() == Some(position);

                            rsx! {
                                tr {
                                    key: "{service.id}",
                                    style: "cursor: pointer; background: {row_bg(is_selected)};",
                                    onclick: move |_| {
                                        selected.set(Some(position));
                                        client.set(row_client.clone());
                                        task.set(row_task.clone());
                                        status.set(row_status.clone());
                                    },
                                    td { style: CELL_STYLE, "{service.client_name}" }
                                    td { style: CELL_STYLE, "{service.task}" }
                                    td { style: "{CELL_STYLE} color: {status_fg(service.is_finished())};",
                                        "{service.status}"
                                    }
                                    td { style: "{CELL_STYLE} color: #999; font-size: 12px;", "{updated}" }
                                }
                            }
                        }
                    }
                }
            }

            // Row actions
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                button {
                    style: button_style("#FFD700", "black"),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let id = svc.quick_add_service();
                            tracing::debug!(service = %id, "quick add from services page");
                            state.write().refresh(&svc);
                        }
                    },
                    "➕ Add Service"
                }
                button {
                    style: button_style("#32CD32", "white"),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let Some(id) = resolve(&svc, *selected.read(), "a service to mark as Finished") else {
                                return;
                            };
                            match svc.finish_service(id) {
                                Ok(()) => state.write().refresh(&svc),
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "✔ Finish Service"
                }
                button {
                    style: button_style("#FF4500", "white"),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let Some(id) = resolve(&svc, *selected.read(), "a service to delete") else {
                                return;
                            };
                            let answer = dialogs::confirm("Are you sure you want to delete this service?");
                            match svc.delete_service(id, answer) {
                                Ok(_) => {
                                    selected.set(None);
                                    state.write().refresh(&svc);
                                }
                                Err(YeswayError::NotConfirmed) => {}
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "🗑 Delete Service"
                }
                button {
                    style: button_style("#1E90FF", "white"),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let Some(id) = resolve(&svc, *selected.read(), "a service") else {
                                return;
                            };
                            match svc.service_client_details(id) {
                                Ok(details) => dialogs::show_info("User Details", &details.to_string()),
                                Err(e) => dialogs::show_error(&e),
                            }
                        }
                    },
                    "ℹ Show Details"
                }
            }

            // Manual add / edit form
            h2 { style: "margin-top: 32px;", "Service Details" }
            div { style: "max-width: 520px;",
                input {
                    r#type: "text",
                    placeholder: "Client name",
                    value: "{client}",
                    style: INPUT_STYLE,
                    oninput: move |evt| client.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Task",
                    value: "{task}",
                    style: INPUT_STYLE,
                    oninput: move |evt| task.set(evt.value()),
                }
                select {
                    value: "{status}",
                    style: INPUT_STYLE,
                    onchange: move |evt| status.set(evt.value()),
                    for choice in status_choices(&status.read()) {
                        option { value: "{choice}", selected: *status.read() == choice, "{choice}" }
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Client location (optional, new or updated)",
                    value: "{location}",
                    style: INPUT_STYLE,
                    oninput: move |evt| location.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Payment (optional, appended to history)",
                    value: "{payment}",
                    style: INPUT_STYLE,
                    oninput: move |evt| payment.set(evt.value()),
                }

                div { style: "display: flex; gap: 8px;",
                    button {
                        style: button_style("#FFD700", "black"),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let form = ManualService {
                                    client_name: client.read().clone(),
                                    task: task.read().clone(),
                                    status: status.read().clone(),
                                    location: Some(location.read().clone()),
                                    payment: Some(payment.read().clone()),
                                };
                                match svc.add_service_manual(form) {
                                    Ok(_) => {
                                        location.set(String::new());
                                        payment.set(String::new());
                                        state.write().refresh(&svc);
                                    }
                                    Err(e) => dialogs::show_error(&e),
                                }
                            }
                        },
                        "Add Manually"
                    }
                    button {
                        style: button_style("#1E90FF", "white"),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let Some(id) = resolve(&svc, *selected.read(), "a service to edit") else {
                                    return;
                                };
                                let update = ServiceUpdate {
                                    client_name: client.read().clone(),
                                    task: task.read().clone(),
                                    status: status.read().clone(),
                                };
                                match svc.edit_service(id, update) {
                                    Ok(()) => state.write().refresh(&svc),
                                    Err(e) => dialogs::show_error(&e),
                                }
                            }
                        },
                        "Save Changes"
                    }
                }
            }
        }
    }
}

/// Turn the selected row into a service id, warning the operator when
/// nothing usable is selected.
fn resolve(svc: &AppServices, selected: Option<usize>, what: &str) -> Option<ServiceId> {
    let Some(position) = selected else {
        dialogs::show_selection_needed(what);
        return None;
    };
    match svc.service_id_at(position) {
        Ok(id) => Some(id),
        Err(e) => {
            dialogs::show_error(&e);
            None
        }
    }
}

/// Options for the status picker. A status outside the pickable set (the
/// finished marker, or a custom one) is offered too, so loading a row into
/// the form and saving keeps it.
fn status_choices(current: &str) -> Vec<String> {
    let mut choices: Vec<String> = SERVICE_STATUSES.iter().map(|s| s.to_string()).collect();
    if !current.is_empty() && !SERVICE_STATUSES.contains(&current) {
        choices.push(current.to_string());
    }
    choices
}

fn status_fg(finished: bool) -> &'static str {
    if finished { "#155724" } else { "#333" }
}

#[cfg(test)]
mod tests {
    use yesway_core::FINISHED_STATUS;

    use super::*;

    #[test]
    fn pickable_status_adds_no_extra_option() {
        assert_eq!(status_choices("Delayed"), SERVICE_STATUSES.to_vec());
    }

    #[test]
    fn finished_status_is_offered_so_it_survives_an_edit() {
        let choices = status_choices(FINISHED_STATUS);
        assert_eq!(choices.len(), SERVICE_STATUSES.len() + 1);
        assert_eq!(choices.last().map(String::as_str), Some(FINISHED_STATUS));
    }

    #[test]
    fn custom_status_is_offered() {
        assert!(status_choices("Waiting on parts").contains(&"Waiting on parts".to_string()));
    }
}
