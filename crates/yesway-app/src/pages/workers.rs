// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workers page: field personnel with add, edit, and delete.

use dioxus::prelude::*;
use yesway_core::{WorkerFields, WorkerId};

use super::{CELL_STYLE, INPUT_STYLE, TABLE_STYLE, button_style, row_bg};
use crate::dialogs;
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Workers() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut selected = use_signal(|| Option::<usize>::None);
    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut status = use_signal(String::new);

    let fields = move || WorkerFields::new(name.read().clone(), location.read().clone(), status.read().clone());

    rsx! {
        div {
            h1 { "👷 Workers" }

            if state.read().workers.is_empty() {
                p { style: "color: #aaa;", "No workers yet." }
            } else {
                table { style: TABLE_STYLE,
                    thead {
                        tr {
                            th { style: CELL_STYLE, "Name" }
                            th { style: CELL_STYLE, "Location" }
                            th { style: CELL_STYLE, "Status" }
                        }
                    }
                    tbody {
                        for (position, worker) in state.read().workers.iter().enumerate() {
                            {
                                let row = worker.clone();
                                let is_selected = *selected.read() == Some(position);

                                rsx! {
                                    tr {
                                        key: "{worker.id}",
                                        style: "cursor: pointer; background: {row_bg(is_selected)};",
                                        onclick: move |_| {
                                            selected.set(Some(position));
                                            name.set(row.name.clone());
                                            location.set(row.location.clone());
                                            status.set(row.status.clone());
                                        },
                                        td { style: CELL_STYLE, "{worker.name}" }
                                        td { style: CELL_STYLE, "{worker.location}" }
                                        td { style: CELL_STYLE, "{worker.status}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { style: "max-width: 520px; margin-top: 24px;",
                input {
                    r#type: "text",
                    placeholder: "Worker name",
                    value: "{name}",
                    style: INPUT_STYLE,
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Location",
                    value: "{location}",
                    style: INPUT_STYLE,
                    oninput: move |evt| location.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Status, e.g. Available",
                    value: "{status}",
                    style: INPUT_STYLE,
                    oninput: move |evt| status.set(evt.value()),
                }

                div { style: "display: flex; gap: 8px;",
                    button {
                        style: button_style("#FFD700", "black"),
                        onclick: {
                            let svc = svc.clone();
                            move |_| match svc.add_worker(fields()) {
                                Ok(_) => {
                                    name.set(String::new());
                                    location.set(String::new());
                                    status.set(String::new());
                                    state.write().refresh(&svc);
                                }
                                Err(e) => dialogs::show_error(&e),
                            }
                        },
                        "➕ Add Worker"
                    }
                    button {
                        style: button_style("#1E90FF", "white"),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let Some(id) = resolve(&svc, *selected.read(), "a worker to edit") else {
                                    return;
                                };
                                match svc.edit_worker(id, fields()) {
                                    Ok(()) => state.write().refresh(&svc),
                                    Err(e) => dialogs::show_error(&e),
                                }
                            }
                        },
                        "Save Changes"
                    }
                    button {
                        style: button_style("#FF4500", "white"),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let Some(id) = resolve(&svc, *selected.read(), "a worker to delete") else {
                                    return;
                                };
                                match svc.delete_worker(id) {
                                    Ok(removed) => {
                                        tracing::debug!(worker = %removed.name, "removed from workers page");
                                        selected.set(None);
                                        state.write().refresh(&svc);
                                    }
                                    Err(e) => dialogs::show_error(&e),
                                }
                            }
                        },
                        "🗑 Delete Worker"
                    }
                }
            }
        }
    }
}

fn resolve(svc: &AppServices, selected: Option<usize>, what: &str) -> Option<WorkerId> {
    let Some(position) = selected else {
        dialogs::show_selection_needed(what);
        return None;
    };
    match svc.worker_id_at(position) {
        Ok(id) => Some(id),
        Err(e) => {
            dialogs::show_error(&e);
            None
        }
    }
}
