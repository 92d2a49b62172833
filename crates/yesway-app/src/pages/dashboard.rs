// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard: directory counters.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let stats = state.read().stats;

    rsx! {
        div {
            h1 { "📊 Admin Dashboard" }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 12px; margin: 24px 0;",
                StatCard { label: "Total Clients", value: stats.total_clients }
                StatCard { label: "Active Services", value: stats.active_services }
                StatCard { label: "All Services", value: stats.total_services }
                StatCard { label: "Pending Orders", value: stats.pending_orders }
                StatCard { label: "Workers", value: stats.total_workers }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        div { style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 8px; text-align: center;",
            div { style: "font-size: 28px; font-weight: bold;", "{value}" }
            div { style: "color: #666; font-size: 14px;", "{label}" }
        }
    }
}
