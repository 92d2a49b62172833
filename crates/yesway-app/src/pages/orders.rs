// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Orders page. Orders are read-only.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Orders() -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            h1 { "🛒 New Orders" }
            if state.read().orders.is_empty() {
                p { style: "color: #aaa;", "No orders yet." }
            }
            ul { style: "list-style: none; padding-left: 20px; font-size: 16px;",
                for order in state.read().orders.iter() {
                    li { style: "margin: 6px 0;",
                        "• {order.date} - {order.client_name} ordered {order.item_type}"
                    }
                }
            }
        }
    }
}
