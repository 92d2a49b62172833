// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Yesway admin console
//
// Entry point. Initialises logging, the directory services, and app state,
// then launches the Dioxus UI.

mod dialogs;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::dashboard::Dashboard;
use pages::orders::Orders;
use pages::remote_desktop::RemoteDesktop;
use pages::services::Services;
use pages::user_creation::UserCreation;
use pages::workers::Workers;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Yesway starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(SidebarLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/users")]
    UserCreation {},
    #[route("/services")]
    Services {},
    #[route("/workers")]
    Workers {},
    #[route("/orders")]
    Orders {},
    #[route("/remote")]
    RemoteDesktop {},
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(AppServices::init);

    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent sidebar wrapping all pages.
#[component]
fn SidebarLayout() -> Element {
    let state = use_context::<Signal<state::AppState>>();

    rsx! {
        div { class: "app-container",
            style: "display: flex; height: 100vh; font-family: Arial, system-ui, sans-serif;",

            nav { class: "sidebar",
                style: "display: flex; flex-direction: column; gap: 10px; width: 200px; padding: 20px; background: #FFD700;",
                h2 { style: "margin: 0 0 12px 0; text-align: center;", "Yesway" }
                NavButton { to: Route::Dashboard {}, label: "Dashboard" }
                NavButton { to: Route::UserCreation {}, label: "User Creation" }
                NavButton { to: Route::Services {}, label: "Services" }
                NavButton { to: Route::Workers {}, label: "Workers" }
                NavButton { to: Route::Orders {}, label: "Orders" }
                NavButton { to: Route::RemoteDesktop {}, label: "Remote Desktop" }
                button {
                    style: "padding: 10px; border-radius: 6px; border: none; background: white; color: black; font-size: 14px;",
                    onclick: move |_| {
                        tracing::info!("quit requested");
                        dioxus::desktop::window().close();
                    },
                    "Quit"
                }
            }

            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 20px;",
                if let Some(msg) = state.read().status_message.clone() {
                    p { style: "padding: 8px 12px; border-radius: 6px; background: #fff3cd; color: #856404; font-size: 14px;",
                        "{msg}"
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavButton(to: Route, label: &'static str) -> Element {
    let current = use_route::<Route>();
    let (bg, fg) = if current == to {
        ("#FFA500", "white")
    } else {
        ("white", "black")
    };

    rsx! {
        Link { to: to,
            style: "display: block; padding: 10px; border-radius: 6px; text-align: center; text-decoration: none; font-size: 14px; background: {bg}; color: {fg};",
            "{label}"
        }
    }
}
