// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reactive view state: a snapshot of the directory that pages render from.
// Every action mutates the store through `AppServices` and then calls
// `refresh`, so each view re-reads everything after a change.

use yesway_core::remote::ConnectionAttempt;
use yesway_core::{Client, DashboardStats, Order, Service, Worker};

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub clients: Vec<Client>,
    pub services: Vec<Service>,
    pub orders: Vec<Order>,
    pub workers: Vec<Worker>,
    pub stats: DashboardStats,
    /// Last remote connection attempt, shown on the remote desktop page.
    pub last_attempt: Option<ConnectionAttempt>,
    /// Status line for feedback that doesn't warrant a dialog.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(svc: &AppServices) -> Self {
        let mut state = Self {
            status_message: svc
                .config_error()
                .map(|e| format!("Using default settings: {e}")),
            ..Self::default()
        };
        state.refresh(svc);
        state
    }

    /// Re-read every collection from the store.
    pub fn refresh(&mut self, svc: &AppServices) {
        svc.with_store(|store| {
            self.clients = store.clients().to_vec();
            self.services = store.services().cloned().collect();
            self.orders = store.orders().to_vec();
            self.workers = store.workers().cloned().collect();
            self.stats = store.dashboard_stats();
        });
    }
}
