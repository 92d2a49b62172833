// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: owns the directory store and the remote launcher,
// and gives pages one method per operator action.
//
// The UI runs on a single thread, so the store sits in `Rc<RefCell<>>`.
// Borrows never outlive a method call.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tracing::{info, warn};
use yesway_core::error::{Result, YeswayError};
use yesway_core::remote::{ConnectionAttempt, ConnectionLauncher};
use yesway_core::{
    AppConfig, ClientCode, ClientDetails, Confirmation, DirectoryStore, ManualService, NewClient,
    RecordKind, Service, ServiceId, ServiceUpdate, Worker, WorkerFields, WorkerId,
};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    store: Rc<RefCell<DirectoryStore>>,
    launcher: Rc<dyn ConnectionLauncher>,
    config: Rc<AppConfig>,
    /// Set when `config.json` existed but could not be used.
    config_error: Rc<Option<String>>,
}

impl AppServices {
    /// Initialise from the platform data directory. Call once at startup.
    pub fn init() -> Self {
        Self::from_dir(&data_dir::data_dir())
    }

    /// Initialise from an explicit directory holding an optional
    /// `config.json`. A broken config file falls back to defaults.
    pub fn from_dir(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        info!(path = %path.display(), "initialising app services");

        let (config, config_error) = match AppConfig::load_or_default(&path) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!(error = %e, "config unusable, falling back to defaults");
                (AppConfig::default(), Some(e.to_string()))
            }
        };

        let store = DirectoryStore::from_config(config.store.clone());
        let launcher: Rc<dyn ConnectionLauncher> =
            Rc::from(yesway_bridge::connection_launcher(&config.remote));

        info!(
            clients = store.clients().len(),
            launcher = launcher.launcher_name(),
            "app services initialised"
        );

        Self {
            store: Rc::new(RefCell::new(store)),
            launcher,
            config: Rc::new(config),
            config_error: Rc::new(config_error),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_error(&self) -> Option<&str> {
        self.config_error.as_deref()
    }

    /// Read-only access to the store for building view snapshots.
    pub fn with_store<R>(&self, read: impl FnOnce(&DirectoryStore) -> R) -> R {
        read(&self.store.borrow())
    }

    // -- Clients -------------------------------------------------------------

    pub fn create_client(&self, new_client: NewClient) -> Result<ClientCode> {
        self.store.borrow_mut().create_client(new_client)
    }

    pub fn client_details(&self, name: &str) -> Result<ClientDetails> {
        self.store.borrow().client_details(name)
    }

    pub fn append_payment(&self, name: &str, payment: &str) -> Result<()> {
        self.store.borrow_mut().append_payment(name, payment)
    }

    pub fn update_client_profile(
        &self,
        name: &str,
        location: Option<&str>,
        computer: Option<&str>,
    ) -> Result<()> {
        self.store
            .borrow_mut()
            .update_client_profile(name, location, computer)
    }

    // -- Services ------------------------------------------------------------

    /// The quick "Add Service" button.
    pub fn quick_add_service(&self) -> ServiceId {
        self.store.borrow_mut().quick_add_default_service()
    }

    pub fn add_service_manual(&self, form: ManualService) -> Result<ServiceId> {
        self.store.borrow_mut().add_service_manual(form)
    }

    /// Translate a list row into a service identifier.
    pub fn service_id_at(&self, position: usize) -> Result<ServiceId> {
        self.store.borrow().service_id_at(position)
    }

    pub fn edit_service(&self, id: ServiceId, update: ServiceUpdate) -> Result<()> {
        self.store.borrow_mut().edit_service(id, update)
    }

    pub fn finish_service(&self, id: ServiceId) -> Result<()> {
        self.store.borrow_mut().finish_service(id)
    }

    pub fn delete_service(&self, id: ServiceId, confirmation: Confirmation) -> Result<Service> {
        self.store.borrow_mut().delete_service(id, confirmation)
    }

    pub fn service_client_details(&self, id: ServiceId) -> Result<ClientDetails> {
        self.store.borrow().service_client_details(id)
    }

    // -- Workers -------------------------------------------------------------

    pub fn worker_id_at(&self, position: usize) -> Result<WorkerId> {
        self.store.borrow().worker_id_at(position)
    }

    pub fn add_worker(&self, fields: WorkerFields) -> Result<WorkerId> {
        self.store.borrow_mut().add_worker(fields)
    }

    pub fn edit_worker(&self, id: WorkerId, fields: WorkerFields) -> Result<()> {
        self.store.borrow_mut().edit_worker(id, fields)
    }

    pub fn delete_worker(&self, id: WorkerId) -> Result<Worker> {
        self.store.borrow_mut().delete_worker(id)
    }

    // -- Remote desktop ------------------------------------------------------

    /// Start a remote session to the named client with the configured
    /// launcher.
    pub fn connect(&self, client_name: &str) -> Result<ConnectionAttempt> {
        self.store.borrow().initiate_remote_connection(
            client_name,
            &self.config.remote,
            self.launcher.as_ref(),
        )
    }

    /// Name of the client shown at `position` in the client list.
    pub fn client_name_at(&self, position: usize) -> Result<String> {
        let store = self.store.borrow();
        store
            .clients()
            .get(position)
            .map(|c| c.name.clone())
            .ok_or(YeswayError::OutOfRange {
                kind: RecordKind::Client,
                position,
                len: store.clients().len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use yesway_core::remote::LaunchOutcome;

    use super::*;

    fn services_with(config_json: Option<&str>) -> (tempfile::TempDir, AppServices) {
        let dir = tempfile::tempdir().expect("tempdir");
        if let Some(json) = config_json {
            std::fs::write(dir.path().join(CONFIG_FILE), json).expect("write config");
        }
        let svc = AppServices::from_dir(dir.path());
        (dir, svc)
    }

    #[test]
    fn missing_config_starts_with_sample_data() {
        let (_dir, svc) = services_with(None);
        assert!(svc.config_error().is_none());
        assert_eq!(svc.with_store(|s| s.clients().len()), 2);
        assert_eq!(svc.client_name_at(1).expect("second client"), "Amal");
    }

    #[test]
    fn broken_config_falls_back_and_reports() {
        let (_dir, svc) = services_with(Some("{ nope"));
        assert!(svc.config_error().is_some());
        assert_eq!(svc.config(), &AppConfig::default());
    }

    #[test]
    fn disabled_launching_records_a_failed_attempt() {
        let (_dir, svc) = services_with(Some(
            r#"{ "remote": { "launch_enabled": false }, "store": { "seed_sample_data": true } }"#,
        ));
        let attempt = svc.connect("Ali").expect("known client");
        assert_eq!(attempt.launcher, "stub");
        assert!(matches!(attempt.outcome, LaunchOutcome::Failed { .. }));
    }

    #[test]
    fn row_positions_follow_deletes() {
        let (_dir, svc) = services_with(Some(
            r#"{ "store": { "randomize_quick_add": false } }"#,
        ));
        let first = svc.service_id_at(0).expect("row 0");
        let second = svc.service_id_at(1).expect("row 1");
        svc.delete_service(first, Confirmation::Confirmed)
            .expect("delete");
        assert_eq!(svc.service_id_at(0).expect("row 0"), second);
        assert!(svc.service_id_at(1).expect_err("gone").is_index_error());
        assert!(svc.client_name_at(9).expect_err("no row").is_index_error());
    }
}
