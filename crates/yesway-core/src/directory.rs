// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory directory of clients, services, orders, and workers.
//
// The store is a plain owned value: the app constructs one at startup and
// passes it by handle to the UI. Every mutation validates first and only then
// touches state, so a rejected call leaves the directory exactly as it was.
//
// Services and workers are keyed by identifiers that are assigned once and
// never reused. The UI shows them as ordered lists; `service_id_at` and
// `worker_id_at` translate a list position into an identifier at that
// boundary. Positions shift after a delete, identifiers do not.

use std::collections::BTreeMap;

use chrono::Utc;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument, warn};

use crate::config::{RemoteConfig, StoreConfig};
use crate::error::{Result, YeswayError};
use crate::remote::{
    ConnectionAttempt, ConnectionLauncher, LaunchOutcome, LaunchRequest, resolve_address,
};
use crate::types::{
    Client, ClientCode, ClientDetails, Confirmation, DEFAULT_COMPUTER, DEFAULT_JOINED,
    DEFAULT_LOCATION, DashboardStats, FINISHED_STATUS, ManualService, NewClient, Order,
    QUICK_ADD_STATUSES, RecordKind, Service, ServiceId, ServiceUpdate, Worker, WorkerFields,
    WorkerId,
};

/// Owner of all directory records.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    config: StoreConfig,
    /// Insertion order is display order.
    clients: Vec<Client>,
    services: BTreeMap<ServiceId, Service>,
    orders: Vec<Order>,
    workers: BTreeMap<WorkerId, Worker>,
    next_service_id: ServiceId,
    next_worker_id: WorkerId,
}

impl DirectoryStore {
    /// An empty directory.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            clients: Vec::new(),
            services: BTreeMap::new(),
            orders: Vec::new(),
            workers: BTreeMap::new(),
            next_service_id: ServiceId::first(),
            next_worker_id: WorkerId::first(),
        }
    }

    /// A directory holding the demo records the console ships with.
    pub fn with_sample_data(config: StoreConfig) -> Self {
        let mut store = Self::new(config);
        let now = Utc::now();

        store.clients.push(Client {
            name: "Ali".into(),
            code: ClientCode::from_static("ALI12345"),
            location: "Kochi".into(),
            joined: "12 Jan 2025".into(),
            payments: vec!["₹500 - Jan 2025".into(), "₹800 - Feb 2025".into()],
            computer: "Dell Inspiron 15, Windows 11".into(),
            created_at: now,
        });
        store.clients.push(Client {
            name: "Amal".into(),
            code: ClientCode::from_static("AMAL6789"),
            location: "Calicut".into(),
            joined: "20 Feb 2025".into(),
            payments: vec!["₹1000 - Feb 2025".into()],
            computer: "HP Elitebook, Windows 10".into(),
            created_at: now,
        });

        store.insert_service("Ali".into(), "Fix Laptop".into(), "Pending".into());
        store.insert_service("Amal".into(), "Install ERP".into(), "In Progress".into());

        store.orders.push(Order {
            item_type: "Computer".into(),
            client_name: "Rahul".into(),
            date: "25 Aug 2025".into(),
        });
        store.orders.push(Order {
            item_type: "CCTV Setup".into(),
            client_name: "Afsal".into(),
            date: "26 Aug 2025".into(),
        });

        debug!("directory seeded with sample data");
        store
    }

    /// Build the directory the configuration asks for.
    pub fn from_config(config: StoreConfig) -> Self {
        if config.seed_sample_data {
            Self::with_sample_data(config)
        } else {
            Self::new(config)
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // -- Clients -------------------------------------------------------------

    /// Create a client and return its freshly issued code.
    pub fn create_client(&mut self, new_client: NewClient) -> Result<ClientCode> {
        self.create_client_with(new_client, ClientCode::generate)
    }

    /// `create_client` with an injectable code source.
    fn create_client_with(
        &mut self,
        new_client: NewClient,
        draw: impl FnMut() -> ClientCode,
    ) -> Result<ClientCode> {
        let name = required(&new_client.name, "name")?;
        if self.find_client(&name).is_some() {
            warn!(client = %name, "rejected duplicate client name");
            return Err(YeswayError::DuplicateName {
                kind: RecordKind::Client,
                name,
            });
        }

        let code = self.issue_code(draw);
        let client = Client {
            name: name.clone(),
            code: code.clone(),
            location: non_blank(new_client.location).unwrap_or_else(|| DEFAULT_LOCATION.into()),
            joined: DEFAULT_JOINED.into(),
            payments: non_blank(new_client.initial_payment).into_iter().collect(),
            computer: non_blank(new_client.computer).unwrap_or_else(|| DEFAULT_COMPUTER.into()),
            created_at: Utc::now(),
        };
        self.clients.push(client);

        info!(client = %name, code = %code, "client created");
        Ok(code)
    }

    /// Draw codes until one is not already issued.
    fn issue_code(&self, mut draw: impl FnMut() -> ClientCode) -> ClientCode {
        loop {
            let code = draw();
            if !self.clients.iter().any(|c| c.code == code) {
                return code;
            }
            debug!(code = %code, "client code collision, drawing again");
        }
    }

    /// Exact-match lookup by client name.
    pub fn lookup_client(&self, name: &str) -> Result<&Client> {
        self.find_client(name).ok_or_else(|| YeswayError::NotFound {
            name: name.to_string(),
        })
    }

    /// Details block for the named client.
    pub fn client_details(&self, name: &str) -> Result<ClientDetails> {
        self.lookup_client(name).map(ClientDetails::from)
    }

    /// Add a payment record to the end of a client's history.
    pub fn append_payment(&mut self, name: &str, payment: &str) -> Result<()> {
        let payment = required(payment, "payment")?;
        let client = self.find_client_mut(name)?;
        client.payments.push(payment);
        info!(client = %name, payments = client.payments.len(), "payment recorded");
        Ok(())
    }

    /// Overwrite location and/or computer; blank values leave a field alone.
    pub fn update_client_profile(
        &mut self,
        name: &str,
        location: Option<&str>,
        computer: Option<&str>,
    ) -> Result<()> {
        let client = self.find_client_mut(name)?;
        if let Some(location) = non_blank(location.map(str::to_string)) {
            client.location = location;
        }
        if let Some(computer) = non_blank(computer.map(str::to_string)) {
            client.computer = computer;
        }
        info!(client = %name, "client profile updated");
        Ok(())
    }

    /// Clients in insertion order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    fn find_client(&self, name: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.name == name)
    }

    fn find_client_mut(&mut self, name: &str) -> Result<&mut Client> {
        self.clients
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| YeswayError::NotFound {
                name: name.to_string(),
            })
    }

    // -- Services ------------------------------------------------------------

    /// Append a service with a drawn status. The client is neither checked
    /// nor created.
    pub fn quick_add_service(&mut self, client_name: &str, task: &str) -> ServiceId {
        let status = if self.config.randomize_quick_add {
            QUICK_ADD_STATUSES[..]
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(QUICK_ADD_STATUSES[0])
        } else {
            QUICK_ADD_STATUSES[0]
        };
        let id = self.insert_service(client_name.into(), task.into(), status.into());
        info!(service = %id, client = %client_name, status, "service quick-added");
        id
    }

    /// Quick-add using the configured placeholder client and task.
    pub fn quick_add_default_service(&mut self) -> ServiceId {
        let client = self.config.quick_add_client.clone();
        let task = self.config.quick_add_task.clone();
        self.quick_add_service(&client, &task)
    }

    /// Append a service from the manual form, creating or enriching its
    /// client.
    pub fn add_service_manual(&mut self, form: ManualService) -> Result<ServiceId> {
        let client_name = required(&form.client_name, "client")?;
        let task = required(&form.task, "task")?;
        let status = required(&form.status, "status")?;
        let location = non_blank(form.location);
        let payment = non_blank(form.payment);

        match self.clients.iter_mut().find(|c| c.name == client_name) {
            Some(client) => {
                if let Some(location) = location {
                    client.location = location;
                }
                if let Some(payment) = payment {
                    client.payments.push(payment);
                }
            }
            None => {
                let new_client = NewClient {
                    name: client_name.clone(),
                    location,
                    initial_payment: payment,
                    computer: None,
                };
                self.create_client(new_client)?;
            }
        }

        let id = self.insert_service(client_name.clone(), task, status);
        info!(service = %id, client = %client_name, "service added");
        Ok(id)
    }

    /// Overwrite client, task, and status of a service. Fields are trimmed
    /// but otherwise taken as given.
    pub fn edit_service(&mut self, id: ServiceId, update: ServiceUpdate) -> Result<()> {
        let service = self.service_mut(id)?;
        service.client_name = update.client_name.trim().to_string();
        service.task = update.task.trim().to_string();
        service.status = update.status.trim().to_string();
        service.updated_at = Utc::now();
        info!(service = %id, "service edited");
        Ok(())
    }

    /// Mark a service finished. Applying it again changes nothing.
    pub fn finish_service(&mut self, id: ServiceId) -> Result<()> {
        let service = self.service_mut(id)?;
        service.status = FINISHED_STATUS.into();
        service.updated_at = Utc::now();
        info!(service = %id, "service finished");
        Ok(())
    }

    /// Remove a service once the operator has confirmed. Later services move
    /// up one position.
    pub fn delete_service(&mut self, id: ServiceId, confirmation: Confirmation) -> Result<Service> {
        if !self.services.contains_key(&id) {
            return Err(unknown(RecordKind::Service, id.get()));
        }
        if confirmation != Confirmation::Confirmed {
            debug!(service = %id, "service deletion declined");
            return Err(YeswayError::NotConfirmed);
        }
        let removed = self
            .services
            .remove(&id)
            .ok_or_else(|| unknown(RecordKind::Service, id.get()))?;
        info!(service = %id, client = %removed.client_name, "service deleted");
        Ok(removed)
    }

    pub fn service(&self, id: ServiceId) -> Result<&Service> {
        self.services
            .get(&id)
            .ok_or_else(|| unknown(RecordKind::Service, id.get()))
    }

    /// Services in creation order.
    pub fn services(&self) -> impl ExactSizeIterator<Item = &Service> {
        self.services.values()
    }

    /// Identifier of the service shown at `position`.
    pub fn service_id_at(&self, position: usize) -> Result<ServiceId> {
        self.services
            .keys()
            .nth(position)
            .copied()
            .ok_or(YeswayError::OutOfRange {
                kind: RecordKind::Service,
                position,
                len: self.services.len(),
            })
    }

    /// Current list position of a service.
    pub fn service_position(&self, id: ServiceId) -> Option<usize> {
        self.services.keys().position(|k| *k == id)
    }

    /// Details of the client a service refers to.
    pub fn service_client_details(&self, id: ServiceId) -> Result<ClientDetails> {
        let service = self.service(id)?;
        self.client_details(&service.client_name)
    }

    fn insert_service(&mut self, client_name: String, task: String, status: String) -> ServiceId {
        let id = self.next_service_id;
        self.next_service_id = id.next();
        self.services.insert(
            id,
            Service {
                id,
                client_name,
                task,
                status,
                updated_at: Utc::now(),
            },
        );
        id
    }

    fn service_mut(&mut self, id: ServiceId) -> Result<&mut Service> {
        self.services
            .get_mut(&id)
            .ok_or_else(|| unknown(RecordKind::Service, id.get()))
    }

    // -- Orders --------------------------------------------------------------

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // -- Workers -------------------------------------------------------------

    /// Add a worker; all fields required, name unique among workers.
    pub fn add_worker(&mut self, fields: WorkerFields) -> Result<WorkerId> {
        let fields = validate_worker(fields)?;
        if self.worker_named(&fields.name, None).is_some() {
            warn!(worker = %fields.name, "rejected duplicate worker name");
            return Err(YeswayError::DuplicateName {
                kind: RecordKind::Worker,
                name: fields.name,
            });
        }

        let id = self.next_worker_id;
        self.next_worker_id = id.next();
        info!(worker = %id, name = %fields.name, "worker added");
        self.workers.insert(
            id,
            Worker {
                id,
                name: fields.name,
                location: fields.location,
                status: fields.status,
            },
        );
        Ok(id)
    }

    /// Overwrite a worker. Keeping the same name is fine; taking another
    /// worker's name is not.
    pub fn edit_worker(&mut self, id: WorkerId, fields: WorkerFields) -> Result<()> {
        if !self.workers.contains_key(&id) {
            return Err(unknown(RecordKind::Worker, id.get()));
        }
        let fields = validate_worker(fields)?;
        if self.worker_named(&fields.name, Some(id)).is_some() {
            warn!(worker = %id, name = %fields.name, "rejected worker rename to taken name");
            return Err(YeswayError::DuplicateName {
                kind: RecordKind::Worker,
                name: fields.name,
            });
        }

        let worker = self
            .workers
            .get_mut(&id)
            .ok_or_else(|| unknown(RecordKind::Worker, id.get()))?;
        worker.name = fields.name;
        worker.location = fields.location;
        worker.status = fields.status;
        info!(worker = %id, "worker edited");
        Ok(())
    }

    /// Remove a worker. Later workers move up one position.
    pub fn delete_worker(&mut self, id: WorkerId) -> Result<Worker> {
        let removed = self
            .workers
            .remove(&id)
            .ok_or_else(|| unknown(RecordKind::Worker, id.get()))?;
        info!(worker = %id, name = %removed.name, "worker deleted");
        Ok(removed)
    }

    pub fn worker(&self, id: WorkerId) -> Result<&Worker> {
        self.workers
            .get(&id)
            .ok_or_else(|| unknown(RecordKind::Worker, id.get()))
    }

    /// Workers in creation order.
    pub fn workers(&self) -> impl ExactSizeIterator<Item = &Worker> {
        self.workers.values()
    }

    /// Identifier of the worker shown at `position`.
    pub fn worker_id_at(&self, position: usize) -> Result<WorkerId> {
        self.workers
            .keys()
            .nth(position)
            .copied()
            .ok_or(YeswayError::OutOfRange {
                kind: RecordKind::Worker,
                position,
                len: self.workers.len(),
            })
    }

    fn worker_named(&self, name: &str, except: Option<WorkerId>) -> Option<&Worker> {
        self.workers
            .values()
            .find(|w| w.name == name && Some(w.id) != except)
    }

    // -- Dashboard -----------------------------------------------------------

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_clients: self.clients.len(),
            active_services: self.services.values().filter(|s| !s.is_finished()).count(),
            total_services: self.services.len(),
            pending_orders: self.orders.len(),
            total_workers: self.workers.len(),
        }
    }

    // -- Remote desktop ------------------------------------------------------

    /// Hand a connection to `client_name` off to the launcher.
    ///
    /// Returns once the launcher has spawned (or failed to spawn) the remote
    /// desktop client; the session outcome is never observed. Launch failures
    /// are reported inside the attempt, an unknown client is an error.
    #[instrument(skip(self, config, launcher), fields(launcher = launcher.launcher_name()))]
    pub fn initiate_remote_connection(
        &self,
        client_name: &str,
        config: &RemoteConfig,
        launcher: &dyn ConnectionLauncher,
    ) -> Result<ConnectionAttempt> {
        let client = self.lookup_client(client_name)?;
        let address = resolve_address(config, client);
        let request = LaunchRequest::build(config, &address);

        let outcome = match launcher.launch(&request) {
            Ok(()) => {
                info!(client = %client.name, address = %address, "remote session launched");
                LaunchOutcome::Spawned
            }
            Err(e) => {
                warn!(client = %client.name, error = %e, "remote session launch failed");
                LaunchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Ok(ConnectionAttempt {
            client_name: client.name.clone(),
            client_code: client.code.clone(),
            address,
            launcher: launcher.launcher_name().to_string(),
            outcome,
            requested_at: Utc::now(),
        })
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

// -- Validation helpers ------------------------------------------------------

/// Trimmed value, or a validation error naming `field` when blank.
fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(YeswayError::Validation { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed value when present and not blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn validate_worker(fields: WorkerFields) -> Result<WorkerFields> {
    Ok(WorkerFields {
        name: required(&fields.name, "name")?,
        location: required(&fields.location, "location")?,
        status: required(&fields.status, "status")?,
    })
}

fn unknown(kind: RecordKind, id: u64) -> YeswayError {
    YeswayError::UnknownRecord { kind, id }
}
