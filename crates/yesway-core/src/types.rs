// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Yesway admin console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status given to a service by the Finish action. Contains a glyph no status
/// picker offers, so a finished service can always be told apart.
pub const FINISHED_STATUS: &str = "Finished ✅";

/// Statuses the operator picks from when adding or editing a service.
pub const SERVICE_STATUSES: [&str; 4] = ["Pending", "In Progress", "Delayed", "Done"];

/// Statuses a quick-added service is drawn from.
pub const QUICK_ADD_STATUSES: [&str; 3] = ["Pending", "Delayed", "Done"];

pub const DEFAULT_LOCATION: &str = "Unknown";
pub const DEFAULT_JOINED: &str = "Today";
pub const DEFAULT_COMPUTER: &str = "Not Registered";

/// Length of a generated client code.
pub const CLIENT_CODE_LEN: usize = 8;

/// Record collections held by the directory, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Client,
    Service,
    Worker,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Client => "client",
            Self::Service => "service",
            Self::Worker => "worker",
        };
        f.write_str(label)
    }
}

/// Short opaque code identifying a client, e.g. `3F9A01BC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientCode(String);

impl ClientCode {
    /// Draw a fresh code: the first eight hex digits of a v4 UUID, uppercased.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..CLIENT_CODE_LEN].to_ascii_uppercase())
    }

    /// Wrap an existing code (sample data).
    pub fn from_static(code: &str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! record_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            pub const fn get(self) -> u64 {
                self.0
            }

            pub(crate) const fn next(self) -> Self {
                Self(self.0 + 1)
            }

            pub(crate) const fn first() -> Self {
                Self(1)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(ServiceId, "Stable identifier of a service, assigned at creation and never reused.");
record_id!(WorkerId, "Stable identifier of a worker, assigned at creation and never reused.");

/// A client tracked for billing, location, and equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub code: ClientCode,
    pub location: String,
    pub joined: String,
    /// Payment history, oldest first.
    pub payments: Vec<String>,
    pub computer: String,
    pub created_at: DateTime<Utc>,
}

/// A unit of work tied to a client by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    /// Name of the client; the client need not exist.
    pub client_name: String,
    pub task: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn is_finished(&self) -> bool {
        self.status == FINISHED_STATUS
    }
}

/// A client's purchase request. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub item_type: String,
    pub client_name: String,
    pub date: String,
}

/// Field personnel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub location: String,
    pub status: String,
}

/// Input for creating a client. Blank optional fields fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub name: String,
    pub location: Option<String>,
    pub initial_payment: Option<String>,
    pub computer: Option<String>,
}

impl NewClient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn initial_payment(mut self, payment: impl Into<String>) -> Self {
        self.initial_payment = Some(payment.into());
        self
    }

    pub fn computer(mut self, computer: impl Into<String>) -> Self {
        self.computer = Some(computer.into());
        self
    }
}

/// Input for the manual "Add Service" form.
#[derive(Debug, Clone, Default)]
pub struct ManualService {
    pub client_name: String,
    pub task: String,
    pub status: String,
    /// Overwrites an existing client's location when non-empty.
    pub location: Option<String>,
    /// Appended to an existing client's payments when non-empty.
    pub payment: Option<String>,
}

/// Replacement fields for an existing service.
#[derive(Debug, Clone)]
pub struct ServiceUpdate {
    pub client_name: String,
    pub task: String,
    pub status: String,
}

/// The three fields every worker carries, used for both create and edit.
#[derive(Debug, Clone)]
pub struct WorkerFields {
    pub name: String,
    pub location: String,
    pub status: String,
}

impl WorkerFields {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            status: status.into(),
        }
    }
}

/// Operator's answer to a "really delete?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_clients: usize,
    /// Services not yet finished.
    pub active_services: usize,
    pub total_services: usize,
    pub pending_orders: usize,
    pub total_workers: usize,
}

/// Client summary shown by the "Show Details" actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDetails {
    pub name: String,
    pub location: String,
    pub joined: String,
    pub computer: String,
    pub payments: Vec<String>,
}

impl From<&Client> for ClientDetails {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            location: client.location.clone(),
            joined: client.joined.clone(),
            computer: client.computer.clone(),
            payments: client.payments.clone(),
        }
    }
}

impl std::fmt::Display for ClientDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Joined: {}", self.joined)?;
        writeln!(f, "Computer: {}", self.computer)?;
        writeln!(f, "Payment History:")?;
        if self.payments.is_empty() {
            write!(f, "- No Payments")
        } else {
            write!(f, "- {}", self.payments.join("\n- "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_code_is_eight_uppercase_alphanumerics() {
        let code = ClientCode::generate();
        assert_eq!(code.as_str().len(), CLIENT_CODE_LEN);
        assert!(
            code.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn finished_marker_is_not_a_pickable_status() {
        assert!(!SERVICE_STATUSES.contains(&FINISHED_STATUS));
        assert!(!QUICK_ADD_STATUSES.contains(&FINISHED_STATUS));
    }

    #[test]
    fn details_without_payments_say_so() {
        let details = ClientDetails {
            name: "Ali".into(),
            location: "Kochi".into(),
            joined: "Today".into(),
            computer: "Not Registered".into(),
            payments: Vec::new(),
        };
        let text = details.to_string();
        assert!(text.starts_with("Name: Ali\nLocation: Kochi\n"));
        assert!(text.ends_with("Payment History:\n- No Payments"));
    }

    #[test]
    fn details_list_payments_one_per_line() {
        let details = ClientDetails {
            name: "Amal".into(),
            location: "Calicut".into(),
            joined: "20 Feb 2025".into(),
            computer: "HP Elitebook, Windows 10".into(),
            payments: vec!["₹500 - Jan 2025".into(), "₹800 - Feb 2025".into()],
        };
        assert!(
            details
                .to_string()
                .ends_with("- ₹500 - Jan 2025\n- ₹800 - Feb 2025")
        );
    }

    #[test]
    fn confirmation_from_bool() {
        assert_eq!(Confirmation::from(true), Confirmation::Confirmed);
        assert_eq!(Confirmation::from(false), Confirmation::Declined);
    }
}
