// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote desktop hand-off: address resolution and the launcher seam.
//
// The console never speaks a remote desktop protocol itself. It resolves an
// address for the chosen client, builds a command line for an existing
// remote desktop client, and hands it to a `ConnectionLauncher`, which the
// platform bridge implements.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RemoteConfig;
use crate::error::Result;
use crate::types::{Client, ClientCode};

/// Placeholder substituted into launcher arguments.
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Starts an external remote desktop client.
///
/// Implementations must return as soon as the process has been spawned and
/// never wait for the session itself.
pub trait ConnectionLauncher {
    /// Spawn the program described by `request`.
    fn launch(&self, request: &LaunchRequest) -> Result<()>;

    /// Short name for logs and the UI (e.g. "process", "stub").
    fn launcher_name(&self) -> &str;
}

/// A fully resolved command line for the remote desktop client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRequest {
    pub program: String,
    pub args: Vec<String>,
    pub address: String,
}

impl LaunchRequest {
    /// Substitute `address` into the configured argument templates.
    pub fn build(config: &RemoteConfig, address: &str) -> Self {
        Self {
            program: config.program.clone(),
            args: config
                .args
                .iter()
                .map(|arg| arg.replace(ADDRESS_PLACEHOLDER, address))
                .collect(),
            address: address.to_string(),
        }
    }
}

/// Resolve the network address for a client.
///
/// Every client currently maps to the single configured address.
pub fn resolve_address(config: &RemoteConfig, _client: &Client) -> String {
    config.address.clone()
}

/// Whether the launcher managed to start the remote desktop client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LaunchOutcome {
    Spawned,
    Failed { reason: String },
}

/// Acknowledgement of a connection request. Says nothing about whether the
/// remote session itself succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionAttempt {
    pub client_name: String,
    pub client_code: ClientCode,
    pub address: String,
    pub launcher: String,
    pub outcome: LaunchOutcome,
    pub requested_at: DateTime<Utc>,
}

impl ConnectionAttempt {
    pub fn spawned(&self) -> bool {
        self.outcome == LaunchOutcome::Spawned
    }

    /// One-line message for the operator.
    pub fn summary(&self) -> String {
        match &self.outcome {
            LaunchOutcome::Spawned => format!(
                "Attempting remote connection to {} ({})",
                self.client_name, self.address
            ),
            LaunchOutcome::Failed { reason } => format!(
                "Could not start remote connection to {} ({}): {reason}",
                self.client_name, self.address
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_substituted_into_every_argument() {
        let config = RemoteConfig {
            address: "10.1.2.3".into(),
            program: "xfreerdp".into(),
            args: vec!["/v:{address}".into(), "/cert:ignore".into(), "{address}".into()],
            launch_enabled: true,
        };

        let request = LaunchRequest::build(&config, "10.1.2.3");
        assert_eq!(request.program, "xfreerdp");
        assert_eq!(request.args, vec!["/v:10.1.2.3", "/cert:ignore", "10.1.2.3"]);
        assert_eq!(request.address, "10.1.2.3");
    }

    #[test]
    fn summary_mentions_client_and_address() {
        let attempt = ConnectionAttempt {
            client_name: "Ali".into(),
            client_code: ClientCode::from_static("ALI12345"),
            address: "192.168.1.100".into(),
            launcher: "stub".into(),
            outcome: LaunchOutcome::Spawned,
            requested_at: Utc::now(),
        };
        assert!(attempt.spawned());
        assert_eq!(
            attempt.summary(),
            "Attempting remote connection to Ali (192.168.1.100)"
        );
    }
}
