// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub launcher for builds and configs where nothing may be spawned.

use yesway_core::error::{Result, YeswayError};
use yesway_core::remote::{ConnectionLauncher, LaunchRequest};

/// Refuses every launch with `PlatformUnavailable`.
pub struct StubLauncher;

impl ConnectionLauncher for StubLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<()> {
        tracing::warn!(
            program = %request.program,
            address = %request.address,
            "ConnectionLauncher::launch called on stub launcher"
        );
        Err(YeswayError::PlatformUnavailable)
    }

    fn launcher_name(&self) -> &str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use yesway_core::config::{RemoteConfig, StoreConfig};
    use yesway_core::remote::LaunchOutcome;
    use yesway_core::DirectoryStore;

    use super::*;

    #[test]
    fn stub_refuses_to_launch() {
        let request = LaunchRequest::build(&RemoteConfig::default(), "192.168.1.100");
        assert!(matches!(
            StubLauncher.launch(&request),
            Err(YeswayError::PlatformUnavailable)
        ));
    }

    #[test]
    fn stub_attempt_is_recorded_as_failed() {
        let store = DirectoryStore::with_sample_data(StoreConfig::default());
        let attempt = store
            .initiate_remote_connection("Ali", &RemoteConfig::default(), &StubLauncher)
            .expect("known client");
        assert_eq!(attempt.launcher, "stub");
        assert!(matches!(attempt.outcome, LaunchOutcome::Failed { .. }));
    }
}
