// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Yesway: platform launchers behind the `ConnectionLauncher` seam.
//
// The process launcher hands the command line to the operating system. The
// stub launcher stands in when launching is switched off in the config, so
// the console still records the attempt without starting anything.

pub mod process;
pub mod stub;

use yesway_core::config::RemoteConfig;
use yesway_core::remote::ConnectionLauncher;

/// Pick the launcher the configuration asks for.
pub fn connection_launcher(config: &RemoteConfig) -> Box<dyn ConnectionLauncher> {
    if config.launch_enabled {
        Box::new(process::ProcessLauncher)
    } else {
        tracing::info!("remote launching disabled, using stub launcher");
        Box::new(stub::StubLauncher)
    }
}
