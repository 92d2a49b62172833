// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Launcher that spawns the configured remote desktop client as a child
// process. `launch` returns as soon as the child exists; a named reaper
// thread waits on it so no zombie is left once the session ends.

use std::process::{Child, Command, Stdio};

use tracing::{debug, info, instrument, warn};
use yesway_core::error::{Result, YeswayError};
use yesway_core::remote::{ConnectionLauncher, LaunchRequest};

/// Spawns `request.program` with `request.args`.
pub struct ProcessLauncher;

impl ConnectionLauncher for ProcessLauncher {
    #[instrument(skip(self), fields(program = %request.program))]
    fn launch(&self, request: &LaunchRequest) -> Result<()> {
        let child = Command::new(&request.program)
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| YeswayError::Launch(format!("{}: {e}", request.program)))?;

        info!(pid = child.id(), address = %request.address, "remote desktop client spawned");
        reap_in_background(child);
        Ok(())
    }

    fn launcher_name(&self) -> &str {
        "process"
    }
}

/// Wait on `child` from a detached thread and log how it ended.
fn reap_in_background(mut child: Child) {
    let pid = child.id();
    let spawned = std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => debug!(pid, %status, "remote desktop client exited"),
            Err(e) => warn!(pid, error = %e, "could not wait on remote desktop client"),
        });
    if let Err(e) = spawned {
        warn!(pid, error = %e, "could not start reaper thread");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(program: &str) -> LaunchRequest {
        LaunchRequest {
            program: program.into(),
            args: vec!["/v:192.168.1.100".into()],
            address: "192.168.1.100".into(),
        }
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let err = ProcessLauncher
            .launch(&request("yesway-no-such-remote-client"))
            .expect_err("program does not exist");
        match err {
            YeswayError::Launch(detail) => {
                assert!(detail.starts_with("yesway-no-such-remote-client"));
            }
            other => panic!("expected Launch, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn existing_program_spawns_without_waiting() {
        ProcessLauncher
            .launch(&request("true"))
            .expect("`true` should spawn");
    }

    /// Children of this process that have exited but not been reaped.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| std::fs::read_to_string(entry.path().join("stat")).ok())
            .filter(|stat| {
                // "pid (comm) state ppid ..."; comm may contain spaces.
                let Some(rest) = stat.rfind(')').map(|i| &stat[i + 1..]) else {
                    return false;
                };
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn finished_children_are_reaped() {
        for _ in 0..3 {
            ProcessLauncher
                .launch(&request("true"))
                .expect("`true` should spawn");
        }

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut zombies = zombie_children();
        while zombies > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(50));
            zombies = zombie_children();
        }
        assert_eq!(zombies, 0, "exited remote desktop clients were not reaped");
    }
}
