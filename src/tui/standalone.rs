//! Standalone mode subprocess management.

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, warn};

/// Guard for the spawned authority process. Kills it on drop.
pub struct AuthorityGuard {
    server: Option<Child>,
}

impl Drop for AuthorityGuard {
    fn drop(&mut self) {
        if let Some(mut server) = self.server.take() {
            debug!("Killing authority process");
            let _ = server.start_kill();
        }
    }
}

/// Spawns the bundled move authority on `port` and waits until it answers.
pub async fn spawn_authority(port: u16) -> Result<AuthorityGuard> {
    info!(port, "Starting standalone mode: spawning move authority");

    // Get the path to the current executable
    let exe = std::env::current_exe().context("Failed to get current executable path")?;

    let server = Command::new(&exe)
        .arg("serve")
        .arg("--port")
        .arg(port.to_string())
        .arg("--host")
        .arg("127.0.0.1")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .context("Failed to spawn authority process")?;

    let guard = AuthorityGuard {
        server: Some(server),
    };

    // Wait for the listener to come up before handing control to the client.
    let client = reqwest::Client::new();
    let url = format!("http://127.0.0.1:{}/newgame", port);
    for attempt in 0..20 {
        sleep(Duration::from_millis(150)).await;
        match client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                info!(attempt, "Authority is up");
                return Ok(guard);
            }
            Ok(response) => debug!(status = %response.status(), "Authority not ready"),
            Err(e) => debug!(error = %e, "Authority not ready"),
        }
    }

    warn!(port, "Authority did not come up in time");
    anyhow::bail!("move authority on port {} did not start", port)
}
