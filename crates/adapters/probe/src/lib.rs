//! # sandman-web-adapter-probe
//!
//! Health probe implementations.
//!
//! Two mechanisms cover both collaborator services:
//! - [`CommandProbe`] spawns a command and maps its exit code
//!   (0 = healthy), which is how the sandman daemon itself is checked
//!   through systemd.
//! - [`TcpProbe`] attempts a TCP connect with a short timeout, which is
//!   enough to tell whether rhasspy's web server is up.
//!
//! Probes never error: anything unexpected is reported as unhealthy.

use std::process::Stdio;
use std::time::Duration;

use sandman_web_app::ports::HealthProbe;
use sandman_web_domain::health::HealthStatus;

/// Probe that runs a command and maps the exit code onto a status.
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
}

impl CommandProbe {
    /// Create a probe running `program` with `args`.
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Probe a systemd unit via `systemctl is-active --quiet <unit>`.
    #[must_use]
    pub fn systemd_unit(unit: &str) -> Self {
        Self::new(
            "systemctl",
            ["is-active".to_string(), "--quiet".to_string(), unit.to_string()],
        )
    }
}

impl HealthProbe for CommandProbe {
    async fn check(&self) -> HealthStatus {
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => HealthStatus::from_exit_code(status.code().unwrap_or(1)),
            Err(err) => {
                tracing::debug!(program = %self.program, error = %err, "health probe command failed to run");
                HealthStatus::Unhealthy
            }
        }
    }
}

/// Probe that attempts a TCP connect within a timeout.
pub struct TcpProbe {
    address: String,
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe for `address` (`host:port`) with the given connect
    /// timeout.
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }
}

impl HealthProbe for TcpProbe {
    async fn check(&self) -> HealthStatus {
        let connect = tokio::net::TcpStream::connect(&self.address);
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_)) => HealthStatus::Healthy,
            Ok(Err(err)) => {
                tracing::debug!(address = %self.address, error = %err, "health probe connect failed");
                HealthStatus::Unhealthy
            }
            Err(_) => {
                tracing::debug!(address = %self.address, "health probe connect timed out");
                HealthStatus::Unhealthy
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_report_healthy_for_zero_exit_code() {
        let probe = CommandProbe::new("true", []);
        assert_eq!(probe.check().await, HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn should_report_unhealthy_for_nonzero_exit_code() {
        let probe = CommandProbe::new("false", []);
        assert_eq!(probe.check().await, HealthStatus::Unhealthy);
    }

    #[tokio::test]
    async fn should_report_unhealthy_when_command_missing() {
        let probe = CommandProbe::new("/nonexistent/health-check", []);
        assert_eq!(probe.check().await, HealthStatus::Unhealthy);
    }

    #[tokio::test]
    async fn should_report_healthy_when_port_accepts_connections() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = TcpProbe::new(addr.to_string(), Duration::from_millis(500));
        assert_eq!(probe.check().await, HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn should_report_unhealthy_when_port_closed() {
        // Bind then drop to find a port that is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = TcpProbe::new(addr.to_string(), Duration::from_millis(500));
        assert_eq!(probe.check().await, HealthStatus::Unhealthy);
    }
}
