//! Command-line front end that drives the feature flows headlessly.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::app::AppContainer;
use crate::config::{Config, ConfigStore};
use crate::devices::DeviceUiModel;
use crate::lifecycle::SurfaceScope;
use crate::navigation::NavigationHost;
use crate::ui::view_state::{OperationError, ViewState};

#[derive(Debug, Parser)]
#[command(name = "healthhub", version, about = "Health companion app core")]
pub struct Cli {
    /// Path to the config file (defaults to the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit an invitation code for the configured account.
    CheckInvite {
        /// The invitation code.
        code: String,
    },
    /// List paired devices.
    Devices {
        /// Open the detail screen of this device after listing.
        #[arg(long)]
        open: Option<String>,
    },
    /// Print the resolved config file path.
    ConfigPath,
}

/// Final state of a flow, as printed to the user.
#[derive(Debug, Serialize)]
pub struct FlowReport {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub screen: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<DeviceUiModel>,
}

impl FlowReport {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            return serde_json::to_string_pretty(self).context("serializing report");
        }

        let mut out = format!("state: {}\nscreen: {}\n", self.state, self.screen);
        if let Some(message) = &self.message {
            out.push_str(&format!("error: {}\n", message));
        }
        for device in &self.devices {
            out.push_str(&format!("{}  {}\n", device.address(), device.summary()));
        }
        Ok(out)
    }
}

pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::config_path)
}

pub fn load_config(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let path = config_path(cli);
    ConfigStore::open(path.clone())
        .with_context(|| format!("loading config from {}", path.display()))
}

/// Run the selected command and print its result. Returns whether the flow
/// ended without error.
pub async fn run(cli: Cli, store: ConfigStore) -> anyhow::Result<bool> {
    let report = match &cli.command {
        Command::ConfigPath => {
            println!("{}", store.path().display());
            return Ok(true);
        }
        Command::CheckInvite { code } => check_invite(store.get(), code).await?,
        Command::Devices { open } => list_devices(store.get(), open.as_deref()).await?,
    };

    print!("{}", report.render(cli.json)?);
    Ok(!report.failed())
}

pub async fn check_invite(config: Config, code: &str) -> anyhow::Result<FlowReport> {
    let container = AppContainer::new(config);
    let scope = SurfaceScope::new("invitation");
    let host = container.attach_host()?;
    let host_task = tokio::spawn(host.run(scope.handle()));

    let view_model = container.invitation_view_model(scope.handle());
    tokio::select! {
        submitted = view_model.submit(code) => submitted?,
        _ = tokio::signal::ctrl_c() => scope.dispose(),
    }

    container.shutdown();
    let host = host_task.await.context("navigation host task")?;
    Ok(report(&view_model.state(), &host, Vec::new()))
}

pub async fn list_devices(config: Config, open: Option<&str>) -> anyhow::Result<FlowReport> {
    let container = AppContainer::new(config);
    let scope = SurfaceScope::new("devices");
    let mut host = container.attach_host()?;

    let view_model = container.devices_view_model(scope.handle());
    view_model.refresh().await?;
    if let Some(address) = open {
        view_model.open(address)?;
    }

    host.drain_pending();
    container.shutdown();
    Ok(report(&view_model.state(), &host, view_model.devices().to_vec()))
}

fn report<E>(state: &ViewState<E>, host: &NavigationHost, devices: Vec<DeviceUiModel>) -> FlowReport
where
    E: OperationError,
{
    FlowReport {
        state: state.label(),
        error: state.error().map(|e| e.error_type()),
        message: state.error().map(|e| e.description().to_string()),
        screen: host.current().route(),
        devices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_invite() {
        let cli = Cli::try_parse_from(["healthhub", "--json", "check-invite", "ABC123"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::CheckInvite { ref code } if code == "ABC123"));
    }

    #[test]
    fn parses_devices_open() {
        let cli = Cli::try_parse_from([
            "healthhub",
            "devices",
            "--open",
            "AA:BB:CC:DD:EE:FF",
        ])
        .unwrap();
        assert!(
            matches!(cli.command, Command::Devices { open: Some(ref a) } if a == "AA:BB:CC:DD:EE:FF")
        );
    }

    #[test]
    fn report_carries_error_classification() {
        use crate::auth::AccountError;
        use crate::navigation::{Destination, NavigationBus};

        let bus = NavigationBus::new(4);
        let host = bus.attach_host(Destination::Home).unwrap();
        let report = report(&ViewState::Error(AccountError::NotSignedIn), &host, Vec::new());
        assert!(report.failed());
        assert_eq!(report.error, Some("not_signed_in"));
        assert_eq!(
            report.message.as_deref(),
            Some("Please sign in before entering an invitation code")
        );
        assert_eq!(report.screen, "home");
    }

    #[test]
    fn check_invite_requires_code() {
        assert!(Cli::try_parse_from(["healthhub", "check-invite"]).is_err());
    }
}
