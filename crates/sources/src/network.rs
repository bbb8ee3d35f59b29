//! Wireless network name sources (iwd and NetworkManager)
//!
//! Like the audio source, a status tool that is missing or times out counts
//! as unavailability and renders `NO_CONNECTION`, not the block failure text.

use crate::command::{CommandRunner, SharedRunner};
use barline_core::{DataSource, SourceMetadata, SourceOutput, SourceResult};
use barline_types::{IwdSourceConfig, NetworkManagerSourceConfig};
use log::debug;
use std::time::Duration;

/// Shown when no connected network could be found
pub const NO_CONNECTION: &str = "No wlan connection";

/// Index of the network name among the whitespace-separated tokens of the
/// matching status line
const NAME_TOKEN: usize = 2;

/// Extract the network name from status output.
///
/// Takes the third token of the last line accepted by `is_match`; lines
/// with fewer tokens are ignored.
pub fn parse_network_name(output: &str, is_match: impl Fn(&str) -> bool) -> Option<String> {
    output
        .lines()
        .filter(|line| is_match(line))
        .filter_map(|line| line.split_whitespace().nth(NAME_TOKEN))
        .last()
        .map(str::to_string)
}

/// Run a status tool, logging and swallowing spawn failures and timeouts
fn status_output(runner: &dyn CommandRunner, program: &str, args: &[&str]) -> Option<String> {
    match runner.run(program, args) {
        Ok(output) => Some(output.stdout),
        Err(e) => {
            debug!("{} unavailable: {}", program, e);
            None
        }
    }
}

/// Network name as reported by `iwctl station <iface> show`
pub struct IwdSource {
    metadata: SourceMetadata,
    interface: String,
    runner: SharedRunner,
}

impl IwdSource {
    pub fn new(config: &IwdSourceConfig, runner: SharedRunner) -> Self {
        let metadata = SourceMetadata {
            id: "iwd".to_string(),
            name: "Wireless (iwd)".to_string(),
            description: "Connected wireless network reported by iwctl".to_string(),
            default_interval: Duration::from_millis(10_000),
        };

        Self {
            metadata,
            interface: config.interface.clone(),
            runner,
        }
    }
}

impl DataSource for IwdSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let Some(stdout) = status_output(
            self.runner.as_ref(),
            "iwctl",
            &["station", self.interface.as_str(), "show"],
        ) else {
            return Ok(SourceOutput::text(NO_CONNECTION));
        };

        // "Connected network     <name>"
        let name = parse_network_name(&stdout, |line| line.contains("network"));
        if name.is_none() {
            debug!("iwctl reported no network for {}", self.interface);
        }
        Ok(SourceOutput::text(
            name.unwrap_or_else(|| NO_CONNECTION.to_string()),
        ))
    }
}

/// Network name of the in-use access point as listed by `nmcli`
pub struct NetworkManagerSource {
    metadata: SourceMetadata,
    interface: String,
    runner: SharedRunner,
}

impl NetworkManagerSource {
    pub fn new(config: &NetworkManagerSourceConfig, runner: SharedRunner) -> Self {
        let metadata = SourceMetadata {
            id: "network_manager".to_string(),
            name: "Wireless (NetworkManager)".to_string(),
            description: "Connected wireless network reported by nmcli".to_string(),
            default_interval: Duration::from_millis(10_000),
        };

        Self {
            metadata,
            interface: config.interface.clone(),
            runner,
        }
    }
}

impl DataSource for NetworkManagerSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let Some(stdout) = status_output(
            self.runner.as_ref(),
            "nmcli",
            &[
                "-f",
                "IN-USE,BSSID,SSID",
                "device",
                "wifi",
                "list",
                "ifname",
                self.interface.as_str(),
                "--rescan",
                "no",
            ],
        ) else {
            return Ok(SourceOutput::text(NO_CONNECTION));
        };

        // "*        AA:BB:CC:DD:EE:FF  <name>"
        let name = parse_network_name(&stdout, |line| {
            line.trim_start().starts_with('*')
        });
        if name.is_none() {
            debug!("nmcli reported no network for {}", self.interface);
        }
        Ok(SourceOutput::text(
            name.unwrap_or_else(|| NO_CONNECTION.to_string()),
        ))
    }
}
