use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::model::{NetworkRecord, Platform};

/// Scans with `netsh wlan show networks mode=Bssid`.
///
/// `netsh` is resolved through `PATH`.
pub struct NetshScanner;

#[async_trait]
impl super::Scanner for NetshScanner {
    fn name(&self) -> &'static str {
        "netsh"
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn program(&self) -> &str {
        "netsh"
    }

    fn args(&self) -> &[&'static str] {
        &["wlan", "show", "networks", "mode=Bssid"]
    }

    fn parse(&self, output: &str) -> Vec<NetworkRecord> {
        parse_netsh_output(output)
    }
}

static MAC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}").expect("static regex must compile")
});
static SIGNAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("static regex must compile"));
static CHANNEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*(\d+)").expect("static regex must compile"));

/// Maps a Windows signal quality percentage to an approximate dBm value.
///
/// `-100 + pct * 0.7`, truncated toward zero: 100% is -30 dBm, 0% is -100 dBm.
/// This is a fixed linear approximation, not a physical conversion.
pub fn percent_to_dbm(percentage: u32) -> i32 {
    (-100.0 + f64::from(percentage) * 0.7) as i32
}

/// Fields collected for the block currently being read.
#[derive(Debug, Default)]
struct Block {
    mac_address: Option<String>,
    signal_strength: Option<i32>,
    channel: Option<u32>,
}

impl Block {
    /// Takes the block's fields, leaving it empty. `None` when no BSSID was
    /// seen. A missing signal becomes 0.
    fn take_record(&mut self) -> Option<NetworkRecord> {
        let block = std::mem::take(self);
        let mac_address = block.mac_address?;
        Some(
            NetworkRecord::new(mac_address, block.signal_strength.unwrap_or(0))
                .with_channel(block.channel),
        )
    }
}

/// Parses `netsh wlan show networks mode=Bssid` output.
///
/// Blank lines close a block; a block becomes a record when it holds a
/// BSSID. Inside a block each trimmed line is checked, in order, for
/// `BSSID`, `Signal` and `Channel`, and the first keyword found decides
/// which field the line may set. A later match overwrites an earlier one.
/// Lines whose value does not match are ignored.
///
/// ```text
/// SSID 1 : HomeWiFi
///     Network type            : Infrastructure
///     Authentication          : WPA2-Personal
///     Encryption              : CCMP
///     BSSID 1                 : aa:bb:cc:dd:ee:ff
///          Signal             : 80%
///          Radio type         : 802.11ac
///          Channel            : 11
///
/// ```
pub fn parse_netsh_output(output: &str) -> Vec<NetworkRecord> {
    let mut networks = Vec::new();
    let mut block = Block::default();

    for line in output.lines() {
        let line = line.trim();

        if line.is_empty() {
            if let Some(record) = block.take_record() {
                networks.push(record);
            }
            continue;
        }

        if line.contains("BSSID") {
            match MAC_RE.find(line) {
                Some(mac) => block.mac_address = Some(mac.as_str().to_string()),
                None => warn!(line, "ignoring BSSID line without a MAC address"),
            }
        } else if line.contains("Signal") {
            match SIGNAL_RE.captures(line).and_then(|c| c[1].parse::<u32>().ok()) {
                Some(pct) => block.signal_strength = Some(percent_to_dbm(pct)),
                None => warn!(line, "ignoring Signal line without a percentage"),
            }
        } else if line.contains("Channel") {
            match CHANNEL_RE.captures(line).and_then(|c| c[1].parse::<u32>().ok()) {
                Some(channel) => block.channel = Some(channel),
                None => debug!(line, "ignoring Channel line without a number"),
            }
        }
    }

    // Output need not end with a blank line.
    if let Some(record) = block.take_record() {
        networks.push(record);
    }

    if networks.is_empty() {
        warn!("no networks found in netsh output");
    } else {
        info!(count = networks.len(), "parsed netsh output");
    }

    networks
}
