use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::model::{NetworkRecord, Platform};
use crate::platform::AIRPORT_PATH;

/// Scans with Apple's private `airport` utility.
///
/// `airport -s` prints a header followed by one access point per line:
///
/// ```text
///                             SSID BSSID             RSSI CHANNEL HT CC SECURITY
///                       HomeWiFi 00:11:22:33:44:55 -50  6       Y  US WPA2(PSK/AES/AES)
/// ```
pub struct AirportScanner {
    path: String,
}

impl AirportScanner {
    pub fn new() -> Self {
        Self::with_path(AIRPORT_PATH)
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().into_owned(),
        }
    }
}

impl Default for AirportScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::Scanner for AirportScanner {
    fn name(&self) -> &'static str {
        "airport"
    }

    fn platform(&self) -> Platform {
        Platform::Darwin
    }

    fn program(&self) -> &str {
        &self.path
    }

    fn args(&self) -> &[&'static str] {
        &["-s"]
    }

    fn parse(&self, output: &str) -> Vec<NetworkRecord> {
        parse_airport_output(output)
    }
}

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex must compile"));

/// Parses `airport -s` output.
///
/// The first line is a header and is always dropped. Every other non-blank
/// line is split on whitespace and read positionally as
/// `SSID BSSID RSSI CHANNEL [SECURITY...]`. The SSID is assumed to contain
/// no whitespace; when it does, the columns shift and the line is misread.
///
/// Lines with fewer than four fields or a non-numeric RSSI are skipped.
pub fn parse_airport_output(output: &str) -> Vec<NetworkRecord> {
    let mut networks = Vec::new();

    for line in output.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(record) = parse_line(line) {
            debug!(
                mac = %record.mac_address,
                signal = record.signal_strength,
                channel = ?record.channel,
                "found network"
            );
            networks.push(record);
        }
    }

    if networks.is_empty() {
        warn!("no networks found in airport output");
        debug!(%output, "full airport output");
    } else {
        info!(count = networks.len(), "parsed airport output");
    }

    networks
}

fn parse_line(line: &str) -> Option<NetworkRecord> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        warn!(line, fields = parts.len(), "skipping airport line with too few fields");
        return None;
    }

    let rssi = match parts[2].parse::<i32>() {
        Ok(rssi) => rssi,
        Err(e) => {
            warn!(line, error = %e, "skipping airport line with unreadable RSSI");
            return None;
        }
    };

    Some(NetworkRecord::new(parts[1], rssi).with_channel(parse_channel(parts[3])))
}

/// First run of digits in a channel column such as `6`, `149,+1` or `6(w)`.
fn parse_channel(token: &str) -> Option<u32> {
    DIGITS_RE
        .find(token)
        .and_then(|m| m.as_str().parse().ok())
}
