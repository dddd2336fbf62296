use crate::model::{NetworkRecord, ScanResult};
use anyhow::Result;
use chrono::Local;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "BSSID")]
    mac_address: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Quality")]
    quality: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Band")]
    band: String,
}

impl From<&NetworkRecord> for NetworkRow {
    fn from(record: &NetworkRecord) -> Self {
        Self {
            mac_address: record.mac_address.clone(),
            signal: format!("{} dBm", record.signal_strength),
            quality: signal_bar(record.signal_strength),
            channel: record
                .channel
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            band: record.channel.map(band_for_channel).unwrap_or("-").to_string(),
        }
    }
}

pub fn print_cli_table(result: &ScanResult) -> Result<()> {
    println!();
    println!(
        "Scan completed at: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    if let Some(error) = &result.error {
        println!("Scan failed: {}", error);
        return Ok(());
    }

    if result.networks.is_empty() {
        println!("No networks found.");
        return Ok(());
    }

    println!("Found {} networks:", result.networks.len());
    println!();

    let rows: Vec<NetworkRow> = result.networks.iter().map(NetworkRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    Ok(())
}

/// Five-step bar for a dBm reading.
fn signal_bar(dbm: i32) -> String {
    let bars = match dbm {
        d if d >= -50 => 5,
        d if d >= -60 => 4,
        d if d >= -70 => 3,
        d if d >= -80 => 2,
        d if d >= -90 => 1,
        _ => 0,
    };
    format!("{}{}", "▮".repeat(bars), "▯".repeat(5 - bars))
}

fn band_for_channel(channel: u32) -> &'static str {
    match channel {
        1..=14 => "2.4 GHz",
        32..=177 => "5 GHz",
        _ => "?",
    }
}
