use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// A single access point seen during a scan.
///
/// Serialized with camelCase field names; absent optionals are written as
/// `null` rather than skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    pub mac_address: String,
    /// Signal strength in dBm.
    pub signal_strength: i32,
    pub channel: Option<u32>,
    /// Reserved. No scanner fills this in.
    pub age: Option<u32>,
}

impl NetworkRecord {
    pub fn new(mac_address: impl Into<String>, signal_strength: i32) -> Self {
        Self {
            mac_address: mac_address.into(),
            signal_strength,
            channel: None,
            age: None,
        }
    }

    pub fn with_channel(mut self, channel: Option<u32>) -> Self {
        self.channel = channel;
        self
    }
}

/// Response body of `GET /api/wifi`.
///
/// When `error` is set, `networks` is empty: a failed scan never returns
/// the records parsed before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub networks: Vec<NetworkRecord>,
    pub error: Option<String>,
}

impl ScanResult {
    pub fn ok(networks: Vec<NetworkRecord>) -> Self {
        Self {
            networks,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            networks: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Host operating systems that have a scan pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Windows,
}

impl Platform {
    /// Resolves a platform identifier such as `"Darwin"` or `"windows"`.
    ///
    /// Matching is case-insensitive. Anything other than the two known
    /// identifiers is rejected.
    pub fn from_id(id: &str) -> Result<Self, ScanError> {
        match id.to_lowercase().as_str() {
            "darwin" => Ok(Platform::Darwin),
            "windows" => Ok(Platform::Windows),
            _ => Err(ScanError::UnsupportedPlatform(id.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Darwin => "macOS",
            Platform::Windows => "Windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
