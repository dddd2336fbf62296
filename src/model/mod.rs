//! Core data types for scan results.
//!
//! - [`NetworkRecord`] - One access point sighting
//! - [`ScanResult`] - The outcome of one scan request
//! - [`Platform`] - Operating systems with a scan pipeline
//!
//! # Example
//!
//! ```
//! use wifiscan::{NetworkRecord, ScanResult};
//!
//! let record = NetworkRecord::new("00:11:22:33:44:55", -50).with_channel(Some(6));
//! let result = ScanResult::ok(vec![record]);
//!
//! assert_eq!(result.networks.len(), 1);
//! assert!(result.error.is_none());
//! ```

mod network;

pub use network::*;
