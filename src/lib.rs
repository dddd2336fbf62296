pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod platform;
pub mod runner;
pub mod scanner;
pub mod service;

pub use config::Config;
pub use error::ScanError;
pub use model::{NetworkRecord, Platform, ScanResult};
pub use scanner::Scanner;
pub use service::ScanService;
