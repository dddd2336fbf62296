//! Request handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::model::ScanResult;
use crate::service::ScanService;

/// `GET /api/wifi`
///
/// Scans and returns the visible networks with their MAC addresses,
/// signal strengths and channels.
pub async fn get_wifi_networks(State(service): State<Arc<ScanService>>) -> Json<ScanResult> {
    Json(service.scan().await)
}
