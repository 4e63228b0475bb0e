use std::sync::Arc;

use crate::config::RelayConfig;
use crate::forward::Forwarder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the config is behind `Arc`, the forwarder
/// clones its pooled HTTP client).
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration.
    pub config: Arc<RelayConfig>,
    /// Outbound delivery to the Discord webhook endpoint.
    pub forwarder: Forwarder,
}
