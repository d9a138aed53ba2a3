//! Application state for shared services

use std::sync::Arc;

use crate::config::GateConfig;
use crate::infrastructure::gate::RegistrationGate;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: RegistrationGate,
    pub gate_config: Arc<GateConfig>,
}

impl AppState {
    pub fn new(gate: RegistrationGate, gate_config: GateConfig) -> Self {
        Self {
            gate,
            gate_config: Arc::new(gate_config),
        }
    }
}
