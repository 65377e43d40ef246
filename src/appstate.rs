use std::sync::Arc;

use crate::{
    config::{Config, ErrorMode},
    relay::Relay,
};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub error_mode: ErrorMode,
}

impl AppState {
    pub fn new(relay: Relay, error_mode: ErrorMode) -> Self {
        Self {
            relay: Arc::new(relay),
            error_mode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Relay::from_config(config), config.error_mode)
    }
}
