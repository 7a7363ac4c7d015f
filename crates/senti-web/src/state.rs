//! Application state and server configuration.

use std::path::PathBuf;
use std::time::Duration;

use senti_core::Dispatcher;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP status used when classification fails.
///
/// The default keeps failures at 200 with the error in the JSON body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureStatus {
    #[default]
    Ok,
    BadGateway,
}

/// Application state shared across handlers.
///
/// Built once before the listener is bound and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub failure_status: FailureStatus,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            failure_status: FailureStatus::default(),
        }
    }

    pub fn with_failure_status(mut self, failure_status: FailureStatus) -> Self {
        self.failure_status = failure_status;
        self
    }
}

/// Web server settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Option<Duration>,
    pub failure_status: FailureStatus,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            timeout: None,
            failure_status: FailureStatus::Ok,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
