//! The seam between the selection logic and a display-configuration backend

use thiserror::Error;

use crate::types::{ControllerConfig, ControllerId, ControllerState, Mode, Output};

/// Error type for display service backends
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to connect to the display server: {0}")]
    Connect(String),
    #[error("Request to the display server failed: {0}")]
    Request(String),
    #[error("The display server rejected the configuration: {0}")]
    Rejected(String),
}

pub type Result<T = ()> = std::result::Result<T, ServiceError>;

/// A display-configuration service, e.g. the X RandR extension.
///
/// Every call is a blocking round-trip. Returned records are owned by the caller.
pub trait DisplayService {
    /// All outputs, including disconnected ones, in server order
    fn list_outputs(&self) -> Result<Vec<Output>>;

    /// The global mode catalog of the current screen
    fn list_modes(&self) -> Result<Vec<Mode>>;

    /// Reads the state of the given controller
    fn controller_state(&self, controller: ControllerId) -> Result<ControllerState>;

    /// Issues a single mode-change request
    fn set_controller_config(&self, controller: ControllerId, config: &ControllerConfig) -> Result;
}
