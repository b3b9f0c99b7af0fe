use core::fmt;

use thiserror::Error;

use crate::{
    service::{DisplayService, ServiceError},
    types::{ControllerConfig, ControllerState, Mode, Output, Position, Rotation},
};

/// Error type for the apply stage
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("Output {0} is not driven by any controller")]
    NoController(String),
    #[error("Failed to apply {mode} on {output}")]
    Failed {
        output: String,
        mode: Mode,
        #[source]
        source: ServiceError,
    },
}

type Result<T = ()> = std::result::Result<T, ApplyError>;

/// Result of a successful apply
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ApplyOutcome {
    /// The mode change was issued and accepted
    Applied,
    /// The controller was already running the chosen mode
    AlreadyCurrent,
    /// A change would have been issued, but this was a dry run
    WouldApply,
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApplyOutcome::Applied => write!(f, "applied"),
            ApplyOutcome::AlreadyCurrent => write!(f, "already current"),
            ApplyOutcome::WouldApply => write!(f, "would apply"),
        }
    }
}

/// Builds the mode-change request for `mode`, keeping the controller's outputs
pub fn controller_config(mode: &Mode, state: &ControllerState) -> ControllerConfig {
    ControllerConfig {
        mode: mode.id,
        position: Position::new(0, 0),
        rotation: Rotation::Rotate0,
        outputs: state.outputs.clone(),
    }
}

/// Applies `mode` to the controller described by `state`.
///
/// Makes no request if the mode is already active. Otherwise issues exactly one request and does
/// not retry.
pub fn apply<S: DisplayService>(
    service: &S,
    output: &Output,
    mode: &Mode,
    state: &ControllerState,
) -> Result<ApplyOutcome> {
    if state.mode == Some(mode.id) {
        log::debug!("Already in best mode");
        return Ok(ApplyOutcome::AlreadyCurrent);
    }

    let config = controller_config(mode, state);
    log::debug!(
        "Setting {} on controller {} at {} ({})",
        mode,
        state.controller,
        config.position,
        config.rotation
    );

    service
        .set_controller_config(state.controller, &config)
        .map_err(|source| {
            log::warn!("Failed to apply chosen mode");
            ApplyError::Failed {
                output: output.name.clone(),
                mode: *mode,
                source,
            }
        })?;

    Ok(ApplyOutcome::Applied)
}
