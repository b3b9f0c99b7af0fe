use core::fmt;

use thiserror::Error;

use crate::{
    apply::{ApplyError, ApplyOutcome, apply},
    select::{SelectError, select_mode, select_output},
    service::{DisplayService, ServiceError},
    types::Mode,
};

/// Error type for a whole configuration run
#[derive(Error, Debug)]
pub enum ConfigureError {
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error("Error when calling the display service")]
    Service(#[from] ServiceError),
}

type Result<T = ()> = std::result::Result<T, ConfigureError>;

/// Options for a configuration run
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    /// Decide, but never issue the mode change
    pub dry_run: bool,
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub mode: Mode,
    pub applied: ApplyOutcome,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: {}",
            self.mode.resolution(),
            self.output,
            self.applied
        )
    }
}

/// Picks the best output and widescreen mode and applies it.
///
/// Every fetched record is owned by this call and dropped on return, whichever path returns.
pub fn configure<S: DisplayService>(service: &S, options: &Options) -> Result<Outcome> {
    let outputs = service.list_outputs()?;
    log::debug!("Discovered {} outputs", outputs.len());

    let output = select_output(outputs)?;
    log::debug!("Selected {}", output);

    let modes = service.list_modes()?;
    let mode = select_mode(&modes, &output)?;
    log::debug!("Chose {} x {}", mode.width, mode.height);

    let controller = output
        .controller
        .ok_or_else(|| ApplyError::NoController(output.name.clone()))?;
    let state = service.controller_state(controller)?;

    let applied = if options.dry_run && state.mode != Some(mode.id) {
        ApplyOutcome::WouldApply
    } else {
        apply(service, &output, &mode, &state)?
    };

    Ok(Outcome {
        output: output.name,
        mode,
        applied,
    })
}
