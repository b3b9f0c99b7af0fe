//! Picks the output to configure and the best widescreen mode for it

use thiserror::Error;

use crate::types::{AspectClass, Mode, Output};

/// Modes narrower than this are never considered
pub const MIN_WIDTH: u32 = 720;

/// Ranking prefers modes whose height is closest to this
pub const TARGET_HEIGHT: u32 = 720;

/// Name fragments used by drivers for internal laptop panels
const PANEL_MARKERS: [&str; 6] = [
    "lvds", "LVDS", "Lvds", // most drivers
    "LCD",     // some fglrx versions
    "eDP",     // embedded DisplayPort
    "default", // NVidia and others
];

/// Error type for the selection stage
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("No connected output found")]
    NoConnectedOutput,
    #[error("No usable modes detected on output {0}")]
    NoUsableMode(String),
}

type Result<T = ()> = std::result::Result<T, SelectError>;

/// Returns true if the output name marks a built-in laptop panel
pub fn is_builtin_panel(name: &str) -> bool {
    PANEL_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Picks the output to configure.
///
/// The last connected external output wins; if there is none, the last connected built-in panel
/// is used. Superseded candidates are dropped as soon as they are replaced.
pub fn select_output(outputs: impl IntoIterator<Item = Output>) -> Result<Output> {
    let mut panel: Option<Output> = None;
    let mut external: Option<Output> = None;

    for output in outputs {
        if !output.is_connected() {
            log::trace!("Skipping {} ({})", output.name, output.connection);
            continue;
        }

        let slot = if is_builtin_panel(&output.name) {
            &mut panel
        } else {
            &mut external
        };

        if let Some(previous) = slot.replace(output) {
            log::trace!("Dropping superseded candidate {}", previous.name);
        }
    }

    external.or(panel).ok_or(SelectError::NoConnectedOutput)
}

/// Classifies a mode by its width to height ratio, truncated to one decimal
pub fn classify(mode: &Mode) -> AspectClass {
    if mode.height == 0 {
        return AspectClass::Unclassified;
    }

    let ratio = u64::from(mode.width) * 10 / u64::from(mode.height);
    match ratio {
        13 => AspectClass::Standard,
        16 | 17 | 23 => AspectClass::Widescreen,
        _ => AspectClass::Unclassified,
    }
}

/// Returns the widescreen modes of `all_modes` that are at least [`MIN_WIDTH`] wide and
/// supported by `output`, in catalog order
pub fn filter_modes(all_modes: &[Mode], output: &Output) -> Vec<Mode> {
    all_modes
        .iter()
        .filter(|mode| mode.width >= MIN_WIDTH)
        .filter(|mode| output.supports(mode.id))
        .filter(|mode| match classify(mode) {
            AspectClass::Widescreen => {
                log::debug!("Found widescreen ratio for {}", mode.resolution());
                true
            }
            AspectClass::Standard => false,
            AspectClass::Unclassified => {
                log::debug!("Unknown ratio for {} x {}", mode.width, mode.height);
                false
            }
        })
        .copied()
        .collect()
}

/// Orders modes best-first by distance of their height from [`TARGET_HEIGHT`].
///
/// The sort is stable, so ties keep their input order.
pub fn rank(mut modes: Vec<Mode>) -> Vec<Mode> {
    modes.sort_by_key(|mode| mode.height.abs_diff(TARGET_HEIGHT));
    modes
}

/// Filters and ranks the catalog for `output`, returning the best mode
pub fn select_mode(all_modes: &[Mode], output: &Output) -> Result<Mode> {
    let candidates = filter_modes(all_modes, output);
    log::debug!(
        "{} of {} modes usable on {}",
        candidates.len(),
        all_modes.len(),
        output.name
    );

    rank(candidates)
        .into_iter()
        .next()
        .ok_or_else(|| SelectError::NoUsableMode(output.name.clone()))
}
