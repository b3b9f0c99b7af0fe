//! A library to pick and apply the best widescreen display mode.
//!
//! The selection core is pure: [`select_output`] chooses which connected output to configure,
//! [`filter_modes`] and [`rank`] choose the mode, and [`apply`] issues the change through a
//! [`DisplayService`]. [`configure`] runs the whole sequence once.

mod apply;
mod configure;
mod select;
mod service;
mod types;

#[cfg(all(target_family = "unix", feature = "unix-x11"))]
pub mod platforms;

pub use apply::*;
pub use configure::*;
pub use select::*;
pub use service::{DisplayService, ServiceError};
pub use types::*;
