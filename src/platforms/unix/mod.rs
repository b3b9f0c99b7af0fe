#[cfg(feature = "unix-x11")]
mod x11;

#[cfg(feature = "unix-x11")]
pub use x11::*;
