//! Display service backends

#[cfg(target_family = "unix")]
pub mod unix;
