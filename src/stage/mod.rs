//! Pipeline stages: configure, compile, verify.
//!
//! Each stage is a free function taking the immutable [`BuildConfig`] and a
//! [`ProcessRunner`]; stages share no state other than the build directory
//! the external tools write to.
//!
//! [`BuildConfig`]: crate::config::BuildConfig
//! [`ProcessRunner`]: crate::util::process::ProcessRunner

pub mod compile;
pub mod configure;
pub mod verify;
