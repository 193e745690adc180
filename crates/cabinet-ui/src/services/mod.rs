//! REST service layer.
//!
//! # Design
//! - One shared client per app boot; endpoint wrappers live on it.
//! - Transport and decode failures are mapped to [`error::ApiError`] at this
//!   boundary; page controllers only ever see domain errors.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
