//! Doctor directory feature wiring.
//!
//! # Design
//! - Keep listing, filtering, and pagination in a single feature slice.
//! - Drive every re-fetch through the explicit controller in [`state`]; no
//!   implicit dependency tracking.
//! - Restrict API calls to the wasm view layer.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
