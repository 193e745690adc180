//! Framework-free session and query logic shared across the UI.
//!
//! # Design
//! - Keep state transitions as plain data + methods so they test natively.
//! - Leave storage and DOM wiring to the wasm-only `app` layer.

pub mod logic;
pub mod session;
