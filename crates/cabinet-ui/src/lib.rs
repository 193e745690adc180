#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Cabinet Médical patient web UI.
//!
//! This crate holds the Yew front-end: a login screen that authenticates a
//! patient by email and phone number, and a searchable, filterable, paginated
//! doctor directory. DOM-dependent code is gated behind `wasm32`; session,
//! controller, and service-error logic live in pure modules so they can be
//! tested natively.

pub mod core;
pub mod features;
pub mod i18n;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
