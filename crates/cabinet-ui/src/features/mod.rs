//! Page-level feature slices.

pub mod doctors;
pub mod login;
