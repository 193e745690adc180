//! Shared presentational components.

pub(crate) mod doctor_card;
pub(crate) mod guard;
pub(crate) mod pagination;
