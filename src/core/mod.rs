//! Core library components.

pub mod constants;
pub mod context;
pub mod frontend;
pub mod provision;
pub mod record;
pub mod secrets;
