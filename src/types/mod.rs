//! Common types used across the relay objects and messages.

pub mod common;
pub mod serde_helpers;

pub use common::*;
