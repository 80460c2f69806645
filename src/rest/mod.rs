//! REST API response bodies.
//!
//! Objects returned verbatim by REST endpoints (markets, books, candles)
//! live in [`crate::objects`]; this module holds the bodies that only exist
//! as endpoint responses.

mod types;

pub use types::*;
