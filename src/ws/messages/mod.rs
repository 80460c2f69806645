//! WebSocket message types.

mod base;
mod events;

pub use base::*;
pub use events::*;
