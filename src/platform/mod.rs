//! Platform abstraction layer
//!
//! Pure helpers the browser host builds on:
//! - Input events to engine commands
//! - Responsive playfield sizing

pub mod input;
pub mod viewport;

pub use input::{HostAction, action_for_key, command_for};
pub use viewport::Viewport;
