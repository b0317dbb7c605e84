//! Core data models for the draw analyzer.

mod draw;
mod frequency;
mod payout;
mod pick;

pub use draw::*;
pub use frequency::*;
pub use payout::*;
pub use pick::*;
