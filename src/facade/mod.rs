//! Developer-friendly facade layer (optional).
//!
//! One shared client plus one handle per resource, so application code can write
//! `rw.messages.send(..)` without wiring anything by hand.

pub mod prelude;
mod relaywarden;

pub use relaywarden::RelayWarden;
