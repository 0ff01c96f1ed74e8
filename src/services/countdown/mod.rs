//! Countdown refresh and scheduling.
//!
//! `widget` computes and writes one panel's remaining time; `ticker` owns the
//! per-panel timer handles and drives refreshes at the configured period.

pub mod ticker;
pub mod widget;

pub use ticker::{CountdownTicker, TickResult};
