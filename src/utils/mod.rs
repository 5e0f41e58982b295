//! Utility modules for date handling.
//!
//! These helpers back the timeline with date parsing and rendering that
//! is independent of calendar layout.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date input parsing and token-pattern formatting
//! - [`date`] - Plain calendar-date helpers such as runs of recent days
//! - [`relative`] - Relative time labels ("3天前", "2小时后")
//!
//! Every function that depends on the current date or time takes it as an
//! argument; none of them read the system clock.

pub mod date;
pub mod datetime;
pub mod relative;
