//! Output formatting for estimation results.

pub mod terminal;

pub use terminal::format_estimate;
