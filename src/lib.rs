//! `stride` - steps, distance and stride calculator.
//!
//! Converts between step counts and distance for walking and running, using
//! a stride estimated from height or entered directly. The [`engine`] holds
//! the arithmetic, [`narrative`] the tips and interpretation text, and the
//! remaining modules the terminal front end around them.

// Re-export public modules for use in integration tests and the binaries
pub mod app;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod forms;
pub mod input;
pub mod logging;
pub mod narrative;
pub mod types;
pub mod ui;
