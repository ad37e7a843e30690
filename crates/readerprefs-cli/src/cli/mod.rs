//! # CLI Layer
//!
//! This is **one possible client** of the decoration engine: a preview that
//! stands in for the platform settings screen. It is the only place that
//! knows about stdout, stderr and exit codes.
//!
//! ## Commands
//!
//! - `show` (default): the decorated screen, grouped by setting group.
//! - `set KEY=VALUE...`: replays each change through the decorator, in order,
//!   then shows the screen. `--strict` rejects out-of-range slider values.
//! - `groups`: the setting groups and their keys.
//! - `reactions`: the reactions attached to every key.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: text and JSON output
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
