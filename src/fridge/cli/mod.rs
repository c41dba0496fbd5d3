//! # CLI Behavior
//!
//! This is **one possible UI client** for fridge, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `fridge` library.
//!
//! ### Naked Execution (`fridge`)
//!
//! Running `fridge` with no arguments defaults to `fridge list`.
//!
//! ### Changes Are Confirmed
//!
//! `add` and `remove` show what they are about to do and wait for `y`.
//! `--yes` skips the question, as does `fridge config confirm false`.
//!
//! ### Every Change Prints the Fridge
//!
//! After `add`, `use` and `remove` the list is fetched again and printed, so
//! what you see is always what is stored.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the view and format output
//! - `prompt`: Terminal confirmation
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
