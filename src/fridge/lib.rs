//! # Fridge Architecture
//!
//! Fridge keeps track of what is in the fridge: which items were bought, how many
//! are left, which compartment they sit in and how long ago they went in. It is a
//! library with a CLI client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints tables                 │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation Contract (presenter.rs, view.rs)              │
//! │  - Snapshot of groceries, filtering and sorting             │
//! │  - Input checks, propose → confirm → commit                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Data access controller, owns the store                   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Item references, quantity floor, not-found rules         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `presenter.rs` inward, code takes regular Rust arguments, returns
//! `Result<T, FridgeError>`, never writes to stdout/stderr and never exits.
//! Confirmation is a trait ([`presenter::Confirm`]), so a prompt, a dialog or a
//! `--yes` flag are all just implementations.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 2. **Store** (`store/sqlite.rs`): in-memory SQLite, plus a temp file for reopen.
//! 3. **API / presenter**: dispatch and two-step flows with a fixed clock.
//! 4. **CLI** (`tests/`): the binary run against a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The data access controller
//! - [`commands`]: Business rules for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item`, `Grocery`, `Section`, date helpers
//! - [`view`]: Snapshot filtering and sorting
//! - [`presenter`]: The contract a front end drives
//! - [`config`]: Configuration management
//! - [`init`]: Data dir resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod presenter;
pub mod store;
pub mod view;
