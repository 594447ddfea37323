//! Logging setup with an optional JSONL session log.
//!
//! Console output goes through `tracing_subscriber::fmt`. When a log
//! directory is given, every event is also appended to a JSONL file, one file
//! per session name per day:
//!
//! ```text
//! logs/
//! └── raw/
//!     └── 2026-03-28_desktop.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use birthday_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("desktop")
//!     .with_logs_dir("./logs")
//!     .with_filter("birthday=debug,birthday_core=debug")
//!     .init()?;
//! ```
//!
//! ### Querying with jq
//!
//! ```bash
//! # Navigation changes only
//! jq 'select(.target == "birthday_core::navigator")' logs/raw/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_entries, SessionLogWriter};
