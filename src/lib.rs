//! One deterministic note per calendar day, persisted locally.
//!
//! Daynote assigns each calendar day one piece of short text content from
//! a fixed, ordinally-indexed table. The assignment is derived from the
//! day-of-year by modulo rotation, committed to durable local storage the
//! first time the day is observed, and never changed afterward. A rolling
//! 7-day history is reconstructed from the same store, backfilling any day
//! the app was never opened on, and a single repeating daily reminder can
//! be (re)installed idempotently.
//!
//! # Architecture
//!
//! - **Storage**: SQLite in WAL mode behind an injected key-value
//!   interface; note entries are write-once per date key
//! - **Rotation**: pure `(day_of_year - 1) % table_size` index into an
//!   immutable content table loaded once at startup
//! - **Clock**: injected time source so date-dependent logic stays
//!   deterministic under test
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`clock`] — Time-source abstraction over the system clock
//! - [`db`] — SQLite database initialization and schema
//! - [`storage`] — Key-value storage interface and its SQLite implementation
//! - [`note`] — Core engine: content table, date keys, rotation, daily cache, history
//! - [`reminder`] — Daily reminder trigger specification and scheduling

pub mod clock;
pub mod config;
pub mod db;
pub mod note;
pub mod reminder;
pub mod storage;
