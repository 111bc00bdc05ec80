//! # Recall
//!
//! **A local-first search history and suggestion engine.**
//!
//! Recall records accepted search submissions into a capped,
//! deduplicated, most-recent-first history and serves keystroke-level
//! suggestions from it by literal case-insensitive substring
//! containment. History is persisted as a JSON-encoded array in a
//! single named slot of a SQLite key-value table.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────────┐   ┌──────────┐
//! │ keystroke │──▶│  Suggestion  │◀──│  SQLite   │
//! │ / submit  │   │   matcher    │   │ kv slot   │
//! └─────┬─────┘   └──────────────┘   └────▲─────┘
//!       │                                 │
//!       └────────── record ───────────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. On every keystroke the **suggestion matcher**
//!    ([`recall_core::suggest`]) reads the history through the
//!    [`Slot`](recall_core::store::Slot) trait and returns a bounded,
//!    ordered subset.
//! 2. Matched spans are computed by the **highlighter**
//!    ([`recall_core::highlight`]) with explicit substring scanning —
//!    user input never reaches a pattern engine.
//! 3. On submit the query is normalized and written back through
//!    [`SearchHistory`](recall_core::history::SearchHistory): trim,
//!    case-insensitive dedupe, prepend, truncate, persist.
//!
//! ## Quick Start
//!
//! ```bash
//! rcl init                      # create database
//! rcl record "team updates"     # record a submitted search
//! rcl suggest "te"              # suggestions with match markers
//! rcl history                   # full history, most recent first
//! rcl clear                     # reset to the seed list
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`db`] | SQLite connection pool with WAL mode |
//! | [`migrate`] | Database schema migrations (idempotent) |
//! | [`sqlite_slot`] | SQLite-backed key-value slot |
//! | [`suggest`] | `rcl suggest`: suggestions with match markers |
//! | [`record`] | `rcl record`: record a submitted search |
//! | [`history`] | `rcl history` / `rcl clear`: list and reset |
//!
//! ## Configuration
//!
//! Recall is configured via a TOML file (default:
//! `config/recall.toml`). See [`config`] for all available options and
//! [`config::load_config`] for validation rules.

pub mod config;
pub mod db;
pub mod history;
pub mod migrate;
pub mod record;
pub mod sqlite_slot;
pub mod suggest;

pub use recall_core::highlight;
pub use recall_core::store;
pub use recall_core::history::SearchHistory;
