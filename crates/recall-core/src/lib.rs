//! # Recall Core
//!
//! Shared, WASM-safe logic for Recall: the search history model,
//! suggestion matcher, match highlighting, and storage slot trait.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! native-only dependencies. It compiles to both native targets and
//! `wasm32-unknown-unknown`.

pub mod highlight;
pub mod history;
pub mod store;
pub mod suggest;
