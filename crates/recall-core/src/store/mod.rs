//! Storage abstraction for Recall.
//!
//! The [`Slot`] trait defines the named key-value slot the search
//! history is persisted in, enabling pluggable backends (SQLite,
//! in-memory, future WASM-compatible stores).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

/// Abstract key-value slot backend for Recall.
///
/// All operations are async (via `async-trait`) to support both native
/// runtimes (tokio) and future WASM environments. In-memory
/// implementations return immediately-ready futures.
///
/// Values are opaque strings; the history layer owns the JSON encoding
/// of what goes into a slot, so a backend never needs to understand
/// the payload it stores.
#[async_trait]
pub trait Slot: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}
