//! Storage layer for Token Studio
//!
//! This crate provides the storage adapter abstraction and its backends:
//! a sled key-value store, an in-memory store and a versioned file store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod kv;
pub mod memory;
pub mod persistence;

pub use adapter::{JsonStorageExt, Result, StorageAdapter, StorageError};
pub use kv::{KvConfig, KvStore};
pub use memory::MemoryStore;
pub use persistence::{FileStore, FileStoreConfig};
