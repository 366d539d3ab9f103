//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - The `NoteStore` repository trait with the CRUD operations on notes
//! - A PostgreSQL implementation backed by an sqlx connection pool
//! - An in-memory implementation for tests and local runs
//! - Embedded migrations for the `note` table
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteStore, Store, StoreConfig};
//! use notes_core::NoteFields;
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let note = store.create_note(&NoteFields::new("Buy milk", "2%, whole", "open")).await?;
//! let all = store.list_notes().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::NoteRow;
pub use repository::NoteStore;
pub use store::{Store, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
