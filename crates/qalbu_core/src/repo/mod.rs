//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value slot contract the stores persist through.
//! - Isolate SQLite query details from store logic.
//!
//! # Invariants
//! - Repositories store opaque text; they never parse store payloads.

pub mod slot_repo;
