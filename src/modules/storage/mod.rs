//! Storage module for uploaded report photos
//!
//! Provides a local-disk store that validates extensions, writes files under
//! collision-resistant names, and resolves them to public URLs.

mod local_storage;

pub use local_storage::LocalImageStorage;
