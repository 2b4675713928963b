//! Storage abstractions for service layer
//!
//! Attachment bytes live on local disk; records only keep the returned path.

pub mod file_store;

pub use file_store::{FileStore, LocalFileStore};
