//! Infrastructure layer for quillform
//!
//! Adapters implementing the application-layer ports: an in-memory
//! backend (the demo and test persistence collaborator), a JSON catalog
//! seed file, a tracing-backed notifier, and file configuration.

pub mod catalog_file;
pub mod config;
pub mod memory;
pub mod notify;

pub use catalog_file::{CatalogFileError, CatalogSeed};
pub use config::{ConfigLoader, FileConfig};
pub use memory::InMemoryBackend;
pub use notify::TracingNotifier;
