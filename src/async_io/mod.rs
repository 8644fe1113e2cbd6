//! Async skill table loading
//! Reads a directory of skill tables concurrently on the tokio runtime

pub mod loader;

pub use loader::{find_skill_files_async, load_skill_tables_async};
