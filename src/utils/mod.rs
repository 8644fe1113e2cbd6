//! Utility modules shared by the loaders and the binary

pub mod arrow;
pub mod logging;

pub use logging::{log_operation_complete, log_operation_start, log_unknown_skills, log_warning};
