// Core modules
pub mod catalog;
pub mod error;
pub mod fs;
pub mod job;
pub mod runner;
pub mod template;
pub mod variables;

// Re-export commonly used types
pub use error::{Result, XdTemplatesError};
pub use job::RenderJob;
pub use runner::{run_job, BatchJobRunner, RunReport};
pub use variables::VariableStore;
