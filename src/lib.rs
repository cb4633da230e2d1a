pub mod browser;
pub mod config;
pub mod engine;
pub mod fonts;
pub mod naming;
pub mod paths;
pub mod platform;
pub mod prompt;
pub mod scaffold;
pub mod templates;
pub mod toolcheck;
pub mod workflow;

// Re-export commonly used types
pub use scaffold::{ProjectRequest, ProjectScaffolder, ScaffoldError, ScaffoldOptions};
pub use toolcheck::{Capability, Tool, ToolChecker};
