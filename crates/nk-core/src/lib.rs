pub mod command;
pub mod flags;
pub mod options;

// Re-export for easier access
pub use command::CommandLine;
pub use options::{venv_python, BuildOptions};
