pub mod compiler;
pub mod installer;
pub mod supervisor;
pub mod venv;
