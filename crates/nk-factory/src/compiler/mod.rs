pub mod async_handler;
pub mod cli;
pub mod core;
pub mod types;
pub mod utils;

// Re-export for easier access
pub use self::async_handler::*;
pub use self::cli::*;
pub use self::core::*;
pub use self::types::*;
pub use self::utils::*;
