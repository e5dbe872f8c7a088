pub mod core;
pub mod types;

// Re-export for easier access
pub use self::core::*;
pub use self::types::*;
