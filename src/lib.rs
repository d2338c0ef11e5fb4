pub mod application;

// Re-export from application for convenience
pub use application::config;
pub use application::error;
